pub mod clock;
pub mod noop;
pub mod traits;
