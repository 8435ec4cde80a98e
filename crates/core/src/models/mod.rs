pub mod aggregates;
pub mod display;
pub mod entry;
pub mod goal;
pub mod ledger;
pub mod payload;
pub mod period;
pub mod settings;
pub mod view;
