pub mod animation_service;
pub mod goal_service;
pub mod ledger_service;
pub mod view_service;
