pub mod battle;
pub mod capture;
pub mod config;
pub mod creature;
pub mod dex;
pub mod error;
pub mod experience;
pub mod factory;
pub mod inventory;
pub mod state;
pub mod statuses;
pub mod utils;
