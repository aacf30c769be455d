pub mod config;
pub mod mirror;
pub mod state;
pub mod store;
