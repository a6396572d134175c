pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod shutdown;
pub mod state;
