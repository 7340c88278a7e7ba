pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod logging;
pub mod routes;
pub mod ui;
