pub mod args;
pub mod config;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod screen;
pub mod services;
pub mod store;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
