// Public module exports for the lorascrub binary and tests
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod settings;
pub mod transform;
pub mod tui;
