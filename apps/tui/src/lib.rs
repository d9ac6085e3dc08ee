// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod terminal;
pub mod ui;
pub mod weather;

pub use app::{App, PanelId};
pub use weather::WeatherbitClient;
