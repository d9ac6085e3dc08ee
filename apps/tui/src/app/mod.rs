// App module for forecast_tui
// Handles application state and the reload actions

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, InputMode, PanelId};
