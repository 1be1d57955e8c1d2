pub mod app;
pub mod command;
pub mod helper;
pub mod input;
pub mod state;
pub mod theme;


pub use app::App;
pub use state::{AppState, Command};
