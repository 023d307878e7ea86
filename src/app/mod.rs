//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and construction
//! - `input`: Key and mouse event handling
//! - `refresh`: Reloading data from git
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::App;
