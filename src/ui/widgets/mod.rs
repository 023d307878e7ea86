//! Reusable UI widgets

mod error_banner;
mod status_bar;

pub use error_banner::render_error_banner;
pub use status_bar::{build_status_bar, render_status_bar, status_bar_area};
