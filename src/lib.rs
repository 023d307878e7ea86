//! gitmon - terminal viewer for git history
//!
//! Shows the commit log of one local repository as a table and filters
//! the rows by author through a bar of buttons.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Configuration file and command-line overrides
//! - [`git`]: git command execution and log parsing
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models (commits, filter)
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod git;
pub mod keys;
pub mod model;
pub mod ui;
