//! yearprog application library
//!
//! This exposes the terminal front end of yearprog for testing and external usage.
//! The time model and simulated clock live in `yearprog-core`.

pub mod app;
pub mod cli;
pub mod config;
pub mod ticker;
pub mod ui;
