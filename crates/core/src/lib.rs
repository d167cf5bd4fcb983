//! yearprog Core - Pure time model with no terminal or I/O dependencies
//!
//! This crate contains the year-progress arithmetic, the simulated clock
//! state machine that drives it, and the `Clock` port the clock samples
//! real time through. Rendering, configuration and the tick timer live in
//! the `yearprog` binary crate.

pub mod app;
pub mod domain;
pub mod ports;

// Re-exports for ergonomics
pub use domain::*;
