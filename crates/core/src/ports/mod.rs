pub mod time;

// Re-exports
pub use time::*;
