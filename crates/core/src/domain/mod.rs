pub mod breakdown;
pub mod speed;
pub mod year;

// Re-exports for convenience
pub use breakdown::*;
pub use speed::*;
pub use year::*;
