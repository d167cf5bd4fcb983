pub mod clock;
pub mod commands;
pub mod queries;

pub use clock::*;
pub use commands::*;
pub use queries::*;
