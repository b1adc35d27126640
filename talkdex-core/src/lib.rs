//! Talkdex Core - Core data structures shared by every talkdex crate
//!
//! Defines the talk model, the language tables, the unified error type,
//! configuration loading and the logging bootstrap.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
