//! Talkdex Report - Statistics and index document generation
//!
//! Aggregates scanned talks into statistics, renders the per-language index
//! and statistics fragments, and patches them into hand-maintained
//! documents between fixed heading markers.

pub mod generator;
pub mod locale;
pub mod patch;
pub mod render;
pub mod stats;

// Re-export main types and functions
pub use generator::*;
pub use locale::*;
pub use patch::*;
pub use render::*;
pub use stats::*;
