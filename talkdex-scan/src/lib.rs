//! Talkdex Scan - Talk entry discovery
//!
//! Walks the year directories of a talks repository and loads one metadata
//! record per entry.

pub mod filter;
pub mod scanner;

pub use filter::*;
pub use scanner::*;
