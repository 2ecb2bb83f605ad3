//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - analyze: Single-text and batch analysis
//! - info: Information display (lexicon, config)
//! - serve: API server

pub mod analyze;
pub mod info;
pub mod serve;

// Re-export all public handlers
pub use analyze::*;
pub use info::*;
pub use serve::*;
