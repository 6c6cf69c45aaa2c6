//! Input/output surfaces and error handling
//!
//! This module contains everything that faces the caller rather than the
//! maze itself:
//! - Error types and the crate result alias
//! - Engine defaults and safety limits
//! - Text rendering for terminal inspection
//! - The command-line surface

/// Command-line surface
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Plain-text rendering of grids and overlays
pub mod render;
