//! # Config Crate
//!
//! Centralized configuration constants for the pipe mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_PIPE_RADIUS, DEFAULT_PIPE_RADIUS, DEFAULT_RING_VERTICES};
//!
//! // Defaults always satisfy the validation bounds
//! assert!(DEFAULT_PIPE_RADIUS >= MIN_PIPE_RADIUS);
//!
//! // Use ring resolution defaults when the caller gives none
//! let requested: Option<u32> = None;
//! let ring_vertices = requested.unwrap_or(DEFAULT_RING_VERTICES);
//! assert_eq!(ring_vertices, 7);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `const` items and pure helper functions
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
