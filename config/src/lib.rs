//! # Config Crate
//!
//! Centralized configuration constants for the PolySet builder pipeline.
//! All sentinel values and tunable parameters are defined here so the
//! builder, its merge layer and downstream consumers agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_POLYGON_VERTICES, NO_COLOR_INDEX};
//!
//! // A face needs at least three distinct vertices to be committed
//! let face = [0u32, 1, 2];
//! assert!(face.len() >= MIN_POLYGON_VERTICES);
//!
//! // Faces without an explicit color carry the sentinel
//! let color_indices = [NO_COLOR_INDEX, 0];
//! assert!(color_indices[0] < 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **OpenSCAD Compatible**: Defaults match OpenSCAD behavior

pub mod constants;
