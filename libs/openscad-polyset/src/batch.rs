//! # Batch Building
//!
//! Builds several independent PolySets in parallel.
//!
//! Each group of fragments gets its own [`PolySetBuilder`]; builders share
//! nothing but the read-only geometry they consume.

use crate::builder::PolySetBuilder;
use crate::config::BuilderConfig;
use crate::geometry::Geometry;
use crate::polyset::PolySet;
use rayon::prelude::*;
use std::sync::Arc;

/// Builds one PolySet per group, in input order.
///
/// # Example
///
/// ```rust
/// use openscad_polyset::batch::build_all;
/// use openscad_polyset::config::BuilderConfig;
///
/// let meshes = build_all(&[Vec::new(), Vec::new()], BuilderConfig::default());
/// assert_eq!(meshes.len(), 2);
/// assert!(meshes.iter().all(|ps| ps.is_empty()));
/// ```
pub fn build_all(groups: &[Vec<Arc<Geometry>>], config: BuilderConfig) -> Vec<PolySet> {
    groups
        .par_iter()
        .map(|group| build_group(group, config))
        .collect()
}

/// Builds a single group of fragments into one PolySet.
pub fn build_group(group: &[Arc<Geometry>], config: BuilderConfig) -> PolySet {
    let mut builder = PolySetBuilder::with_config(config);
    for geom in group {
        builder.append_geometry(geom);
    }
    builder.build()
}
