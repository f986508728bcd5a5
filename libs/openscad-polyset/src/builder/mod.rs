//! # PolySet Builder
//!
//! Incremental, single-use builder that welds geometry fragments into one
//! indexed [`PolySet`].
//!
//! ## Module Structure
//!
//! - `vertex_store` - Exact-equality point deduplication
//! - `polygon` - Begin/add/end polygon state machine
//! - `color_index` - Palette and sparse per-face color table
//! - `merge` - Geometry flattening and PolySet re-threading
//! - `registry` - Curve and surface metadata deduplication
//!
//! ## Lifecycle
//!
//! ```text
//! new/with_config → append_geometry / append_polygon_* / begin..end → build
//! ```
//!
//! [`PolySetBuilder::build`] consumes the builder, so a session can only be
//! finalized once.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use openscad_polyset::PolySetBuilder;
//!
//! let mut builder = PolySetBuilder::default();
//! builder.append_polygon_points(&[DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)]);
//! builder.append_polygon_points(&[DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y]);
//! let ps = builder.build();
//! assert_eq!(ps.num_vertices(), 4);
//! assert!(ps.is_triangular());
//! ```

mod color_index;
mod merge;
mod polygon;
mod registry;
mod vertex_store;

pub use color_index::ColorIndexer;
pub use registry::CurveSurfaceRegistry;
pub use vertex_store::VertexStore;

use crate::color::Color4f;
use crate::config::BuilderConfig;
use crate::polyset::{Dim, PolySet, Tribool};
use config::constants::LOG_TARGET;
use glam::{DVec3, Vec3};

// =============================================================================
// BUILDER
// =============================================================================

/// Builder session producing one [`PolySet`].
///
/// Not thread-safe to share; independent builders may run on separate
/// threads (see [`crate::batch`]).
#[derive(Debug, Clone, Default)]
pub struct PolySetBuilder {
    config: BuilderConfig,
    vertices: VertexStore,
    indices: Vec<Vec<u32>>,
    current_polygon: Vec<u32>,
    colors: ColorIndexer,
    registry: CurveSurfaceRegistry,
    dropped_polygons: usize,
}

impl PolySetBuilder {
    /// Creates a builder pre-sized for the given counts (0 = no reservation).
    pub fn new(vertex_capacity: usize, polygon_capacity: usize, dim: Dim, convex: Tribool) -> Self {
        Self::with_config(BuilderConfig {
            dim,
            convex,
            vertex_capacity,
            polygon_capacity,
            ..BuilderConfig::default()
        })
    }

    /// Creates a builder from a validated configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        let mut builder = Self {
            config,
            ..Self::default()
        };
        builder.reserve(config.vertex_capacity, config.polygon_capacity);
        builder
    }

    /// Makes room for a total of `vertex_count` vertices and
    /// `polygon_count` polygons. Zero leaves the respective buffer alone.
    pub fn reserve(&mut self, vertex_count: usize, polygon_count: usize) {
        if vertex_count != 0 {
            self.vertices.reserve_total(vertex_count);
        }
        if polygon_count != 0 {
            self.indices
                .reserve(polygon_count.saturating_sub(self.indices.len()));
        }
    }

    /// Sets the convexity multiplicity of the output.
    pub fn set_convexity(&mut self, convexity: u32) {
        self.config.convexity = convexity;
    }

    /// Dimensionality of the output.
    #[inline]
    pub fn dim(&self) -> Dim {
        self.config.dim
    }

    /// Number of distinct vertices registered so far.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of committed polygons.
    #[inline]
    pub fn num_polygons(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing has been registered or committed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Number of polygons discarded for having fewer than three distinct
    /// vertices.
    #[inline]
    pub fn dropped_polygons(&self) -> usize {
        self.dropped_polygons
    }

    /// The palette collected so far.
    #[inline]
    pub fn palette(&self) -> &[Color4f] {
        self.colors.palette()
    }

    /// The per-face color table collected so far.
    #[inline]
    pub fn color_indices(&self) -> &[i32] {
        self.colors.color_indices()
    }

    /// Returns the index of `point`, registering it if unseen.
    pub fn vertex_index(&mut self, point: DVec3) -> u32 {
        self.vertices.index(point)
    }

    /// Replaces the contents of `out` with all vertices in insertion order.
    pub fn copy_vertices(&self, out: &mut Vec<DVec3>) {
        self.vertices.copy_into(out);
    }

    /// Single precision variant of [`copy_vertices`](Self::copy_vertices).
    pub fn copy_vertices_f32(&self, out: &mut Vec<Vec3>) {
        self.vertices.copy_into_f32(out);
    }

    // =========================================================================
    // FINALIZER
    // =========================================================================

    /// Closes any open polygon and moves all buffers into a [`PolySet`].
    pub fn build(mut self) -> PolySet {
        self.end_polygon();

        let triangular = !self.indices.iter().any(|face| face.len() > 3);
        let (colors, color_indices) = self.colors.into_parts();
        let (curves, surfaces) = self.registry.into_parts();

        log::debug!(
            target: LOG_TARGET,
            "built PolySet: {} vertices, {} polygons, {} colors, {} dropped",
            self.vertices.len(),
            self.indices.len(),
            colors.len(),
            self.dropped_polygons
        );

        PolySet {
            dim: self.config.dim,
            convex: self.config.convex,
            convexity: self.config.convexity,
            triangular,
            vertices: self.vertices.into_points(),
            indices: self.indices,
            colors,
            color_indices,
            curves,
            surfaces,
        }
    }
}
