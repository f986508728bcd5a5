//! # OpenSCAD PolySet
//!
//! Incremental builder turning evaluated CSG geometry into one canonical,
//! deduplicated, indexed polygon mesh.
//!
//! ## Architecture
//!
//! ```text
//! Geometry (List / PolySet / Nef / Manifold)
//!       ↓
//! merge → vertex store / polygon assembly / color indexer / registry
//!       ↓
//! build() → PolySet
//! ```
//!
//! ## Scope
//!
//! The builder welds vertices by exact coordinate, drops polygons with fewer
//! than three distinct vertices, and keeps a sparse per-face color table.
//! It does not triangulate, compute normals or repair geometry.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use openscad_polyset::{Color4f, Geometry, PolySetBuilder};
//!
//! let mut fragment = PolySetBuilder::default();
//! fragment.append_polygon_points_with_color(
//!     &[DVec3::ZERO, DVec3::X, DVec3::Y],
//!     Color4f::rgb(1.0, 0.0, 0.0),
//! );
//!
//! let mut builder = PolySetBuilder::default();
//! builder.append_geometry(&Geometry::from(fragment.build()));
//! let ps = builder.build();
//! assert_eq!(ps.color_indices(), &[0]);
//! ```

pub mod batch;
pub mod builder;
pub mod color;
pub mod config;
pub mod curves;
pub mod error;
pub mod geometry;
pub mod polyset;

pub use builder::PolySetBuilder;
pub use color::Color4f;
pub use curves::{ArcCurve, Curve, CylinderSurface, GenericCurve, GenericSurface, Surface};
pub use error::{PolySetError, PolySetResult};
pub use geometry::{Geometry, ManifoldAdapter, NefAdapter, Polygon2d};
pub use polyset::{Dim, PolySet, Tribool};
