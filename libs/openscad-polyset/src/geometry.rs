//! # Geometry Inputs
//!
//! Closed set of geometry representations a [`PolySetBuilder`] accepts.
//!
//! All inputs are shared, immutable, reference-counted values: a builder only
//! reads them, and they must outlive every builder that consumes them.
//! Foreign solid kernels plug in through the [`NefAdapter`] and
//! [`ManifoldAdapter`] traits, which convert their own representation into
//! a [`PolySet`].
//!
//! [`PolySetBuilder`]: crate::PolySetBuilder

use crate::error::PolySetResult;
use crate::polyset::PolySet;
use glam::DVec2;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// ADAPTERS
// =============================================================================

/// Boundary-representation (Nef polyhedron) solid that can be flattened.
///
/// Conversion can fail; the builder logs the failure and skips the fragment.
pub trait NefAdapter: fmt::Debug + Send + Sync {
    /// Converts the solid into an indexed polygon mesh.
    fn to_polyset(&self) -> PolySetResult<PolySet>;
}

/// Manifold mesh that can always be flattened.
pub trait ManifoldAdapter: fmt::Debug + Send + Sync {
    /// Converts the manifold into an indexed polygon mesh.
    fn to_polyset(&self) -> Arc<PolySet>;
}

// =============================================================================
// 2D POLYGON
// =============================================================================

/// Planar polygon with one or more outlines.
///
/// Only listed so that handing one to a 3D builder is a checked case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2d {
    /// Closed outlines.
    pub outlines: Vec<Vec<DVec2>>,
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Geometry produced by CSG evaluation.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Ordered children, appended depth-first.
    List(Vec<Arc<Geometry>>),
    /// Mesh already in canonical indexed form.
    PolySet(Arc<PolySet>),
    /// Nef/BRep solid converted through its adapter.
    Nef(Arc<dyn NefAdapter>),
    /// Manifold mesh converted through its adapter.
    Manifold(Arc<dyn ManifoldAdapter>),
    /// 2D polygon; never valid input for a PolySet builder.
    Polygon2d(Arc<Polygon2d>),
}

impl Geometry {
    /// Wraps children into a list node.
    pub fn list<I>(children: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Arc<Geometry>>,
    {
        Arc::new(Geometry::List(children.into_iter().collect()))
    }

    /// Wraps a PolySet.
    pub fn polyset(ps: PolySet) -> Arc<Self> {
        Arc::new(Geometry::PolySet(Arc::new(ps)))
    }

    /// Short name of the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::List(_) => "GeometryList",
            Geometry::PolySet(_) => "PolySet",
            Geometry::Nef(_) => "Nef",
            Geometry::Manifold(_) => "Manifold",
            Geometry::Polygon2d(_) => "Polygon2d",
        }
    }
}

impl From<PolySet> for Geometry {
    fn from(ps: PolySet) -> Self {
        Geometry::PolySet(Arc::new(ps))
    }
}
