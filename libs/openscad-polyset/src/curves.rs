//! # Curve and Surface Metadata
//!
//! Descriptors of the analytic shapes a mesh was tessellated from. Renderers
//! use them to rebuild smooth shading across faceted geometry.
//!
//! ## Normalization
//!
//! Every descriptor runs its parameter from the lower to the higher value.
//! [`Curve::normalize`] and [`Surface::normalize`] swap the endpoints (and
//! reverse any sampled data) when `start > end`, so the same arc registered
//! in either direction compares equal.

use config::constants::REGISTRY_HASH_QUANTUM;
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// CURVES
// =============================================================================

/// Circular arc around `center` in the plane perpendicular to `normal`.
///
/// `start` and `end` are angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcCurve {
    /// Arc center.
    pub center: DVec3,
    /// Plane normal.
    pub normal: DVec3,
    /// Arc radius.
    pub radius: f64,
    /// Start angle.
    pub start: f64,
    /// End angle.
    pub end: f64,
}

/// Sampled curve with no closed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericCurve {
    /// Parameter at the first sample.
    pub start: f64,
    /// Parameter at the last sample.
    pub end: f64,
    /// Samples in parameter order.
    pub points: Vec<DVec3>,
}

/// A curve attached to a PolySet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// Analytic circular arc.
    Arc(ArcCurve),
    /// Sampled curve.
    Generic(GenericCurve),
}

impl Curve {
    /// Parameter at the start of the curve.
    pub fn start(&self) -> f64 {
        match self {
            Curve::Arc(arc) => arc.start,
            Curve::Generic(curve) => curve.start,
        }
    }

    /// Parameter at the end of the curve.
    pub fn end(&self) -> f64 {
        match self {
            Curve::Arc(arc) => arc.end,
            Curve::Generic(curve) => curve.end,
        }
    }

    /// Flips the parametric direction.
    pub fn reverse(&mut self) {
        match self {
            Curve::Arc(arc) => std::mem::swap(&mut arc.start, &mut arc.end),
            Curve::Generic(curve) => {
                std::mem::swap(&mut curve.start, &mut curve.end);
                curve.points.reverse();
            }
        }
    }

    /// Returns true if the curve runs from high to low parameter.
    pub fn is_reversed(&self) -> bool {
        self.start() > self.end()
    }

    /// Reverses the curve if it runs from high to low parameter.
    ///
    /// Returns true if the curve was reversed.
    pub fn normalize(&mut self) -> bool {
        if self.is_reversed() {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// Returns true if this is an analytic primitive.
    pub fn is_analytic(&self) -> bool {
        matches!(self, Curve::Arc(_))
    }

    /// Coarse hash bucket for analytic curves (quantized center + radius).
    ///
    /// Equal arcs always land in the same bucket.
    pub(crate) fn analytic_key(&self) -> Option<AnalyticKey> {
        match self {
            Curve::Arc(arc) => Some(AnalyticKey::new(arc.center, arc.radius)),
            Curve::Generic(_) => None,
        }
    }
}

impl From<ArcCurve> for Curve {
    fn from(arc: ArcCurve) -> Self {
        Curve::Arc(arc)
    }
}

impl From<GenericCurve> for Curve {
    fn from(curve: GenericCurve) -> Self {
        Curve::Generic(curve)
    }
}

// =============================================================================
// SURFACES
// =============================================================================

/// Cylindrical surface around the axis through `origin` along `axis`.
///
/// `start` and `end` bound the surface along the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderSurface {
    /// Point on the axis.
    pub origin: DVec3,
    /// Axis direction.
    pub axis: DVec3,
    /// Cylinder radius.
    pub radius: f64,
    /// Axial start parameter.
    pub start: f64,
    /// Axial end parameter.
    pub end: f64,
}

/// Sampled surface with no closed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericSurface {
    /// Parameter at the first sample row.
    pub start: f64,
    /// Parameter at the last sample row.
    pub end: f64,
    /// Samples in parameter order.
    pub samples: Vec<DVec3>,
}

/// A surface attached to a PolySet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Analytic cylinder.
    Cylinder(CylinderSurface),
    /// Sampled surface.
    Generic(GenericSurface),
}

impl Surface {
    /// Parameter at the start of the surface.
    pub fn start(&self) -> f64 {
        match self {
            Surface::Cylinder(cyl) => cyl.start,
            Surface::Generic(surface) => surface.start,
        }
    }

    /// Parameter at the end of the surface.
    pub fn end(&self) -> f64 {
        match self {
            Surface::Cylinder(cyl) => cyl.end,
            Surface::Generic(surface) => surface.end,
        }
    }

    /// Flips the parametric direction.
    pub fn reverse(&mut self) {
        match self {
            Surface::Cylinder(cyl) => std::mem::swap(&mut cyl.start, &mut cyl.end),
            Surface::Generic(surface) => {
                std::mem::swap(&mut surface.start, &mut surface.end);
                surface.samples.reverse();
            }
        }
    }

    /// Returns true if the surface runs from high to low parameter.
    pub fn is_reversed(&self) -> bool {
        self.start() > self.end()
    }

    /// Reverses the surface if it runs from high to low parameter.
    ///
    /// Returns true if the surface was reversed.
    pub fn normalize(&mut self) -> bool {
        if self.is_reversed() {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// Returns true if this is an analytic primitive.
    pub fn is_analytic(&self) -> bool {
        matches!(self, Surface::Cylinder(_))
    }

    /// Coarse hash bucket for analytic surfaces (quantized origin + radius).
    pub(crate) fn analytic_key(&self) -> Option<AnalyticKey> {
        match self {
            Surface::Cylinder(cyl) => Some(AnalyticKey::new(cyl.origin, cyl.radius)),
            Surface::Generic(_) => None,
        }
    }
}

impl From<CylinderSurface> for Surface {
    fn from(cyl: CylinderSurface) -> Self {
        Surface::Cylinder(cyl)
    }
}

impl From<GenericSurface> for Surface {
    fn from(surface: GenericSurface) -> Self {
        Surface::Generic(surface)
    }
}

// =============================================================================
// HASH KEY
// =============================================================================

/// Quantized position + radius used to bucket analytic primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct AnalyticKey([i64; 4]);

impl AnalyticKey {
    fn new(position: DVec3, radius: f64) -> Self {
        let q = |v: f64| (v / REGISTRY_HASH_QUANTUM).round() as i64;
        Self([q(position.x), q(position.y), q(position.z), q(radius)])
    }
}

// =============================================================================
// TESTS
// =============================================================================
