//! # Curve/Surface Registry
//!
//! Deduplicating store for the curve and surface metadata attached to a
//! mesh. Items are normalized before the duplicate check, so an arc
//! registered in either direction is stored once.
//!
//! Analytic primitives (arcs, cylinders) are bucketed by quantized center and
//! radius and compared only against their bucket. Generic items are compared
//! structurally against every stored item.

use super::PolySetBuilder;
use crate::curves::{AnalyticKey, Curve, Surface};
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata kinds the registry can hold.
pub(crate) trait Parametric: Clone + PartialEq {
    /// True if the parameter runs from high to low.
    fn is_reversed(&self) -> bool;
    /// Makes the parameter run from low to high.
    fn normalize(&mut self) -> bool;
    /// Hash bucket for analytic items, `None` for generic ones.
    fn analytic_key(&self) -> Option<AnalyticKey>;
}

impl Parametric for Curve {
    fn is_reversed(&self) -> bool {
        Curve::is_reversed(self)
    }

    fn normalize(&mut self) -> bool {
        Curve::normalize(self)
    }

    fn analytic_key(&self) -> Option<AnalyticKey> {
        Curve::analytic_key(self)
    }
}

impl Parametric for Surface {
    fn is_reversed(&self) -> bool {
        Surface::is_reversed(self)
    }

    fn normalize(&mut self) -> bool {
        Surface::normalize(self)
    }

    fn analytic_key(&self) -> Option<AnalyticKey> {
        Surface::analytic_key(self)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Ordered, deduplicated list of shared metadata items.
#[derive(Debug, Clone)]
pub(crate) struct Registry<T> {
    items: Vec<Arc<T>>,
    buckets: HashMap<AnalyticKey, Vec<usize>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            buckets: HashMap::new(),
        }
    }
}

impl<T: Parametric> Registry<T> {
    /// Normalizes `item` and stores it unless an equal item exists.
    ///
    /// Returns true if the item was stored.
    pub(crate) fn insert(&mut self, mut item: Arc<T>) -> bool {
        if item.is_reversed() {
            Arc::make_mut(&mut item).normalize();
        }

        match item.analytic_key() {
            Some(key) => {
                let bucket = self.buckets.entry(key).or_default();
                if bucket.iter().any(|&i| *self.items[i] == *item) {
                    return false;
                }
                bucket.push(self.items.len());
            }
            None => {
                if self.items.iter().any(|existing| **existing == *item) {
                    return false;
                }
            }
        }
        self.items.push(item);
        true
    }

    pub(crate) fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    pub(crate) fn into_items(self) -> Vec<Arc<T>> {
        self.items
    }
}

/// Curve and surface registries of one builder session.
#[derive(Debug, Clone, Default)]
pub struct CurveSurfaceRegistry {
    curves: Registry<Curve>,
    surfaces: Registry<Surface>,
}

impl CurveSurfaceRegistry {
    /// Creates empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a curve; returns false if an equal curve already exists.
    pub fn add_curve(&mut self, curve: Arc<Curve>) -> bool {
        self.curves.insert(curve)
    }

    /// Registers a surface; returns false if an equal surface already exists.
    pub fn add_surface(&mut self, surface: Arc<Surface>) -> bool {
        self.surfaces.insert(surface)
    }

    /// Stored curves in registration order.
    pub fn curves(&self) -> &[Arc<Curve>] {
        self.curves.items()
    }

    /// Stored surfaces in registration order.
    pub fn surfaces(&self) -> &[Arc<Surface>] {
        self.surfaces.items()
    }

    /// Consumes the registries, returning curves and surfaces.
    pub fn into_parts(self) -> (Vec<Arc<Curve>>, Vec<Arc<Surface>>) {
        (self.curves.into_items(), self.surfaces.into_items())
    }
}

impl PolySetBuilder {
    /// Attaches curve metadata to the mesh, ignoring duplicates.
    pub fn add_curve(&mut self, curve: Arc<Curve>) -> bool {
        self.registry.add_curve(curve)
    }

    /// Attaches surface metadata to the mesh, ignoring duplicates.
    pub fn add_surface(&mut self, surface: Arc<Surface>) -> bool {
        self.registry.add_surface(surface)
    }

    /// Curves registered so far.
    pub fn curves(&self) -> &[Arc<Curve>] {
        self.registry.curves()
    }

    /// Surfaces registered so far.
    pub fn surfaces(&self) -> &[Arc<Surface>] {
        self.registry.surfaces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ArcCurve, CylinderSurface, GenericCurve};
    use glam::DVec3;

    fn arc(radius: f64, start: f64, end: f64) -> Arc<Curve> {
        Arc::new(Curve::Arc(ArcCurve {
            center: DVec3::new(0.0, 0.0, 1.0),
            normal: DVec3::Z,
            radius,
            start,
            end,
        }))
    }

    #[test]
    fn test_same_arc_in_both_directions_stored_once() {
        let mut registry = CurveSurfaceRegistry::new();
        assert!(registry.add_curve(arc(2.0, 0.0, 90.0)));
        assert!(!registry.add_curve(arc(2.0, 90.0, 0.0)));
        assert_eq!(registry.curves().len(), 1);
    }

    #[test]
    fn test_stored_curves_are_normalized() {
        let mut registry = CurveSurfaceRegistry::new();
        registry.add_curve(arc(2.0, 180.0, 30.0));
        assert_eq!(registry.curves()[0].start(), 30.0);
        assert_eq!(registry.curves()[0].end(), 180.0);
    }

    #[test]
    fn test_normalizing_does_not_touch_other_holders() {
        let shared = arc(2.0, 90.0, 0.0);
        let mut registry = CurveSurfaceRegistry::new();
        registry.add_curve(shared.clone());
        assert_eq!(shared.start(), 90.0);
        assert_eq!(registry.curves()[0].start(), 0.0);
    }

    #[test]
    fn test_reversed_generic_curve_stored_with_reversed_points() {
        let mut registry = CurveSurfaceRegistry::new();
        registry.add_curve(Arc::new(Curve::Generic(GenericCurve {
            start: 2.0,
            end: 1.0,
            points: vec![DVec3::X, DVec3::Y, DVec3::Z],
        })));
        let stored = &registry.curves()[0];
        assert!(!stored.is_reversed());
        let Curve::Generic(stored) = stored.as_ref() else {
            panic!("variant changed");
        };
        assert_eq!(stored.points, vec![DVec3::Z, DVec3::Y, DVec3::X]);
    }

    #[test]
    fn test_distinct_arcs_in_same_bucket_are_kept() {
        let mut registry = CurveSurfaceRegistry::new();
        assert!(registry.add_curve(arc(2.0, 0.0, 90.0)));
        assert!(registry.add_curve(arc(2.0, 0.0, 180.0)));
        assert_eq!(registry.curves().len(), 2);
    }

    #[test]
    fn test_generic_curves_compare_structurally() {
        let generic = |points: Vec<DVec3>| {
            Arc::new(Curve::Generic(GenericCurve {
                start: 0.0,
                end: 1.0,
                points,
            }))
        };
        let mut registry = CurveSurfaceRegistry::new();
        assert!(registry.add_curve(generic(vec![DVec3::X, DVec3::Y])));
        assert!(!registry.add_curve(generic(vec![DVec3::X, DVec3::Y])));
        assert!(registry.add_curve(generic(vec![DVec3::Y, DVec3::X])));
        assert_eq!(registry.curves().len(), 2);
    }

    #[test]
    fn test_cylinder_surfaces_deduplicate() {
        let cyl = |start: f64, end: f64| {
            Arc::new(Surface::Cylinder(CylinderSurface {
                origin: DVec3::ZERO,
                axis: DVec3::Z,
                radius: 4.0,
                start,
                end,
            }))
        };
        let mut registry = CurveSurfaceRegistry::new();
        assert!(registry.add_surface(cyl(0.0, 10.0)));
        assert!(!registry.add_surface(cyl(10.0, 0.0)));
        assert!(registry.add_surface(cyl(0.0, 5.0)));
        assert_eq!(registry.surfaces().len(), 2);
    }
}
