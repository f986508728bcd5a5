//! # Vertex Store
//!
//! Deduplicating point registry. Each distinct point gets a dense index in
//! first-seen order; indices are never reused or invalidated.
//!
//! Equality is exact: two points weld only if their coordinates compare
//! equal as `f64` (so `-0.0` and `0.0` weld).

use glam::{DVec3, Vec3};
use std::collections::HashMap;

/// Hash key built from the coordinate bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PointKey([u64; 3]);

impl From<DVec3> for PointKey {
    fn from(p: DVec3) -> Self {
        // Adding +0.0 folds -0.0 into +0.0.
        Self([(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()])
    }
}

/// Ordered, deduplicated point registry.
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    points: Vec<DVec3>,
    lookup: HashMap<PointKey, u32>,
}

impl VertexStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store sized for `capacity` distinct points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Makes room for a total of `total` distinct points.
    pub fn reserve_total(&mut self, total: usize) {
        let additional = total.saturating_sub(self.points.len());
        self.points.reserve(additional);
        self.lookup.reserve(additional);
    }

    /// Returns the index of `point`, registering it if unseen.
    pub fn index(&mut self, point: DVec3) -> u32 {
        let next = self.points.len() as u32;
        let idx = *self.lookup.entry(PointKey::from(point)).or_insert(next);
        if idx == next {
            self.points.push(point);
        }
        idx
    }

    /// Returns the index of `point` without registering it.
    pub fn find(&self, point: DVec3) -> Option<u32> {
        self.lookup.get(&PointKey::from(point)).copied()
    }

    /// Number of distinct points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no point was registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Registered points in insertion order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Replaces the contents of `out` with all points in insertion order.
    pub fn copy_into(&self, out: &mut Vec<DVec3>) {
        out.clear();
        out.extend_from_slice(&self.points);
    }

    /// Single precision variant of [`copy_into`](Self::copy_into).
    pub fn copy_into_f32(&self, out: &mut Vec<Vec3>) {
        out.clear();
        out.reserve(self.points.len());
        out.extend(self.points.iter().map(|p| p.as_vec3()));
    }

    /// Consumes the store, returning the points in insertion order.
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }
}
