//! # PolySet Data Structure
//!
//! Immutable indexed polygon mesh produced by
//! [`PolySetBuilder::build`](crate::PolySetBuilder::build).
//!
//! Faces are arbitrary planar polygons (not only triangles) referencing a
//! shared vertex array. Colors are sparse: `color_indices` is either empty
//! or holds exactly one palette index (or [`NO_COLOR_INDEX`]) per face.

use crate::color::Color4f;
use crate::curves::{Curve, Surface};
use crate::error::{PolySetError, PolySetResult};
use config::constants::{ConfigError, DEFAULT_CONVEXITY, MIN_POLYGON_VERTICES, NO_COLOR_INDEX};
use glam::DVec3;
use serde::Serialize;
use std::sync::Arc;

// =============================================================================
// TAGS
// =============================================================================

/// Dimensionality tag of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Dim {
    /// Planar geometry living in the XY plane.
    Two,
    /// Volumetric geometry.
    #[default]
    Three,
}

impl Dim {
    /// Numeric form (2 or 3).
    pub fn as_u8(self) -> u8 {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dim {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dim::Two),
            3 => Ok(Dim::Three),
            other => Err(ConfigError::InvalidDimension(other)),
        }
    }
}

/// Three-valued convexity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Tribool {
    /// Known convex.
    True,
    /// Known non-convex.
    False,
    /// Not known.
    #[default]
    Indeterminate,
}

impl From<bool> for Tribool {
    fn from(value: bool) -> Self {
        if value {
            Tribool::True
        } else {
            Tribool::False
        }
    }
}

impl From<Option<bool>> for Tribool {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Tribool::Indeterminate, Tribool::from)
    }
}

// =============================================================================
// POLYSET
// =============================================================================

/// Indexed polygon mesh with optional per-face colors and shading metadata.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use openscad_polyset::{Dim, PolySet};
///
/// let ps = PolySet::from_indexed(
///     Dim::Three,
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![vec![0, 1, 2]],
/// )
/// .unwrap();
/// assert!(ps.is_triangular());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PolySet {
    pub(crate) dim: Dim,
    pub(crate) convex: Tribool,
    pub(crate) convexity: u32,
    pub(crate) triangular: bool,
    pub(crate) vertices: Vec<DVec3>,
    pub(crate) indices: Vec<Vec<u32>>,
    pub(crate) colors: Vec<Color4f>,
    pub(crate) color_indices: Vec<i32>,
    pub(crate) curves: Vec<Arc<Curve>>,
    pub(crate) surfaces: Vec<Arc<Surface>>,
}

impl PolySet {
    /// Creates an empty mesh.
    pub fn new(dim: Dim, convex: Tribool) -> Self {
        Self {
            dim,
            convex,
            convexity: DEFAULT_CONVEXITY,
            triangular: true,
            vertices: Vec::new(),
            indices: Vec::new(),
            colors: Vec::new(),
            color_indices: Vec::new(),
            curves: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    /// Creates an uncolored mesh from raw vertex and face arrays.
    ///
    /// Faces are stored as given; every index must refer to a vertex and
    /// every face must have at least three corners with no index repeated
    /// back to back (the last corner wraps around to the first).
    pub fn from_indexed(
        dim: Dim,
        vertices: Vec<DVec3>,
        indices: Vec<Vec<u32>>,
    ) -> PolySetResult<Self> {
        for (pos, face) in indices.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&i| i as usize >= vertices.len()) {
                return Err(PolySetError::index_out_of_range(
                    "vertices",
                    bad as usize,
                    vertices.len(),
                ));
            }
            if !is_proper_face(face) {
                return Err(PolySetError::degenerate_face(pos));
            }
        }
        let triangular = indices.iter().all(|face| face.len() == 3);
        Ok(Self {
            triangular,
            vertices,
            indices,
            ..Self::new(dim, Tribool::Indeterminate)
        })
    }

    /// Attaches a palette and per-face color indices.
    ///
    /// `color_indices` must be empty or have one entry per face; each entry
    /// is a palette index or [`NO_COLOR_INDEX`].
    pub fn with_colors(mut self, colors: Vec<Color4f>, color_indices: Vec<i32>) -> PolySetResult<Self> {
        if !color_indices.is_empty() && color_indices.len() != self.indices.len() {
            return Err(PolySetError::length_mismatch(
                "color_indices",
                self.indices.len(),
                color_indices.len(),
            ));
        }
        for &idx in &color_indices {
            if idx != NO_COLOR_INDEX && (idx < 0 || idx as usize >= colors.len()) {
                return Err(PolySetError::index_out_of_range(
                    "colors",
                    idx.max(0) as usize,
                    colors.len(),
                ));
            }
        }
        self.colors = colors;
        self.color_indices = color_indices;
        Ok(self)
    }

    /// Sets the convexity multiplicity.
    pub fn set_convexity(&mut self, convexity: u32) {
        self.convexity = convexity;
    }

    /// Returns the dimensionality tag.
    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Returns the convexity flag.
    #[inline]
    pub fn convex(&self) -> Tribool {
        self.convex
    }

    /// Returns the convexity multiplicity.
    #[inline]
    pub fn convexity(&self) -> u32 {
        self.convexity
    }

    /// Returns true if every face is a triangle.
    #[inline]
    pub fn is_triangular(&self) -> bool {
        self.triangular
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn num_polygons(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the faces.
    #[inline]
    pub fn indices(&self) -> &[Vec<u32>] {
        &self.indices
    }

    /// Returns the color palette.
    #[inline]
    pub fn colors(&self) -> &[Color4f] {
        &self.colors
    }

    /// Returns the per-face color indices (empty if the mesh is uncolored).
    #[inline]
    pub fn color_indices(&self) -> &[i32] {
        &self.color_indices
    }

    /// Returns the curve metadata.
    #[inline]
    pub fn curves(&self) -> &[Arc<Curve>] {
        &self.curves
    }

    /// Returns the surface metadata.
    #[inline]
    pub fn surfaces(&self) -> &[Arc<Surface>] {
        &self.surfaces
    }

    /// Returns the explicit color of a face, if it has one.
    pub fn face_color(&self, face: usize) -> Option<Color4f> {
        let idx = *self.color_indices.get(face)?;
        if idx == NO_COLOR_INDEX {
            return None;
        }
        self.colors.get(idx as usize).copied()
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}

/// True if `face` has at least three corners and no cyclically adjacent repeat.
fn is_proper_face(face: &[u32]) -> bool {
    face.len() >= MIN_POLYGON_VERTICES
        && face
            .iter()
            .zip(face.iter().cycle().skip(1))
            .all(|(a, b)| a != b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolySet {
        PolySet::from_indexed(
            Dim::Three,
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(2.0, 3.0, 0.0),
                DVec3::new(0.0, 3.0, 1.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_from_indexed_rejects_dangling_index() {
        let err = PolySet::from_indexed(Dim::Three, vec![DVec3::ZERO], vec![vec![0, 1, 2]])
            .unwrap_err();
        assert!(matches!(err, PolySetError::IndexOutOfRange { index: 1, len: 1, .. }));
    }

    #[test]
    fn test_from_indexed_rejects_short_faces() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        for face in [vec![], vec![0], vec![0, 1]] {
            let err = PolySet::from_indexed(Dim::Three, vertices.clone(), vec![face])
                .unwrap_err();
            assert!(matches!(err, PolySetError::DegenerateFace { face: 0 }));
        }
    }

    #[test]
    fn test_from_indexed_rejects_repeated_corners() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        for face in [vec![0, 1, 1], vec![0, 1, 0], vec![2, 2, 0, 1]] {
            let err = PolySet::from_indexed(
                Dim::Three,
                vertices.clone(),
                vec![vec![0, 1, 2], face],
            )
            .unwrap_err();
            assert!(matches!(err, PolySetError::DegenerateFace { face: 1 }));
        }
    }

    #[test]
    fn test_triangle_mesh_is_triangular() {
        let mesh = PolySet::from_indexed(
            Dim::Three,
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        assert!(mesh.is_triangular());
    }

    #[test]
    fn test_quad_is_not_triangular() {
        assert!(!square().is_triangular());
    }

    #[test]
    fn test_with_colors_validates_length() {
        let err = square()
            .with_colors(vec![Color4f::rgb(1.0, 0.0, 0.0)], vec![0, 0])
            .unwrap_err();
        assert!(matches!(err, PolySetError::LengthMismatch { expected: 1, actual: 2, .. }));
    }

    #[test]
    fn test_with_colors_validates_palette_index() {
        let err = square().with_colors(Vec::new(), vec![0]).unwrap_err();
        assert!(matches!(err, PolySetError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_face_color() {
        let red = Color4f::rgb(1.0, 0.0, 0.0);
        let ps = square().with_colors(vec![red], vec![0]).unwrap();
        assert_eq!(ps.face_color(0), Some(red));
        assert_eq!(ps.face_color(1), None);

        let uncolored = square().with_colors(vec![red], vec![NO_COLOR_INDEX]).unwrap();
        assert_eq!(uncolored.face_color(0), None);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = square().bounding_box().unwrap();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(2.0, 3.0, 1.0));
        assert!(PolySet::new(Dim::Two, Tribool::True).bounding_box().is_none());
    }

    #[test]
    fn test_dim_conversion() {
        assert_eq!(Dim::try_from(2).unwrap(), Dim::Two);
        assert_eq!(Dim::Three.as_u8(), 3);
        assert_eq!(Dim::try_from(1).unwrap_err(), ConfigError::InvalidDimension(1));
    }

    #[test]
    fn test_tribool_from_option() {
        assert_eq!(Tribool::from(Some(true)), Tribool::True);
        assert_eq!(Tribool::from(Some(false)), Tribool::False);
        assert_eq!(Tribool::from(None), Tribool::Indeterminate);
    }
}
