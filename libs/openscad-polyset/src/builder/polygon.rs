//! # Polygon Assembly
//!
//! Scratch buffer turning a stream of vertex additions into committed faces.
//!
//! ## States
//!
//! - **Idle**: scratch buffer empty
//! - **Building**: `begin_polygon` opened a buffer; `add_vertex` appends
//!
//! `end_polygon` commits the buffer if it holds at least
//! [`MIN_POLYGON_VERTICES`] vertices and drops it silently otherwise.

use super::PolySetBuilder;
use crate::color::Color4f;
use config::constants::{MIN_POLYGON_VERTICES, NO_COLOR_INDEX};
use glam::DVec3;

impl PolySetBuilder {
    /// Commits any open polygon, then opens a new one sized for
    /// `expected_size` vertices.
    pub fn begin_polygon(&mut self, expected_size: usize) {
        self.end_polygon();
        self.current_polygon.reserve(expected_size);
    }

    /// Appends a vertex index to the open polygon.
    ///
    /// Repeats of the previous vertex, and of the first vertex (which would
    /// close the polygon with a zero-length edge), are ignored.
    pub fn add_vertex(&mut self, index: u32) {
        let skip = match (self.current_polygon.first(), self.current_polygon.last()) {
            (Some(&first), Some(&last)) => index == first || index == last,
            _ => false,
        };
        if !skip {
            self.current_polygon.push(index);
        }
    }

    /// Resolves `point` through the vertex store and appends it.
    pub fn add_vertex_point(&mut self, point: DVec3) {
        let index = self.vertices.index(point);
        self.add_vertex(index);
    }

    /// Closes the open polygon without a color.
    pub fn end_polygon(&mut self) {
        self.end_polygon_with_color(Color4f::INVALID);
    }

    /// Closes the open polygon, assigning `color` if it is valid.
    pub fn end_polygon_with_color(&mut self, color: Color4f) {
        if let Some(face) = self.commit_polygon() {
            if color.is_valid() {
                self.colors.attach_color(face, color);
            } else {
                self.colors.push_entry(face, NO_COLOR_INDEX);
            }
        }
    }

    /// Closes the open polygon with an already resolved palette entry.
    pub(super) fn end_polygon_with_entry(&mut self, entry: i32) {
        if let Some(face) = self.commit_polygon() {
            self.colors.push_entry(face, entry);
        }
    }

    /// Appends a polygon given by vertex indices.
    pub fn append_polygon_indices(&mut self, indices: &[u32]) {
        self.begin_polygon(indices.len());
        for &index in indices {
            self.add_vertex(index);
        }
        self.end_polygon();
    }

    /// Appends a polygon given by points.
    pub fn append_polygon_points(&mut self, points: &[DVec3]) {
        self.begin_polygon(points.len());
        for &point in points {
            self.add_vertex_point(point);
        }
        self.end_polygon();
    }

    /// Appends a colored polygon given by points.
    pub fn append_polygon_points_with_color(&mut self, points: &[DVec3], color: Color4f) {
        self.begin_polygon(points.len());
        for &point in points {
            self.add_vertex_point(point);
        }
        self.end_polygon_with_color(color);
    }

    /// Moves the scratch buffer into the face list, returning the new face
    /// index, or drops it if degenerate.
    fn commit_polygon(&mut self) -> Option<usize> {
        if self.current_polygon.len() >= MIN_POLYGON_VERTICES {
            let face = self.indices.len();
            self.indices.push(std::mem::take(&mut self.current_polygon));
            Some(face)
        } else {
            if !self.current_polygon.is_empty() {
                self.dropped_polygons += 1;
            }
            self.current_polygon.clear();
            None
        }
    }
}
