//! # Geometry Merging
//!
//! Flattens composite geometry and re-threads every incoming face through the
//! vertex store, so fragments built independently end up sharing one
//! coordinate space.
//!
//! ## Dispatch
//!
//! | Variant     | Handling                                         |
//! |-------------|--------------------------------------------------|
//! | `List`      | Children appended depth-first, in order          |
//! | `PolySet`   | [`PolySetBuilder::append_polyset`]               |
//! | `Nef`       | Adapter conversion; failure logged and skipped   |
//! | `Manifold`  | Adapter conversion, then `append_polyset`        |
//! | `Polygon2d` | Contract violation                               |

use super::PolySetBuilder;
use crate::error::{PolySetError, PolySetResult};
use crate::geometry::Geometry;
use crate::polyset::PolySet;
use config::constants::{LOG_TARGET, NO_COLOR_INDEX};

impl PolySetBuilder {
    /// Appends any supported geometry.
    ///
    /// Conversion failures are logged at Error level under the `polyset`
    /// target and the failing fragment is skipped; the rest is still merged.
    ///
    /// # Panics
    ///
    /// In debug builds, if a [`Geometry::Polygon2d`] is reached. A 2D polygon
    /// must never be handed to a PolySet builder.
    pub fn append_geometry(&mut self, geom: &Geometry) {
        let mut first_error = None;
        self.append_geometry_inner(geom, &mut first_error);
    }

    /// Like [`append_geometry`](Self::append_geometry), but also reports the
    /// first conversion failure once everything else has been merged.
    pub fn try_append_geometry(&mut self, geom: &Geometry) -> PolySetResult<()> {
        let mut first_error = None;
        self.append_geometry_inner(geom, &mut first_error);
        first_error.map_or(Ok(()), Err)
    }

    fn append_geometry_inner(&mut self, geom: &Geometry, first_error: &mut Option<PolySetError>) {
        match geom {
            Geometry::List(children) => {
                for child in children {
                    self.append_geometry_inner(child, first_error);
                }
            }
            Geometry::PolySet(ps) => self.append_polyset(ps),
            Geometry::Nef(nef) => match nef.to_polyset() {
                Ok(ps) => self.append_polyset(&ps),
                Err(err) => {
                    log::error!(target: LOG_TARGET, "Nef->PolySet failed: {err}");
                    first_error.get_or_insert(err);
                }
            },
            Geometry::Manifold(manifold) => {
                let ps = manifold.to_polyset();
                self.append_polyset(&ps);
            }
            Geometry::Polygon2d(_) => {
                log::error!(target: LOG_TARGET, "Unsupported geometry: {}", geom.kind());
                if cfg!(debug_assertions) {
                    panic!("Unsupported geometry: 2D polygon passed to PolySetBuilder");
                }
            }
        }
    }

    /// Merges a finished PolySet into this builder.
    ///
    /// Colors are remapped into this builder's palette, vertices are welded
    /// by coordinate, and the degenerate-face rule is re-applied, so faces
    /// may collapse when their vertices weld together.
    pub fn append_polyset(&mut self, ps: &PolySet) {
        let before = (self.num_vertices(), self.num_polygons());

        let has_colors = !ps.color_indices.is_empty();
        let color_map: Vec<i32> = if has_colors {
            self.colors.activate(self.indices.len());
            ps.colors
                .iter()
                .map(|&color| self.colors.palette_index(color))
                .collect()
        } else {
            Vec::new()
        };

        self.reserve(
            self.num_vertices() + ps.vertices.len(),
            self.num_polygons() + ps.indices.len(),
        );
        for (face_index, face) in ps.indices.iter().enumerate() {
            self.begin_polygon(face.len());
            for &index in face {
                self.add_vertex_point(ps.vertices[index as usize]);
            }
            let entry = match ps.color_indices.get(face_index) {
                Some(&idx) if idx >= 0 => color_map[idx as usize],
                _ => NO_COLOR_INDEX,
            };
            self.end_polygon_with_entry(entry);
        }

        for curve in &ps.curves {
            self.add_curve(curve.clone());
        }
        for surface in &ps.surfaces {
            self.add_surface(surface.clone());
        }

        log::debug!(
            target: LOG_TARGET,
            "appended PolySet ({} vertices, {} polygons): {}+{} vertices, {}+{} polygons",
            ps.vertices.len(),
            ps.indices.len(),
            before.0,
            self.num_vertices() - before.0,
            before.1,
            self.num_polygons() - before.1
        );
    }
}
