//! # Color Indexer
//!
//! Sparse per-face color table over a deduplicated palette.
//!
//! The table stays empty until the first explicit color shows up, so meshes
//! that never use color carry no per-face overhead. From then on it holds
//! exactly one entry per committed face; faces committed before activation
//! are backfilled with [`NO_COLOR_INDEX`].

use crate::color::Color4f;
use config::constants::{LOG_TARGET, NO_COLOR_INDEX};

/// Palette plus lazily created color-index table.
#[derive(Debug, Clone, Default)]
pub struct ColorIndexer {
    colors: Vec<Color4f>,
    color_indices: Vec<i32>,
    active: bool,
}

impl ColorIndexer {
    /// Creates an indexer with an empty palette and no table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the table tracks every face.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The deduplicated palette.
    #[inline]
    pub fn palette(&self) -> &[Color4f] {
        &self.colors
    }

    /// The per-face table (empty until activated).
    #[inline]
    pub fn color_indices(&self) -> &[i32] {
        &self.color_indices
    }

    /// Finds `color` in the palette by value, appending it if absent.
    pub fn palette_index(&mut self, color: Color4f) -> i32 {
        if let Some(pos) = self.colors.iter().position(|&c| c == color) {
            return pos as i32;
        }
        self.colors.push(color);
        log::trace!(target: LOG_TARGET, "palette grew to {} colors", self.colors.len());
        (self.colors.len() - 1) as i32
    }

    /// Starts tracking colors, backfilling `face_count` uncolored faces.
    pub fn activate(&mut self, face_count: usize) {
        if !self.active {
            self.color_indices.resize(face_count, NO_COLOR_INDEX);
            self.active = true;
        }
    }

    /// Records the entry for the face just committed at `face_index`.
    ///
    /// A sentinel entry on an inactive table is a no-op.
    pub fn push_entry(&mut self, face_index: usize, entry: i32) {
        if entry != NO_COLOR_INDEX {
            self.activate(face_index);
        }
        if self.active {
            debug_assert_eq!(self.color_indices.len(), face_index);
            self.color_indices.push(entry);
        }
    }

    /// Assigns `color` to the face just committed at `face_index`.
    pub fn attach_color(&mut self, face_index: usize, color: Color4f) {
        let entry = self.palette_index(color);
        self.push_entry(face_index, entry);
    }

    /// Returns true if the table is empty or tracks exactly `face_count` faces.
    pub fn is_consistent(&self, face_count: usize) -> bool {
        self.color_indices.is_empty() || self.color_indices.len() == face_count
    }

    /// Consumes the indexer, returning the palette and the table.
    pub fn into_parts(self) -> (Vec<Color4f>, Vec<i32>) {
        (self.colors, self.color_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color4f = Color4f::rgb(1.0, 0.0, 0.0);
    const BLUE: Color4f = Color4f::rgb(0.0, 0.0, 1.0);

    #[test]
    fn test_uncolored_faces_leave_table_empty() {
        let mut colors = ColorIndexer::new();
        colors.push_entry(0, NO_COLOR_INDEX);
        colors.push_entry(1, NO_COLOR_INDEX);
        assert!(!colors.is_active());
        assert!(colors.color_indices().is_empty());
    }

    #[test]
    fn test_first_color_backfills_sentinels() {
        let mut colors = ColorIndexer::new();
        colors.push_entry(0, NO_COLOR_INDEX);
        colors.push_entry(1, NO_COLOR_INDEX);
        colors.attach_color(2, RED);
        assert_eq!(colors.color_indices(), &[-1, -1, 0]);
        assert!(colors.is_consistent(3));
    }

    #[test]
    fn test_palette_deduplicates_by_value() {
        let mut colors = ColorIndexer::new();
        colors.attach_color(0, RED);
        colors.attach_color(1, BLUE);
        colors.attach_color(2, RED);
        assert_eq!(colors.palette(), &[RED, BLUE]);
        assert_eq!(colors.color_indices(), &[0, 1, 0]);
    }

    #[test]
    fn test_sentinel_after_activation_is_recorded() {
        let mut colors = ColorIndexer::new();
        colors.attach_color(0, RED);
        colors.push_entry(1, NO_COLOR_INDEX);
        assert_eq!(colors.color_indices(), &[0, -1]);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut colors = ColorIndexer::new();
        colors.activate(2);
        colors.activate(5);
        assert_eq!(colors.color_indices(), &[-1, -1]);
    }
}
