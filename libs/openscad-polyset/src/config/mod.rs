//! Builder configuration building on the shared `config` crate.
//!
//! The module turns the workspace's raw [`BuilderSettings`] into typed tags so
//! builder components stay decoupled from literal constants.

use crate::error::PolySetResult;
use crate::polyset::{Dim, Tribool};
use config::constants::BuilderSettings;

/// Settings for a [`PolySetBuilder`](crate::PolySetBuilder) session.
///
/// # Examples
/// ```
/// use openscad_polyset::config::BuilderConfig;
/// use openscad_polyset::Dim;
/// let cfg = BuilderConfig::default();
/// assert_eq!(cfg.dim, Dim::Three);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Dimensionality tag of the produced mesh.
    pub dim: Dim,
    /// Convexity flag of the produced mesh.
    pub convex: Tribool,
    /// Convexity multiplicity of the produced mesh.
    pub convexity: u32,
    /// Expected vertex count, 0 for no reservation.
    pub vertex_capacity: usize,
    /// Expected polygon count, 0 for no reservation.
    pub polygon_capacity: usize,
}

impl BuilderConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use openscad_polyset::config::BuilderConfig;
    /// use openscad_polyset::Tribool;
    /// let cfg = BuilderConfig::new(2, Tribool::True, 1, 64, 16).unwrap();
    /// assert_eq!(cfg.vertex_capacity, 64);
    /// assert!(BuilderConfig::new(4, Tribool::True, 1, 0, 0).is_err());
    /// ```
    pub fn new(
        dim: u8,
        convex: Tribool,
        convexity: u32,
        vertex_capacity: usize,
        polygon_capacity: usize,
    ) -> PolySetResult<Self> {
        let settings = BuilderSettings::new(dim, convexity, vertex_capacity, polygon_capacity)?;
        Self::from_settings(settings, convex).map_err(Into::into)
    }

    /// Converts validated workspace settings.
    pub fn from_settings(
        settings: BuilderSettings,
        convex: Tribool,
    ) -> Result<Self, config::constants::ConfigError> {
        Ok(Self {
            dim: Dim::try_from(settings.dim)?,
            convex,
            convexity: settings.convexity,
            vertex_capacity: settings.vertex_capacity,
            polygon_capacity: settings.polygon_capacity,
        })
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        let settings = BuilderSettings::default();
        Self {
            dim: Dim::Three,
            convex: Tribool::Indeterminate,
            convexity: settings.convexity,
            vertex_capacity: settings.vertex_capacity,
            polygon_capacity: settings.polygon_capacity,
        }
    }
}
