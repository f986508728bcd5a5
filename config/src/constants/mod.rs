//! Centralized configuration values shared across the PolySet pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Sentinel color index meaning "this face has no explicit color".
///
/// Distinct from every valid palette index, which are all non-negative.
///
/// # Examples
/// ```
/// use config::constants::NO_COLOR_INDEX;
/// assert_eq!(NO_COLOR_INDEX, -1);
/// ```
pub const NO_COLOR_INDEX: i32 = -1;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Minimum number of distinct vertices a polygon needs before it is
/// committed as a face. Anything smaller is dropped silently.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// assert_eq!(MIN_POLYGON_VERTICES, 3);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Default convexity multiplicity attached to built meshes.
///
/// OpenSCAD default: 1
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CONVEXITY;
/// assert!(DEFAULT_CONVEXITY >= 1);
/// ```
pub const DEFAULT_CONVEXITY: u32 = 1;

/// Default dimensionality of a builder session.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DIMENSION;
/// assert_eq!(DEFAULT_DIMENSION, 3);
/// ```
pub const DEFAULT_DIMENSION: u8 = 3;

// =============================================================================
// REGISTRY CONSTANTS
// =============================================================================

/// Grid size used to quantize analytic curve and surface parameters into
/// coarse hash buckets. Exact equality is still checked inside a bucket.
///
/// # Examples
/// ```
/// use config::constants::REGISTRY_HASH_QUANTUM;
///
/// let bucket = (2.5_f64 / REGISTRY_HASH_QUANTUM).floor() as i64;
/// assert_eq!(bucket, (2.5_f64 / REGISTRY_HASH_QUANTUM).floor() as i64);
/// ```
pub const REGISTRY_HASH_QUANTUM: f64 = 1.0e-6;

// =============================================================================
// LOGGING CONSTANTS
// =============================================================================

/// Log target (message group) used by the builder.
///
/// # Examples
/// ```
/// use config::constants::LOG_TARGET;
/// assert!(!LOG_TARGET.is_empty());
/// ```
pub const LOG_TARGET: &str = "polyset";

// =============================================================================
// BUILDER SETTINGS
// =============================================================================

/// Immutable snapshot of builder settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::BuilderSettings;
/// let settings = BuilderSettings::default();
/// assert_eq!(settings.dim, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderSettings {
    /// Dimensionality tag of the produced mesh (2 or 3).
    pub dim: u8,
    /// Convexity multiplicity attached to the produced mesh.
    pub convexity: u32,
    /// Expected vertex count, 0 for no reservation.
    pub vertex_capacity: usize,
    /// Expected polygon count, 0 for no reservation.
    pub polygon_capacity: usize,
}

impl BuilderSettings {
    /// Builds settings enforcing strict validation of the dimension and
    /// convexity.
    ///
    /// # Examples
    /// ```
    /// use config::constants::BuilderSettings;
    /// let settings = BuilderSettings::new(2, 4, 16, 8).expect("valid settings");
    /// assert_eq!(settings.convexity, 4);
    /// ```
    pub fn new(
        dim: u8,
        convexity: u32,
        vertex_capacity: usize,
        polygon_capacity: usize,
    ) -> Result<Self, ConfigError> {
        if dim != 2 && dim != 3 {
            return Err(ConfigError::InvalidDimension(dim));
        }
        if convexity == 0 {
            return Err(ConfigError::InvalidConvexity(convexity));
        }
        Ok(Self {
            dim,
            convexity,
            vertex_capacity,
            polygon_capacity,
        })
    }
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIMENSION,
            convexity: DEFAULT_CONVEXITY,
            vertex_capacity: 0,
            polygon_capacity: 0,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the dimension is neither 2 nor 3.
    InvalidDimension(u8),
    /// Raised when the convexity multiplicity is zero.
    InvalidConvexity(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension(value) => {
                write!(f, "dim must be 2 or 3: {value}")
            }
            ConfigError::InvalidConvexity(value) => {
                write!(f, "convexity must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
