//! # Configuration Constants
//!
//! Centralized constants for the pipe mesh pipeline. All validation bounds,
//! tessellation defaults, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Path Validation**: Bounds enforced on node lists before frame solving
//! - **Extrusion Limits**: Ring resolution, pipe radius, and index width
//! - **Defaults**: Values used when the caller does not specify one

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance on the dot product of two unit directions below which a path
/// is considered to double back on itself (bend angle of π).
///
/// A reversal has no unique bend plane, so such paths are rejected.
pub const REVERSAL_DOT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// PATH VALIDATION CONSTANTS
// =============================================================================

/// Minimum squared distance between two consecutive path nodes.
///
/// Consecutive nodes closer than this are treated as overlapping and the
/// whole path is rejected.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_NODE_SEPARATION_SQUARED;
///
/// let a = [0.0_f64, 0.0, 0.0];
/// let b = [0.001_f64, 0.0, 0.0];
/// let dist_sq: f64 = a.iter().zip(&b).map(|(x, y)| (x - y) * (x - y)).sum();
/// assert!(dist_sq < MIN_NODE_SEPARATION_SQUARED);
/// ```
pub const MIN_NODE_SEPARATION_SQUARED: f64 = 1e-4;

/// Maximum tolerated deviation of `|global_up|²` from 1.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GLOBAL_UP_DEVIATION;
///
/// let up = [0.0_f64, 1.0, 0.0];
/// let length_sq: f64 = up.iter().map(|c| c * c).sum();
/// assert!((length_sq - 1.0).abs() <= MAX_GLOBAL_UP_DEVIATION);
/// ```
pub const MAX_GLOBAL_UP_DEVIATION: f64 = 1e-4;

/// Smallest fillet radius accepted on an interior node.
pub const MIN_BEND_RADIUS: f64 = 1e-3;

/// Minimum number of nodes forming a path (start cap and end cap).
pub const MIN_PATH_NODES: usize = 2;

// =============================================================================
// EXTRUSION LIMIT CONSTANTS
// =============================================================================

/// Smallest pipe radius accepted by the extruder.
pub const MIN_PIPE_RADIUS: f64 = 0.1;

/// Minimum number of vertices per ring.
///
/// The last vertex of a ring duplicates the first to carry the texture seam,
/// so four vertices give three distinct angular positions.
pub const MIN_RING_VERTICES: u32 = 4;

/// Maximum number of vertices per ring.
pub const MAX_RING_VERTICES: u32 = 32;

/// Maximum number of vertices in a single tube mesh.
///
/// Index buffers are 16-bit, so every vertex index must fit in a `u16`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TUBE_VERTICES;
///
/// let ring_vertices = 32;
/// assert!(2047 * ring_vertices <= MAX_TUBE_VERTICES);
/// assert!(2049 * ring_vertices > MAX_TUBE_VERTICES);
/// ```
pub const MAX_TUBE_VERTICES: usize = u16::MAX as usize;

/// Maximum number of cuts a single path may solve into.
///
/// Any longer sequence cannot be extruded even at the coarsest ring
/// resolution, so the solver rejects it before allocating.
pub const MAX_PATH_CUTS: usize = MAX_TUBE_VERTICES / MIN_RING_VERTICES as usize;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default angular step budget (radians) used to subdivide a bend.
pub const DEFAULT_CUT_MAX_ANGLE: f64 = 0.1;

/// Default bend angle (radians) below which a corner is passed straight through.
pub const DEFAULT_MINIMAL_BEND_ANGLE: f64 = 0.01;

/// Default number of vertices per ring.
pub const DEFAULT_RING_VERTICES: u32 = 7;

/// Default pipe radius.
pub const DEFAULT_PIPE_RADIUS: f64 = 0.1;

/// Default fillet radius for nodes built without an explicit radius.
pub const DEFAULT_BEND_RADIUS: f64 = 0.5;

/// Default global up direction used to orient the first cut.
pub const DEFAULT_GLOBAL_UP: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of cuts used to approximate one rounded bend.
///
/// Implements a ceiling-biased bucket count, `round(angle / max_step + 0.5)`,
/// with a floor of 2 so the arc always carries both boundary cuts and the
/// per-cut angle step never divides by zero.
///
/// # Arguments
///
/// * `bend_angle` - The corner angle in radians
/// * `cut_max_angle` - Angular budget per cut in radians (must be > 0)
///
/// # Example
///
/// ```rust
/// use config::constants::bend_subdivisions;
///
/// // A right angle with 0.1 rad steps
/// let cuts = bend_subdivisions(std::f64::consts::FRAC_PI_2, 0.1);
/// assert_eq!(cuts, 16);
///
/// // Tiny bends still get both boundary cuts
/// assert_eq!(bend_subdivisions(0.01, 0.1), 2);
/// ```
pub fn bend_subdivisions(bend_angle: f64, cut_max_angle: f64) -> usize {
    let buckets = (bend_angle / cut_max_angle + 0.5).round();
    (buckets as usize).max(2)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
