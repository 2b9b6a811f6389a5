//! # Error Types
//!
//! Error types for pipe mesh generation. All errors are explicit and raised
//! before any output buffer is touched.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when validation fails
//! - A failed call produces no partial output
//! - Every fault names the check that rejected the input

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during pipe mesh generation.
///
/// There is a single error kind: the caller supplied input that one of the
/// stages cannot process. The wrapped [`InputFault`] says which check failed.
///
/// ## Example
///
/// ```rust
/// use pipe_mesh::{InputFault, Node, PathFrameSolver, PipeError};
/// use glam::DVec3;
///
/// let nodes = vec![Node::new(DVec3::ZERO, 1.0)];
/// match PathFrameSolver::default().solve(&nodes) {
///     Err(PipeError::InvalidInput(InputFault::TooFewNodes { count })) => assert_eq!(count, 1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipeError {
    /// Input rejected by validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputFault),
}

/// The validation check that rejected a call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputFault {
    /// The global up vector is not unit length.
    #[error("global up must be a unit vector (squared length {length_squared})")]
    GlobalUpNotUnit {
        /// Squared length of the supplied vector.
        length_squared: f64,
    },

    /// The path has fewer nodes than a start and an end cap need.
    #[error("path needs at least 2 nodes, got {count}")]
    TooFewNodes {
        /// Number of nodes supplied.
        count: usize,
    },

    /// A node position or radius is NaN or infinite.
    #[error("node {index} has a non-finite position or radius")]
    NonFiniteNode {
        /// Index of the offending node.
        index: usize,
    },

    /// Two consecutive nodes overlap.
    #[error("nodes {index} and {} are too close together", .index + 1)]
    NodesTooClose {
        /// Index of the first node of the pair.
        index: usize,
    },

    /// An interior node's fillet radius is below the minimum.
    #[error("bend radius {radius} at node {index} is below the minimum")]
    BendRadiusTooSmall {
        /// Index of the offending node.
        index: usize,
        /// Radius supplied for that node.
        radius: f64,
    },

    /// The path doubles back on itself at an interior node.
    #[error("path reverses direction at node {index}")]
    PathReverses {
        /// Index of the offending node.
        index: usize,
    },

    /// An angular parameter is not strictly positive and finite.
    #[error("{name} must be a positive angle, got {value}")]
    InvalidAngle {
        /// Parameter name.
        name: &'static str,
        /// Supplied value in radians.
        value: f64,
    },

    /// Bend subdivision would produce more cuts than any tube can hold.
    #[error("path needs {count} cuts (max: {max})")]
    TooManyCuts {
        /// Cuts the path would produce.
        count: usize,
        /// Largest accepted cut count.
        max: usize,
    },

    /// The output cut sequence was not empty.
    #[error("output cut sequence must be empty before solving")]
    OutputNotEmpty,

    /// Ring resolution outside the supported range.
    #[error("ring vertices must be within {min}..={max}, got {actual}")]
    RingVerticesOutOfRange {
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
        /// Supplied value.
        actual: u32,
    },

    /// Pipe radius below the minimum.
    #[error("pipe radius must be at least {min}, got {actual}")]
    PipeRadiusTooSmall {
        /// Smallest accepted value.
        min: f64,
        /// Supplied value.
        actual: f64,
    },

    /// The mesh would need more vertices than 16-bit indices can address.
    #[error("tube needs {count} vertices (max: {max})")]
    TooManyVertices {
        /// Vertices the mesh would need.
        count: usize,
        /// Largest addressable vertex count.
        max: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for pipe mesh operations.
pub type PipeResult<T> = Result<T, PipeError>;

// =============================================================================
// TESTS
// =============================================================================
