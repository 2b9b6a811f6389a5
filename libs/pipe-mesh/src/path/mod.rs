//! # Path Frames
//!
//! Converts an ordered list of path nodes into an ordered sequence of
//! oriented cross-section frames ("cuts"):
//! - **Caps**: the first and last node each produce one cut
//! - **Bends**: interior corners are rounded into circular arcs, each arc
//!   approximated by several cuts
//! - **Twist avoidance**: every frame is rotated from its predecessor
//!
//! ## Data Flow
//!
//! ```text
//! nodes[] → PathFrameSolver → cuts[] → TubeMeshExtruder
//! ```

mod cut;
mod solver;

#[cfg(test)]
mod tests;

pub use cut::Cut;
pub use solver::{FrameParams, PathFrameSolver};

use config::constants::DEFAULT_BEND_RADIUS;
use glam::{DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// A point on the path with the fillet radius desired at that corner.
///
/// The radius of the first and last node is ignored, as those nodes are caps.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::Node;
/// use glam::DVec3;
///
/// let node = Node::from([1.0, 2.0, 3.0, 0.5]);
/// assert_eq!(node.position, DVec3::new(1.0, 2.0, 3.0));
/// assert_eq!(node.radius, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node position in world space
    pub position: DVec3,
    /// Fillet radius used to round the corner at this node
    #[serde(default = "default_bend_radius")]
    pub radius: f64,
}

fn default_bend_radius() -> f64 {
    DEFAULT_BEND_RADIUS
}

impl Node {
    /// Creates a node with an explicit fillet radius.
    pub fn new(position: DVec3, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Creates a node using the default fillet radius.
    pub fn at(position: DVec3) -> Self {
        Self::new(position, DEFAULT_BEND_RADIUS)
    }

    /// Returns true if both position and radius are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.radius.is_finite()
    }
}

/// Packs `(x, y, z, radius)`.
impl From<[f64; 4]> for Node {
    fn from(value: [f64; 4]) -> Self {
        Self::new(DVec3::new(value[0], value[1], value[2]), value[3])
    }
}

/// Packs `(x, y, z, radius)` with the radius in `w`.
impl From<DVec4> for Node {
    fn from(value: DVec4) -> Self {
        Self::new(value.truncate(), value.w)
    }
}

/// Position of a node within the path, deciding how it is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Start cap: orients the first frame from the global up vector.
    First,
    /// Corner between two segments: may be rounded into a bend.
    Interior,
    /// End cap: closes the path with the last frame's orientation.
    Last,
}

impl NodeRole {
    /// Classifies the node at `index` in a path of `count` nodes.
    ///
    /// `count` must be at least 2, so a node is never both first and last.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipe_mesh::NodeRole;
    ///
    /// assert_eq!(NodeRole::classify(0, 3), NodeRole::First);
    /// assert_eq!(NodeRole::classify(1, 3), NodeRole::Interior);
    /// assert_eq!(NodeRole::classify(2, 3), NodeRole::Last);
    /// ```
    pub fn classify(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Interior
        }
    }
}
