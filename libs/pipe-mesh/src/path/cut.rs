//! # Cut
//!
//! An oriented cross-section frame marking the tube's slice plane at one
//! point along the path.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Local frame at a point on the path.
///
/// The matrix columns are `right`, `up` and `forward`; `forward` follows the
/// local path tangent. Cuts are only produced by
/// [`PathFrameSolver`](super::PathFrameSolver) and are read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cut {
    /// Orthonormal basis (columns: right, up, forward)
    pub matrix: DMat3,
    /// Point on the path centerline
    pub origin: DVec3,
    /// Centerline distance traveled from the first cut, arcs included
    pub arc_length: f64,
}

impl Cut {
    /// Creates a cut from its basis vectors.
    pub fn new(right: DVec3, up: DVec3, forward: DVec3, origin: DVec3, arc_length: f64) -> Self {
        Self {
            matrix: DMat3::from_cols(right, up, forward),
            origin,
            arc_length,
        }
    }

    /// Lateral axis of the cross-section.
    #[inline]
    pub fn right(&self) -> DVec3 {
        self.matrix.x_axis
    }

    /// Second lateral axis of the cross-section.
    #[inline]
    pub fn up(&self) -> DVec3 {
        self.matrix.y_axis
    }

    /// Path tangent direction.
    #[inline]
    pub fn forward(&self) -> DVec3 {
        self.matrix.z_axis
    }

    /// Maps a direction expressed in the cut's basis to world space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipe_mesh::Cut;
    /// use glam::DVec3;
    ///
    /// let cut = Cut::new(DVec3::X, DVec3::Y, DVec3::Z, DVec3::ZERO, 0.0);
    /// assert_eq!(cut.local_to_world(DVec3::new(1.0, 0.0, 0.0)), DVec3::X);
    /// ```
    #[inline]
    pub fn local_to_world(&self, direction: DVec3) -> DVec3 {
        self.matrix * direction
    }

    /// Returns true if the basis is orthonormal within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let (r, u, f) = (self.right(), self.up(), self.forward());
        [r, u, f]
            .iter()
            .all(|axis| (axis.length() - 1.0).abs() <= tolerance)
            && r.dot(u).abs() <= tolerance
            && r.dot(f).abs() <= tolerance
            && u.dot(f).abs() <= tolerance
    }
}
