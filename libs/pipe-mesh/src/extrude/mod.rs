//! # Ring Extrusion
//!
//! Turns a cut sequence into a watertight tube surface:
//! - **Rings**: one ring of vertices per cut, placed around the cut's origin
//! - **Bands**: consecutive rings are joined by quads split into two triangles
//!
//! ## Layout
//!
//! Vertices are stored ring-major. Each ring has `N` vertices; vertex `N-1`
//! repeats vertex `0` at angle 2π so the texture seam gets its own UVs.

mod tube;


pub use tube::TubeMeshExtruder;

use config::constants::{DEFAULT_PIPE_RADIUS, DEFAULT_RING_VERTICES};
use serde::{Deserialize, Serialize};

/// Parameters for ring extrusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrudeParams {
    /// Vertices per ring, seam duplicate included
    pub ring_vertices: u32,
    /// Distance from the path centerline to the tube surface
    pub pipe_radius: f64,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            ring_vertices: DEFAULT_RING_VERTICES,
            pipe_radius: DEFAULT_PIPE_RADIUS,
        }
    }
}

/// Number of vertices produced for `cut_count` rings of `ring_vertices`.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::extrude::vertex_buffer_len;
///
/// assert_eq!(vertex_buffer_len(10, 8), 80);
/// ```
#[inline]
pub fn vertex_buffer_len(cut_count: usize, ring_vertices: usize) -> usize {
    cut_count * ring_vertices
}

/// Number of indices produced for `cut_count` rings of `ring_vertices`.
///
/// Every band between two rings holds `ring_vertices - 1` quads of two
/// triangles each.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::extrude::index_buffer_len;
///
/// assert_eq!(index_buffer_len(10, 8), 9 * 7 * 6);
/// assert_eq!(index_buffer_len(1, 8), 0);
/// assert_eq!(index_buffer_len(0, 8), 0);
/// ```
#[inline]
pub fn index_buffer_len(cut_count: usize, ring_vertices: usize) -> usize {
    cut_count.saturating_sub(1) * ring_vertices.saturating_sub(1) * 6
}

/// Indices of the two triangles joining slice `slice` of ring `cut` to the
/// same slice of ring `cut + 1`.
///
/// With `ll`/`lh` the low and high vertex of the slice on ring `cut`, and
/// `hl`/`hh` the same on ring `cut + 1`, the quad is split along the
/// `ll`–`hh` diagonal as `(hh, lh, ll)` and `(ll, hl, hh)`.
///
/// The caller guarantees every index fits in 16 bits.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::extrude::slice_indices;
///
/// assert_eq!(slice_indices(0, 0, 4), [5, 1, 0, 0, 4, 5]);
/// ```
#[inline]
pub fn slice_indices(cut: usize, slice: usize, ring_vertices: usize) -> [u16; 6] {
    let ll = cut * ring_vertices + slice;
    let lh = ll + 1;
    let hl = ll + ring_vertices;
    let hh = hl + 1;

    [hh, lh, ll, ll, hl, hh].map(|index| index as u16)
}
