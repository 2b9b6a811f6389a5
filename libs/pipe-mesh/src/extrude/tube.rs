//! # Tube Extrusion
//!
//! Places one vertex ring per cut and triangulates the bands between
//! consecutive rings.
//!
//! ## Algorithm
//!
//! 1. Both buffers are sized up front from the cut count
//! 2. Rings are written in parallel, each task owning one ring's slice
//! 3. Bands are written in parallel, each task owning one band's slice
//!
//! Normals are the ring's radial directions; U unwraps arc length so that
//! one texture period equals one ring circumference.

use super::{index_buffer_len, slice_indices, vertex_buffer_len, ExtrudeParams};
use crate::error::{InputFault, PipeResult};
use crate::mesh::{TubeMesh, Vertex};
use crate::path::Cut;
use config::constants::{MAX_RING_VERTICES, MAX_TUBE_VERTICES, MIN_PIPE_RADIUS, MIN_RING_VERTICES};
use glam::{DVec3, Vec2};
use rayon::prelude::*;
use std::f64::consts::TAU;
use tracing::debug;

/// Builds tube meshes from cut sequences.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::{ExtrudeParams, Node, PathFrameSolver, TubeMeshExtruder};
/// use glam::DVec3;
///
/// let nodes = vec![Node::at(DVec3::ZERO), Node::at(DVec3::new(0.0, 0.0, 4.0))];
/// let cuts = PathFrameSolver::default().solve(&nodes)?;
///
/// let params = ExtrudeParams { ring_vertices: 9, pipe_radius: 0.5 };
/// let mesh = TubeMeshExtruder::new(params).extrude(&cuts)?;
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.index_count(), 48);
/// # Ok::<(), pipe_mesh::PipeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TubeMeshExtruder {
    params: ExtrudeParams,
}

impl TubeMeshExtruder {
    /// Creates an extruder with the given parameters.
    pub fn new(params: ExtrudeParams) -> Self {
        Self { params }
    }

    /// Returns the extrusion parameters.
    pub fn params(&self) -> &ExtrudeParams {
        &self.params
    }

    /// Checks the parameters against a cut sequence of `cut_count` cuts.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::InvalidInput`](crate::PipeError::InvalidInput) if
    /// the ring resolution or pipe radius is out of range, or the mesh would
    /// exceed the 16-bit index range.
    pub fn validate(&self, cut_count: usize) -> PipeResult<()> {
        let ring_vertices = self.params.ring_vertices;
        if !(MIN_RING_VERTICES..=MAX_RING_VERTICES).contains(&ring_vertices) {
            return Err(InputFault::RingVerticesOutOfRange {
                min: MIN_RING_VERTICES,
                max: MAX_RING_VERTICES,
                actual: ring_vertices,
            }
            .into());
        }

        let pipe_radius = self.params.pipe_radius;
        if !(pipe_radius.is_finite() && pipe_radius >= MIN_PIPE_RADIUS) {
            return Err(InputFault::PipeRadiusTooSmall {
                min: MIN_PIPE_RADIUS,
                actual: pipe_radius,
            }
            .into());
        }

        let count = vertex_buffer_len(cut_count, ring_vertices as usize);
        if count > MAX_TUBE_VERTICES {
            return Err(InputFault::TooManyVertices {
                count,
                max: MAX_TUBE_VERTICES,
            }
            .into());
        }

        Ok(())
    }

    /// Extrudes the cut sequence into a tube mesh.
    ///
    /// An empty sequence yields an empty mesh; a single cut yields one ring
    /// and no triangles.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::InvalidInput`](crate::PipeError::InvalidInput) if
    /// validation fails; no buffers are produced in that case.
    pub fn extrude(&self, cuts: &[Cut]) -> PipeResult<TubeMesh> {
        self.validate(cuts.len())?;

        let n = self.params.ring_vertices as usize;
        let radius = self.params.pipe_radius;

        let mut vertices = vec![Vertex::default(); vertex_buffer_len(cuts.len(), n)];
        let mut indices = vec![0u16; index_buffer_len(cuts.len(), n)];

        vertices
            .par_chunks_mut(n)
            .zip(cuts.par_iter())
            .for_each(|(ring, cut)| write_ring(cut, radius, ring));

        indices
            .par_chunks_mut((n - 1) * 6)
            .enumerate()
            .for_each(|(cut, band)| write_band(cut, n, band));

        debug!(
            "Extruded {} cuts -> {} vertices, {} indices",
            cuts.len(),
            vertices.len(),
            indices.len()
        );

        Ok(TubeMesh::from_buffers(vertices, indices))
    }
}

/// Fills one ring of `ring.len()` vertices around `cut`.
fn write_ring(cut: &Cut, radius: f64, ring: &mut [Vertex]) {
    let last = (ring.len() - 1) as f64;
    let angle_step = TAU / last;
    let u = (cut.arc_length / (TAU * radius)) as f32;

    // U grows along the path, so the tangent follows the cut's forward axis.
    let tangent = cut.forward().as_vec3().extend(1.0);

    for (v, vertex) in ring.iter_mut().enumerate() {
        let angle = v as f64 * angle_step;
        let normal = cut.local_to_world(DVec3::new(angle.cos(), angle.sin(), 0.0));

        *vertex = Vertex {
            position: (cut.origin + normal * radius).as_vec3(),
            normal: normal.as_vec3(),
            tangent,
            uv: Vec2::new(u, (v as f64 / last) as f32),
        };
    }
}

/// Fills the triangle indices of the band between ring `cut` and `cut + 1`.
fn write_band(cut: usize, ring_vertices: usize, band: &mut [u16]) {
    for (slice, quad) in band.chunks_exact_mut(6).enumerate() {
        quad.copy_from_slice(&slice_indices(cut, slice, ring_vertices));
    }
}
