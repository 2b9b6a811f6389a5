//! # Mesh Data Structure
//!
//! Tube mesh buffers: ring-major vertices and a 16-bit triangle list.

use config::constants::approx_zero;
use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A single tube vertex, laid out for direct upload to a GPU vertex buffer.
///
/// All path math runs in f64; vertices are narrowed to f32 when written.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// World-space position
    pub position: Vec3,
    /// Unit outward normal
    pub normal: Vec3,
    /// Direction of increasing U, with handedness in `w`
    pub tangent: Vec4,
    /// Texture coordinates (U along the path, V around the ring)
    pub uv: Vec2,
}

impl Vertex {
    /// Number of f32 values per vertex in [`TubeMesh::interleaved_f32`].
    pub const FLOATS: usize = 12;
}

/// An indexed triangle mesh describing a tube surface.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::{Cut, ExtrudeParams, TubeMeshExtruder};
/// use glam::DVec3;
///
/// let cut = Cut::new(DVec3::X, DVec3::Y, DVec3::Z, DVec3::ZERO, 0.0);
/// let mesh = TubeMeshExtruder::new(ExtrudeParams::default()).extrude(&[cut, cut])?;
/// assert_eq!(mesh.vertex_count(), 14);
/// assert_eq!(mesh.triangle_count(), 12);
/// # Ok::<(), pipe_mesh::PipeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TubeMesh {
    /// Vertices in ring-major order
    vertices: Vec<Vertex>,
    /// Triangle list (3 indices per triangle)
    indices: Vec<u16>,
}

impl TubeMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_buffers(vertices: Vec<Vertex>, indices: Vec<u16>) -> Self {
        Self { vertices, indices }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns a reference to the index buffer.
    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Consumes the mesh, returning the raw vertex and index buffers.
    pub fn into_buffers(self) -> (Vec<Vertex>, Vec<u16>) {
        (self.vertices, self.indices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.vertices[1..].iter().fold(
            (first.position, first.position),
            |(min, max), v| (min.min(v.position), max.max(v.position)),
        )
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Index count is a multiple of three
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.indices.len() % 3 != 0 {
            return false;
        }

        let vertex_count = self.vertices.len();

        self.triangles().all(|tri| {
            let [a, b, c] = tri.map(usize::from);

            if a >= vertex_count || b >= vertex_count || c >= vertex_count {
                return false;
            }
            if a == b || b == c || a == c {
                return false;
            }

            let v0 = self.vertices[a].position.as_dvec3();
            let v1 = self.vertices[b].position.as_dvec3();
            let v2 = self.vertices[c].position.as_dvec3();
            !approx_zero((v1 - v0).cross(v2 - v0).length())
        })
    }

    /// Exports positions as a flattened [x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.position.to_array())
            .collect()
    }

    /// Exports normals as a flattened [x, y, z, ...] array.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.normal.to_array())
            .collect()
    }

    /// Exports texture coordinates as a flattened [u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.uv.to_array()).collect()
    }

    /// Exports vertices interleaved as position, normal, tangent, uv.
    ///
    /// Each vertex occupies [`Vertex::FLOATS`] consecutive values.
    pub fn interleaved_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * Vertex::FLOATS);
        for v in &self.vertices {
            result.extend_from_slice(&v.position.to_array());
            result.extend_from_slice(&v.normal.to_array());
            result.extend_from_slice(&v.tangent.to_array());
            result.extend_from_slice(&v.uv.to_array());
        }
        result
    }
}
