//! # Pipe Mesh
//!
//! Procedural tube meshes that follow an open 3D polyline, with corners
//! rounded into circular-arc bends.
//!
//! ## Architecture
//!
//! ```text
//! nodes[] → PathFrameSolver → cuts[] → TubeMeshExtruder → TubeMesh
//! ```
//!
//! ## Stages
//!
//! - **Frame solving**: sequential scan producing twist-free frames and
//!   cumulative arc length; bends are subdivided by angle
//! - **Extrusion**: data-parallel ring placement and triangulation into
//!   ring-major vertices and a 16-bit triangle list
//!
//! Every change to the path needs a full rebuild; there is no incremental
//! update.
//!
//! ## Usage
//!
//! ```rust
//! use pipe_mesh::{ExtrudeParams, FrameParams, Node, PipeGenerator};
//! use glam::DVec3;
//!
//! let nodes = vec![
//!     Node::new(DVec3::new(0.0, 0.0, 0.0), 0.0),
//!     Node::new(DVec3::new(4.0, 0.0, 0.0), 1.0),
//!     Node::new(DVec3::new(4.0, 3.0, 0.0), 0.0),
//! ];
//!
//! let generator = PipeGenerator::new(FrameParams::default(), ExtrudeParams::default());
//! let mesh = generator.generate(&nodes)?;
//! assert!(mesh.triangle_count() > 0);
//! # Ok::<(), pipe_mesh::PipeError>(())
//! ```

pub mod error;
pub mod extrude;
pub mod mesh;
pub mod path;
pub mod pipeline;

pub use error::{InputFault, PipeError, PipeResult};
pub use extrude::{ExtrudeParams, TubeMeshExtruder};
pub use mesh::{TubeMesh, Vertex};
pub use path::{Cut, FrameParams, Node, NodeRole, PathFrameSolver};
pub use pipeline::{PipeGenerator, PipeSpec};
