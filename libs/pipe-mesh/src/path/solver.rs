//! # Path Frame Solver
//!
//! Sequential scan over path nodes producing the ordered cut sequence.
//!
//! ## Algorithm
//!
//! 1. The first node emits a cut oriented from the global up vector
//! 2. Each interior node whose corner is sharp enough is rounded: the corner
//!    is replaced by a circular arc tangent to both segments, and the previous
//!    frame is turned onto the incoming segment, then rotated across the arc
//!    about the bend plane normal
//! 3. The last node emits a cut reusing the previous frame's orientation
//!
//! Each frame is derived from its predecessor, so the scan must run strictly
//! in path order on a single thread.

use super::{Cut, Node, NodeRole};
use crate::error::{InputFault, PipeResult};
use config::constants::{
    bend_subdivisions, DEFAULT_CUT_MAX_ANGLE, DEFAULT_GLOBAL_UP, DEFAULT_MINIMAL_BEND_ANGLE,
    MAX_GLOBAL_UP_DEVIATION, MAX_PATH_CUTS, MIN_BEND_RADIUS, MIN_NODE_SEPARATION_SQUARED,
    MIN_PATH_NODES, REVERSAL_DOT_TOLERANCE,
};
use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for frame propagation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameParams {
    /// Unit vector used to orient the first cut
    pub global_up: DVec3,
    /// Angular step budget (radians) when subdividing a bend
    pub cut_max_angle: f64,
    /// Bend angle (radians) below which a corner is passed straight through
    pub minimal_bend_angle: f64,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            global_up: DVec3::from_array(DEFAULT_GLOBAL_UP),
            cut_max_angle: DEFAULT_CUT_MAX_ANGLE,
            minimal_bend_angle: DEFAULT_MINIMAL_BEND_ANGLE,
        }
    }
}

/// Converts path nodes into an ordered sequence of [`Cut`]s.
///
/// # Example
///
/// ```rust
/// use pipe_mesh::{Node, PathFrameSolver};
/// use glam::DVec3;
///
/// let nodes = vec![
///     Node::new(DVec3::new(0.0, 0.0, 0.0), 1.0),
///     Node::new(DVec3::new(10.0, 0.0, 0.0), 1.0),
///     Node::new(DVec3::new(10.0, 0.0, 10.0), 1.0),
/// ];
/// let cuts = PathFrameSolver::default().solve(&nodes)?;
/// assert!(cuts.len() > nodes.len());
/// # Ok::<(), pipe_mesh::PipeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathFrameSolver {
    params: FrameParams,
}

impl PathFrameSolver {
    /// Creates a solver with the given parameters.
    pub fn new(params: FrameParams) -> Self {
        Self { params }
    }

    /// Returns the solver parameters.
    pub fn params(&self) -> &FrameParams {
        &self.params
    }

    /// Solves the path into a freshly allocated cut sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::InvalidInput`](crate::PipeError::InvalidInput) if
    /// the parameters or nodes fail validation.
    pub fn solve(&self, nodes: &[Node]) -> PipeResult<Vec<Cut>> {
        let mut cuts = Vec::new();
        self.solve_into(nodes, &mut cuts)?;
        Ok(cuts)
    }

    /// Solves the path into `cuts`, which must be empty.
    ///
    /// On failure `cuts` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::InvalidInput`](crate::PipeError::InvalidInput) if
    /// `cuts` is not empty or validation fails.
    pub fn solve_into(&self, nodes: &[Node], cuts: &mut Vec<Cut>) -> PipeResult<()> {
        if !cuts.is_empty() {
            return Err(InputFault::OutputNotEmpty.into());
        }
        self.validate(nodes)?;

        let mut scan = FrameScan::default();
        let mut emitted = Vec::with_capacity(nodes.len() * 2);

        for (index, node) in nodes.iter().enumerate() {
            match NodeRole::classify(index, nodes.len()) {
                NodeRole::First => {
                    scan.start_cap(node, &nodes[index + 1], self.params.global_up, &mut emitted)
                }
                NodeRole::Interior => {
                    scan.bend(index, node, &nodes[index + 1], &self.params, &mut emitted)
                }
                NodeRole::Last => scan.end_cap(node, &mut emitted),
            }
        }

        debug!(
            "Solved path: {} nodes -> {} cuts, length {:.4}",
            nodes.len(),
            emitted.len(),
            scan.total_length
        );

        cuts.extend(emitted);
        Ok(())
    }

    /// Checks parameters and nodes without producing output.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputFault`] encountered.
    pub fn validate(&self, nodes: &[Node]) -> PipeResult<()> {
        let params = &self.params;

        for (name, value) in [
            ("cut_max_angle", params.cut_max_angle),
            ("minimal_bend_angle", params.minimal_bend_angle),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(InputFault::InvalidAngle { name, value }.into());
            }
        }

        let length_squared = params.global_up.length_squared();
        if !((length_squared - 1.0).abs() <= MAX_GLOBAL_UP_DEVIATION) {
            return Err(InputFault::GlobalUpNotUnit { length_squared }.into());
        }

        if nodes.len() < MIN_PATH_NODES {
            return Err(InputFault::TooFewNodes { count: nodes.len() }.into());
        }

        if let Some(index) = nodes.iter().position(|node| !node.is_finite()) {
            return Err(InputFault::NonFiniteNode { index }.into());
        }

        for (index, pair) in nodes.windows(2).enumerate() {
            if pair[0].position.distance_squared(pair[1].position) < MIN_NODE_SEPARATION_SQUARED {
                return Err(InputFault::NodesTooClose { index }.into());
            }
        }

        for (offset, triple) in nodes.windows(3).enumerate() {
            let index = offset + 1;
            let node = &triple[1];
            if node.radius < MIN_BEND_RADIUS {
                return Err(InputFault::BendRadiusTooSmall {
                    index,
                    radius: node.radius,
                }
                .into());
            }

            let incoming = (node.position - triple[0].position).normalize();
            let outgoing = (triple[2].position - node.position).normalize();
            if incoming.dot(outgoing) < -1.0 + REVERSAL_DOT_TOLERANCE {
                return Err(InputFault::PathReverses { index }.into());
            }
        }

        let count = self.cut_count(nodes);
        if count > MAX_PATH_CUTS {
            return Err(InputFault::TooManyCuts {
                count,
                max: MAX_PATH_CUTS,
            }
            .into());
        }

        Ok(())
    }

    /// Number of cuts `nodes` solves into: both caps plus the subdivisions
    /// of every rounded corner. Saturates instead of overflowing.
    fn cut_count(&self, nodes: &[Node]) -> usize {
        nodes.windows(3).fold(2usize, |count, triple| {
            let bend_angle = corner_angle(
                triple[1].position - triple[0].position,
                triple[2].position - triple[1].position,
            );
            if bend_angle < self.params.minimal_bend_angle {
                count
            } else {
                count.saturating_add(bend_subdivisions(bend_angle, self.params.cut_max_angle))
            }
        })
    }
}

/// Unsigned angle between two consecutive path segments.
fn corner_angle(incoming: DVec3, outgoing: DVec3) -> f64 {
    let cos_angle = incoming.dot(outgoing) / (incoming.length() * outgoing.length());
    cos_angle.clamp(-1.0, 1.0).acos().abs()
}

// =============================================================================
// SCAN STATE
// =============================================================================

/// Accumulator threaded through one solve, from start cap to end cap.
#[derive(Debug, Default)]
struct FrameScan {
    /// Most recently emitted cut whose frame the next corner rotates from
    last_cut: Cut,
    /// Incoming segment of the next corner
    cached_arm: DVec3,
    cached_arm_length: f64,
    /// Centerline length up to `last_length_point`
    total_length: f64,
    last_length_point: DVec3,
}

impl FrameScan {
    fn start_cap(&mut self, node: &Node, next: &Node, global_up: DVec3, cuts: &mut Vec<Cut>) {
        let arm = next.position - node.position;
        let arm_length = arm.length();
        let forward = arm / arm_length;

        // A path starting along the up vector has no preferred roll.
        let right = forward
            .cross(global_up)
            .try_normalize()
            .unwrap_or_else(|| forward.any_orthonormal_vector());
        let up = right.cross(forward).normalize();

        let cut = Cut::new(right, up, forward, node.position, 0.0);
        cuts.push(cut);

        self.last_cut = cut;
        self.cached_arm = arm;
        self.cached_arm_length = arm_length;
        self.total_length = 0.0;
        self.last_length_point = node.position;
    }

    fn bend(
        &mut self,
        index: usize,
        node: &Node,
        next: &Node,
        params: &FrameParams,
        cuts: &mut Vec<Cut>,
    ) {
        let next_arm = next.position - node.position;
        let next_arm_length = next_arm.length();
        let next_forward = next_arm / next_arm_length;

        let bend_angle = corner_angle(self.cached_arm, next_arm);

        if bend_angle < params.minimal_bend_angle {
            // The centerline runs through the node itself.
            self.total_length += node.position.distance(self.last_length_point);
            self.last_length_point = node.position;
            self.cached_arm = next_arm;
            self.cached_arm_length = next_arm_length;
            return;
        }

        let radius = node.radius;
        let prev_forward = self.cached_arm / self.cached_arm_length;

        // Pass-through corners leave the frame behind the incoming segment.
        let align = DQuat::from_rotation_arc(self.last_cut.forward(), prev_forward);
        let basis = DMat3::from_quat(align) * self.last_cut.matrix;

        // Distance from the corner back to where the arc leaves the segment
        let tangent_dist = radius * (bend_angle / 2.0).tan().abs();
        if tangent_dist > self.cached_arm_length || tangent_dist > next_arm_length {
            warn!(
                "Bend at node {} overshoots: tangent distance {:.4}, arms {:.4} / {:.4}",
                index, tangent_dist, self.cached_arm_length, next_arm_length
            );
        }

        let tangent_point = node.position - prev_forward * tangent_dist;
        let bend_plane_normal = prev_forward
            .cross(next_forward)
            .try_normalize()
            .unwrap_or_else(|| prev_forward.any_orthonormal_vector());
        let tangent_to_center = radius * bend_plane_normal.cross(prev_forward).normalize();
        let center = tangent_point + tangent_to_center;

        self.total_length += tangent_point.distance(self.last_length_point);

        let count = bend_subdivisions(bend_angle, params.cut_max_angle);
        let mut last = self.last_cut;

        for step in 0..count {
            let cut_angle = step as f64 / (count - 1) as f64 * bend_angle;
            let rotation = DQuat::from_axis_angle(bend_plane_normal, cut_angle);

            last = Cut {
                matrix: DMat3::from_quat(rotation) * basis,
                origin: center - rotation * tangent_to_center,
                arc_length: self.total_length + cut_angle * radius,
            };
            cuts.push(last);
        }

        self.total_length += bend_angle * radius;
        self.last_cut = last;
        self.last_length_point = last.origin;
        self.cached_arm = next_arm;
        self.cached_arm_length = next_arm_length;
    }

    fn end_cap(&mut self, node: &Node, cuts: &mut Vec<Cut>) {
        self.total_length += node.position.distance(self.last_length_point);

        cuts.push(Cut {
            matrix: self.last_cut.matrix,
            origin: node.position,
            arc_length: self.total_length,
        });
    }
}
