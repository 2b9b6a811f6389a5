//! # Path Frame Tests
//!
//! Tests for node classification and the frame solver.

use super::*;
use crate::error::{InputFault, PipeError};
use approx::assert_relative_eq;
use config::constants::bend_subdivisions;
use glam::DVec4;
use std::f64::consts::{FRAC_PI_2, PI};

const TOLERANCE: f64 = 1e-9;

fn node(x: f64, y: f64, z: f64, radius: f64) -> Node {
    Node::new(DVec3::new(x, y, z), radius)
}

/// Horizontal L-shaped path with a single right-angle corner.
fn l_path() -> Vec<Node> {
    vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(10.0, 0.0, 0.0, 1.0),
        node(10.0, 0.0, 10.0, 1.0),
    ]
}

fn zigzag_path() -> Vec<Node> {
    vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(5.0, 1.0, 0.0, 0.8),
        node(6.0, 4.0, 3.0, 0.5),
        node(2.0, 6.0, 5.0, 1.2),
        node(2.0, 9.0, -1.0, 0.4),
        node(8.0, 9.0, -2.0, 0.0),
    ]
}

fn expect_fault(result: Result<Vec<Cut>, PipeError>) -> InputFault {
    match result {
        Err(PipeError::InvalidInput(fault)) => fault,
        Ok(cuts) => panic!("expected a validation error, got {} cuts", cuts.len()),
    }
}

// =============================================================================
// NODE TESTS
// =============================================================================

#[test]
fn test_node_role_classification() {
    assert_eq!(NodeRole::classify(0, 2), NodeRole::First);
    assert_eq!(NodeRole::classify(1, 2), NodeRole::Last);
    assert_eq!(NodeRole::classify(0, 5), NodeRole::First);
    assert_eq!(NodeRole::classify(3, 5), NodeRole::Interior);
    assert_eq!(NodeRole::classify(4, 5), NodeRole::Last);
}

#[test]
fn test_node_from_packed() {
    let node = Node::from(DVec4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(node.position, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(node.radius, 4.0);
}

#[test]
fn test_node_at_uses_default_radius() {
    let node = Node::at(DVec3::ONE);
    assert_eq!(node.radius, config::constants::DEFAULT_BEND_RADIUS);
}

// =============================================================================
// SOLVER TESTS
// =============================================================================

#[test]
fn test_two_nodes_yield_two_caps() {
    let nodes = vec![node(0.0, 0.0, 0.0, 0.0), node(0.0, 0.0, 5.0, 0.0)];
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();

    assert_eq!(cuts.len(), 2);
    assert_eq!(cuts[0].origin, DVec3::ZERO);
    assert_eq!(cuts[1].origin, DVec3::new(0.0, 0.0, 5.0));
    assert_relative_eq!(cuts[1].arc_length, 5.0, epsilon = TOLERANCE);
}

#[test]
fn test_straight_path_yields_identical_caps() {
    let nodes = vec![
        node(0.0, 0.0, 0.0, 1.0),
        node(3.0, 0.0, 0.0, 1.0),
        node(7.0, 0.0, 0.0, 1.0),
        node(12.0, 0.0, 0.0, 1.0),
    ];
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();

    assert_eq!(cuts.len(), 2);
    assert_eq!(cuts[0].matrix, cuts[1].matrix);
    assert_relative_eq!(cuts[0].arc_length, 0.0);
    assert_relative_eq!(cuts[1].arc_length, 12.0, epsilon = TOLERANCE);
}

#[test]
fn test_start_cap_orientation() {
    let cuts = PathFrameSolver::default().solve(&l_path()).unwrap();
    let first = cuts[0];

    assert_relative_eq!(first.forward().x, 1.0, epsilon = TOLERANCE);
    // right = forward × up, up = right × forward
    assert_relative_eq!(first.right().z, 1.0, epsilon = TOLERANCE);
    assert_relative_eq!(first.up().y, 1.0, epsilon = TOLERANCE);
}

#[test]
fn test_right_angle_bend_geometry() {
    let cuts = PathFrameSolver::default().solve(&l_path()).unwrap();
    let bend_cuts = bend_subdivisions(FRAC_PI_2, 0.1);

    assert_eq!(cuts.len(), 2 + bend_cuts);

    // The arc starts and ends on the tangent points one radius from the corner.
    let arc_start = cuts[1];
    let arc_end = cuts[bend_cuts];
    assert_relative_eq!(arc_start.origin.x, 9.0, epsilon = TOLERANCE);
    assert_relative_eq!(arc_start.origin.z, 0.0, epsilon = TOLERANCE);
    assert_relative_eq!(arc_end.origin.x, 10.0, epsilon = TOLERANCE);
    assert_relative_eq!(arc_end.origin.z, 1.0, epsilon = TOLERANCE);

    // The final frames follow the outgoing segment.
    assert_relative_eq!(arc_end.forward().z, 1.0, epsilon = TOLERANCE);
    assert_eq!(cuts.last().unwrap().matrix, arc_end.matrix);
}

#[test]
fn test_bend_cuts_lie_on_arc() {
    let cuts = PathFrameSolver::default().solve(&l_path()).unwrap();
    let center = DVec3::new(9.0, 0.0, 1.0);

    for cut in &cuts[1..cuts.len() - 1] {
        assert_relative_eq!(cut.origin.distance(center), 1.0, epsilon = TOLERANCE);
    }
}

#[test]
fn test_arc_length_includes_rounded_corner() {
    let cuts = PathFrameSolver::default().solve(&l_path()).unwrap();
    let last = cuts.last().unwrap();

    // 9 straight + quarter circle + 9 straight
    assert_relative_eq!(last.arc_length, 18.0 + FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn test_arc_length_through_pass_through_then_bend() {
    // The first corner is below the threshold, the second is a right angle.
    let nodes = vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(10.0, 0.0, 0.0, 1.0),
        node(20.0, 0.05, 0.0, 1.0),
        node(20.0, 0.05, 10.0, 0.0),
    ];
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();
    assert_eq!(cuts.len(), 2 + bend_subdivisions(FRAC_PI_2, 0.1));

    let incoming = DVec3::new(10.0, 0.05, 0.0);
    let first_arc = cuts[1];
    assert!(first_arc.forward().abs_diff_eq(incoming.normalize(), TOLERANCE));
    assert!(first_arc
        .origin
        .abs_diff_eq(nodes[2].position - incoming.normalize(), TOLERANCE));
    assert!(first_arc.is_orthonormal(TOLERANCE));

    // 10 straight + (|incoming| - 1) straight + quarter circle + 9 straight
    let last = cuts.last().unwrap();
    assert_relative_eq!(
        last.arc_length,
        18.0 + incoming.length() + FRAC_PI_2,
        epsilon = TOLERANCE
    );
}

#[test]
fn test_arc_length_is_non_decreasing() {
    let cuts = PathFrameSolver::default().solve(&zigzag_path()).unwrap();
    for pair in cuts.windows(2) {
        assert!(pair[1].arc_length >= pair[0].arc_length);
    }
}

#[test]
fn test_all_frames_are_orthonormal() {
    let cuts = PathFrameSolver::default().solve(&zigzag_path()).unwrap();
    assert!(cuts.len() > 6);
    for cut in &cuts {
        assert!(cut.is_orthonormal(1e-9), "frame not orthonormal: {cut:?}");
    }
}

#[test]
fn test_planar_path_does_not_twist() {
    // Every corner lies in the horizontal plane, so the up axis never rolls.
    let nodes = vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(10.0, 0.0, 0.0, 2.0),
        node(10.0, 0.0, 10.0, 1.0),
        node(0.0, 0.0, 20.0, 3.0),
        node(-5.0, 0.0, 5.0, 0.0),
    ];
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();

    for cut in &cuts {
        assert_relative_eq!(cut.up().y.abs(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_shallow_corner_is_passed_through() {
    let params = FrameParams {
        minimal_bend_angle: 0.05,
        ..FrameParams::default()
    };
    // Roughly a 0.01 rad deflection.
    let nodes = vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(10.0, 0.0, 0.0, 1.0),
        node(20.0, 0.0, 0.1, 1.0),
    ];
    let cuts = PathFrameSolver::new(params).solve(&nodes).unwrap();

    // Only the two caps remain.
    assert_eq!(cuts.len(), 2);
    assert_relative_eq!(cuts[1].arc_length, 10.0 + 100.01_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn test_sharp_corner_inserts_frames() {
    let nodes = zigzag_path();
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();
    assert!(cuts.len() > nodes.len());
}

#[test]
fn test_path_along_global_up() {
    let nodes = vec![node(0.0, 0.0, 0.0, 0.0), node(0.0, 5.0, 0.0, 0.0)];
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();

    assert_eq!(cuts.len(), 2);
    assert!(cuts[0].is_orthonormal(1e-9));
    assert_relative_eq!(cuts[0].forward().y, 1.0, epsilon = TOLERANCE);
}

#[test]
fn test_obtuse_corner_stays_orthonormal() {
    // Close to a hairpin, but not reversed.
    let nodes = vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(10.0, 0.0, 0.0, 0.5),
        node(0.0, 0.0, 1.0, 0.0),
    ];
    let cuts = PathFrameSolver::default().solve(&nodes).unwrap();

    assert!(cuts.len() > 2 + bend_subdivisions(PI / 2.0, 0.1));
    for cut in &cuts {
        assert!(cut.is_orthonormal(1e-9));
    }
}

#[test]
fn test_solve_is_deterministic() {
    let solver = PathFrameSolver::default();
    let first = solver.solve(&zigzag_path()).unwrap();
    let second = solver.solve(&zigzag_path()).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_rejects_zero_global_up() {
    let solver = PathFrameSolver::new(FrameParams {
        global_up: DVec3::ZERO,
        ..FrameParams::default()
    });
    let fault = expect_fault(solver.solve(&l_path()));
    assert_eq!(fault, InputFault::GlobalUpNotUnit { length_squared: 0.0 });
}

#[test]
fn test_rejects_single_node() {
    let fault = expect_fault(PathFrameSolver::default().solve(&[node(0.0, 0.0, 0.0, 1.0)]));
    assert_eq!(fault, InputFault::TooFewNodes { count: 1 });
}

#[test]
fn test_rejects_overlapping_nodes() {
    let nodes = vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(5.0, 0.0, 0.0, 1.0),
        node(5.0, 0.0, 0.001, 1.0),
        node(5.0, 5.0, 0.0, 0.0),
    ];
    let fault = expect_fault(PathFrameSolver::default().solve(&nodes));
    assert_eq!(fault, InputFault::NodesTooClose { index: 1 });
}

#[test]
fn test_rejects_tiny_interior_radius() {
    let mut nodes = l_path();
    nodes[1].radius = 1e-4;
    let fault = expect_fault(PathFrameSolver::default().solve(&nodes));
    assert_eq!(
        fault,
        InputFault::BendRadiusTooSmall {
            index: 1,
            radius: 1e-4
        }
    );
}

#[test]
fn test_cap_radius_is_ignored() {
    let mut nodes = l_path();
    nodes[0].radius = 0.0;
    nodes[2].radius = -1.0;
    assert!(PathFrameSolver::default().solve(&nodes).is_ok());
}

#[test]
fn test_rejects_reversal() {
    let nodes = vec![
        node(0.0, 0.0, 0.0, 0.0),
        node(10.0, 0.0, 0.0, 1.0),
        node(5.0, 0.0, 0.0, 0.0),
    ];
    let fault = expect_fault(PathFrameSolver::default().solve(&nodes));
    assert_eq!(fault, InputFault::PathReverses { index: 1 });
}

#[test]
fn test_rejects_non_finite_node() {
    let mut nodes = l_path();
    nodes[2].position.y = f64::NAN;
    let fault = expect_fault(PathFrameSolver::default().solve(&nodes));
    assert_eq!(fault, InputFault::NonFiniteNode { index: 2 });
}

#[test]
fn test_rejects_non_positive_angles() {
    let solver = PathFrameSolver::new(FrameParams {
        cut_max_angle: 0.0,
        ..FrameParams::default()
    });
    let fault = expect_fault(solver.solve(&l_path()));
    assert!(matches!(
        fault,
        InputFault::InvalidAngle {
            name: "cut_max_angle",
            ..
        }
    ));
}

#[test]
fn test_rejects_unbounded_bend_subdivision() {
    for cut_max_angle in [1e-6, 1e-15] {
        let solver = PathFrameSolver::new(FrameParams {
            cut_max_angle,
            ..FrameParams::default()
        });
        let mut cuts = Vec::new();
        let fault = match solver.solve_into(&l_path(), &mut cuts) {
            Err(PipeError::InvalidInput(fault)) => fault,
            other => panic!("expected a validation error, got {other:?}"),
        };

        assert!(matches!(
            fault,
            InputFault::TooManyCuts { count, max } if count > max
        ));
        assert!(cuts.is_empty());
    }
}

#[test]
fn test_fine_subdivision_within_budget() {
    let solver = PathFrameSolver::new(FrameParams {
        cut_max_angle: 1e-3,
        ..FrameParams::default()
    });
    let cuts = solver.solve(&l_path()).unwrap();
    assert_eq!(cuts.len(), 2 + bend_subdivisions(FRAC_PI_2, 1e-3));
    assert!(cuts.len() <= config::constants::MAX_PATH_CUTS);
}

#[test]
fn test_non_empty_output_is_rejected_untouched() {
    let existing = Cut::new(DVec3::X, DVec3::Y, DVec3::Z, DVec3::ONE, 42.0);
    let mut cuts = vec![existing];

    let result = PathFrameSolver::default().solve_into(&l_path(), &mut cuts);

    assert_eq!(
        result,
        Err(PipeError::InvalidInput(InputFault::OutputNotEmpty))
    );
    assert_eq!(cuts, vec![existing]);
}

#[test]
fn test_failed_solve_leaves_output_empty() {
    let solver = PathFrameSolver::new(FrameParams {
        global_up: DVec3::ZERO,
        ..FrameParams::default()
    });
    let mut cuts = Vec::new();
    assert!(solver.solve_into(&l_path(), &mut cuts).is_err());
    assert!(cuts.is_empty());
}
