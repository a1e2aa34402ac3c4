//! Behavioral tests for the recursive draw engine: termination bounds,
//! frame relativity, sibling isolation and validation.

use droste_canvas::record::RecordingSurface;
use droste_canvas::{Pose, Turtle};
use droste_engine::{
    DEFAULT_MAX_ITERATION_DEPTH, DrawError, DrawOptions, ShapeContext, TransformSpec, draw,
};
use glam::DVec2;

const EPS: f64 = 1e-9;

/// One record per shape-draw call.
#[derive(Debug, Clone, Copy)]
struct Call {
    pose: Pose,
    size: f64,
    iteration: u32,
}

fn run(
    size: f64,
    transforms: &[TransformSpec],
    options: &DrawOptions,
) -> Result<(Vec<Call>, RecordingSurface), DrawError> {
    let mut turtle = Turtle::new(RecordingSurface::new());
    let mut calls = Vec::new();
    let mut shape = |t: &mut Turtle<RecordingSurface>, size: f64, ctx: &ShapeContext| {
        calls.push(Call {
            pose: t.pose(),
            size,
            iteration: ctx.iteration,
        });
        // Draw something so strokes land on the surface.
        t.forward(size);
    };
    draw(&mut turtle, &mut shape, size, transforms, options)?;
    Ok((calls, turtle.into_surface()))
}

fn opts(max_depth: u32, max_calls: u64, min_size: f64) -> DrawOptions {
    DrawOptions {
        max_iteration_depth: max_depth,
        max_function_calls: max_calls,
        min_size,
    }
}

#[test]
fn terminates_within_call_cap_for_shrinking_transforms() {
    let transforms = [TransformSpec::scaled(0.9), TransformSpec::scaled(0.9)];
    let (calls, _) = run(1_000_000.0, &transforms, &DrawOptions::default()).unwrap();
    assert!(!calls.is_empty());
    assert!(calls.len() as u64 <= DrawOptions::default().max_function_calls);
}

#[test]
fn empty_transforms_draws_exactly_once() {
    let (calls, _) = run(100.0, &[], &DrawOptions::default()).unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].iteration, 1);
    assert!((calls[0].size - 100.0).abs() < EPS);
}

#[test]
fn depth_bound_stops_recursion() {
    let (calls, _) = run(
        1000.0,
        &[TransformSpec::scaled(0.99)],
        &opts(5, u64::MAX, 1.0),
    )
    .unwrap();
    // One call per depth 1..=5, sizes truncated at every step.
    assert_eq!(calls.len(), 5);
    let sizes: Vec<f64> = calls.iter().map(|c| c.size).collect();
    assert_eq!(sizes, vec![1000.0, 990.0, 980.0, 970.0, 960.0]);
    let iterations: Vec<u32> = calls.iter().map(|c| c.iteration).collect();
    assert_eq!(iterations, vec![1, 2, 3, 4, 5]);
}

#[test]
fn size_bound_stops_recursion() {
    let (calls, _) = run(
        4.0,
        &[TransformSpec::scaled(0.5)],
        &opts(400, u64::MAX, 1.0),
    )
    .unwrap();
    let sizes: Vec<f64> = calls.iter().map(|c| c.size).collect();
    // 4, 2, 1, then 0 < min_size stops before drawing.
    assert_eq!(sizes, vec![4.0, 2.0, 1.0]);
}

#[test]
fn call_projection_cap_stops_at_pre_draw_check() {
    let transforms = [TransformSpec::scaled(0.9); 4];
    let (calls, _) = run(1000.0, &transforms, &opts(400, 100, 1.0)).unwrap();
    // 4^3 = 64 <= 100 so depth 3 executes; 4^4 = 256 > 100 so depth 4 never
    // draws. Total calls: 1 + 4 + 16.
    assert_eq!(calls.iter().map(|c| c.iteration).max(), Some(3));
    assert_eq!(calls.len(), 21);
}

#[test]
fn non_shrinking_transform_is_bounded_by_depth() {
    let (calls, _) = run(
        350.0,
        &[TransformSpec::scaled(1.0)],
        &DrawOptions::default(),
    )
    .unwrap();
    assert_eq!(calls.len(), DEFAULT_MAX_ITERATION_DEPTH as usize);
}

#[test]
fn zero_scale_branch_terminates_without_error() {
    let (calls, _) = run(350.0, &[TransformSpec::scaled(0.0)], &DrawOptions::default()).unwrap();
    assert_eq!(calls.len(), 1);
}

#[test]
fn child_frame_is_rotate_then_translate() {
    let transform = TransformSpec {
        size: 0.5,
        x: 0.5,
        angle: 90.0,
        ..TransformSpec::default()
    };
    let (calls, _) = run(100.0, &[transform], &opts(2, u64::MAX, 1.0)).unwrap();
    assert_eq!(calls.len(), 2);
    // Rotating to 90 degrees first, then moving size*x along the rotated
    // heading, lands at (0, 50). Translate-then-rotate would land at (50, 0).
    let child = calls[1].pose;
    assert!((child.position - DVec2::new(0.0, 50.0)).length() < EPS);
    assert!((child.heading - 90.0).abs() < EPS);
    assert!((calls[1].size - 50.0).abs() < EPS);
}

#[test]
fn offsets_scale_with_parent_size_not_child_size() {
    let transform = TransformSpec {
        size: 0.5,
        x: 1.0,
        ..TransformSpec::default()
    };
    let (calls, _) = run(100.0, &[transform], &opts(3, u64::MAX, 1.0)).unwrap();
    // Depth 2 offset uses parent size 100; depth 3 offset adds child size 50.
    assert!((calls[1].pose.position - DVec2::new(100.0, 0.0)).length() < EPS);
    assert!((calls[2].pose.position - DVec2::new(150.0, 0.0)).length() < EPS);
}

#[test]
fn siblings_start_from_the_same_parent_frame() {
    let transforms = [
        TransformSpec {
            size: 0.5,
            x: 0.5,
            ..TransformSpec::default()
        },
        TransformSpec {
            size: 0.5,
            y: 0.5,
            ..TransformSpec::default()
        },
    ];
    // min_size 26 keeps the tree at two levels: 100 -> 50, grandchildren 25.
    let (calls, _) = run(100.0, &transforms, &opts(400, u64::MAX, 26.0)).unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].iteration, 2);
    assert_eq!(calls[2].iteration, 2);
    // First branch went to (50, 0); the second must still start from the
    // parent's origin frame, not wherever the first subtree ended.
    assert!((calls[1].pose.position - DVec2::new(50.0, 0.0)).length() < EPS);
    assert!((calls[2].pose.position - DVec2::new(0.0, 50.0)).length() < EPS);
    assert!(calls[2].pose.heading.abs() < EPS);
}

#[test]
fn draw_order_follows_transform_order() {
    let transforms = [
        TransformSpec {
            size: 0.5,
            x: 0.5,
            ..TransformSpec::default()
        },
        TransformSpec {
            size: 0.5,
            x: -0.5,
            ..TransformSpec::default()
        },
    ];
    let (calls, _) = run(100.0, &transforms, &opts(2, u64::MAX, 1.0)).unwrap();
    assert_eq!(calls.len(), 3);
    assert!(calls[1].pose.position.x > 0.0);
    assert!(calls[2].pose.position.x < 0.0);
}

#[test]
fn rejects_non_positive_start_size() {
    assert!(matches!(
        run(0.0, &[], &DrawOptions::default()),
        Err(DrawError::InvalidStartSize(_))
    ));
    assert!(matches!(
        run(-5.0, &[], &DrawOptions::default()),
        Err(DrawError::InvalidStartSize(_))
    ));
}

#[test]
fn rejects_negative_transform_scale_before_drawing() {
    let mut turtle = Turtle::new(RecordingSurface::new());
    let mut draws = 0u32;
    let mut shape = |_: &mut Turtle<RecordingSurface>, _: f64, _: &ShapeContext| draws += 1;
    let err = draw(
        &mut turtle,
        &mut shape,
        100.0,
        &[TransformSpec::scaled(0.5), TransformSpec::scaled(-0.1)],
        &DrawOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, DrawError::InvalidTransform { index: 1, .. }));
    assert_eq!(draws, 0);
    assert!(turtle.surface().events.is_empty());
}

#[test]
fn rejects_non_finite_transform_fields() {
    let transform = TransformSpec {
        x: f64::INFINITY,
        ..TransformSpec::default()
    };
    assert!(matches!(
        run(100.0, &[transform], &DrawOptions::default()),
        Err(DrawError::InvalidTransform { index: 0, .. })
    ));
}

#[test]
fn rejects_depth_cap_beyond_supported_limit() {
    let options = opts(u32::MAX, u64::MAX, 1.0);
    assert!(matches!(
        run(100.0, &[], &options),
        Err(DrawError::DepthLimitUnsupported { .. })
    ));
}

#[test]
fn restores_pose_and_refreshes_once() {
    let mut turtle = Turtle::new(RecordingSurface::new());
    turtle.forward(17.0);
    turtle.turn_left(30.0);
    let before = turtle.pose();

    let mut shape = |t: &mut Turtle<RecordingSurface>, size: f64, _: &ShapeContext| {
        t.forward(size);
        t.turn_left(45.0);
    };
    draw(
        &mut turtle,
        &mut shape,
        64.0,
        &[TransformSpec::scaled(0.5)],
        &DrawOptions::default(),
    )
    .unwrap();

    let after = turtle.pose();
    assert!((after.position - before.position).length() < EPS);
    assert!((after.heading - before.heading).abs() < EPS);
    let surface = turtle.into_surface();
    assert_eq!(surface.refresh_count(), 1);
    assert!(surface.stroke_count() > 0);
}

#[test]
fn repeated_draws_compose() {
    let mut turtle = Turtle::new(RecordingSurface::new());
    let mut shape = |t: &mut Turtle<RecordingSurface>, size: f64, _: &ShapeContext| {
        t.forward(size);
    };
    for _ in 0..2 {
        draw(
            &mut turtle,
            &mut shape,
            10.0,
            &[],
            &DrawOptions::default(),
        )
        .unwrap();
    }
    let surface = turtle.into_surface();
    assert_eq!(surface.refresh_count(), 2);
    assert_eq!(surface.stroke_count(), 2);
}
