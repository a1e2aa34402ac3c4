//! Bounded recursive draw engine for self-similar ("Droste effect")
//! drawings.
//!
//! [`draw`] renders a shape primitive once, then recurses once per
//! [`TransformSpec`], each recursion drawing a smaller, rotated or offset
//! copy anchored to the frame of its immediate parent. Recursion stops at
//! whichever of three bounds trips first: iteration depth, a projected
//! call-count cap, or a minimum size.
//!
//! ```no_run
//! use droste_canvas::{Turtle, svg::SvgSurface};
//! use droste_engine::{DrawOptions, TransformSpec, draw};
//!
//! let mut turtle = Turtle::new(SvgSurface::new());
//! let mut shape = |t: &mut Turtle<SvgSurface>, size: f64, _ctx: &droste_engine::ShapeContext| {
//!     t.forward(size); // stand-in for a real primitive
//! };
//! draw(
//!     &mut turtle,
//!     &mut shape,
//!     350.0,
//!     &[TransformSpec::scaled(0.8)],
//!     &DrawOptions::default(),
//! )
//! .unwrap();
//! ```

mod transform;

pub use transform::{
    DEFAULT_MAX_FUNCTION_CALLS, DEFAULT_MAX_ITERATION_DEPTH, DEFAULT_MIN_SIZE, DrawError,
    DrawOptions, MAX_SUPPORTED_DEPTH, TransformSpec,
};

use droste_canvas::{Surface, Turtle};

/// Per-call metadata handed to the shape primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeContext {
    /// Recursion depth of this draw, starting at 1 for the outermost shape.
    /// Primitives use it for effects like palette cycling.
    pub iteration: u32,
}

/// A shape primitive: draws one self-contained shape of the given size at
/// the cursor's current pose and returns the cursor to that pose (pen state
/// may be left in either position; the engine re-asserts it).
///
/// Implemented for free by any `FnMut(&mut Turtle<S>, f64, &ShapeContext)`
/// closure, so one-off shapes don't need a named type.
pub trait Shape<S: Surface> {
    fn draw(&mut self, turtle: &mut Turtle<S>, size: f64, ctx: &ShapeContext);
}

impl<S, F> Shape<S> for F
where
    S: Surface,
    F: FnMut(&mut Turtle<S>, f64, &ShapeContext),
{
    fn draw(&mut self, turtle: &mut Turtle<S>, size: f64, ctx: &ShapeContext) {
        self(turtle, size, ctx)
    }
}

/// Conservative upper bound on the number of shape-draw calls a recursion
/// of `branches` transforms reaching `depth` could issue at that depth.
///
/// This is `branches ^ depth` with saturating overflow, and deliberately
/// NOT an exact running count: branches that terminated early on the size
/// bound are still counted. Cheap to compute, monotonic in depth, and safe
/// as a pre-draw cap; exactness would change observable stopping depths.
pub fn projected_calls(branches: usize, depth: u32) -> u64 {
    (branches as u64).checked_pow(depth).unwrap_or(u64::MAX)
}

/// Draw `shape` at `size`, then recurse once per transform in order, until
/// one of the bounds in `options` trips.
///
/// Validation failures ([`DrawError`]) surface before any drawing command
/// is issued. On success the turtle's position and heading are back at the
/// pre-call pose (pen state undefined) and the surface has been refreshed
/// exactly once, so repeated invocations compose predictably.
pub fn draw<S, F>(
    turtle: &mut Turtle<S>,
    shape: &mut F,
    size: f64,
    transforms: &[TransformSpec],
    options: &DrawOptions,
) -> Result<(), DrawError>
where
    S: Surface,
    F: Shape<S> + ?Sized,
{
    options.validate()?;
    if !size.is_finite() || size <= 0.0 {
        return Err(DrawError::InvalidStartSize(size));
    }
    for (index, transform) in transforms.iter().enumerate() {
        transform.validate(index)?;
    }

    let origin = turtle.pose();
    // Sizes are truncated to whole units at every level, not just here, to
    // keep rounding drift from accumulating across deep recursion.
    draw_level(turtle, shape, size.trunc(), transforms, options, 1);
    turtle.pen_up();
    turtle.set_pose(origin);
    // Only the outermost call flushes; nested levels never do.
    turtle.refresh();
    Ok(())
}

fn draw_level<S, F>(
    turtle: &mut Turtle<S>,
    shape: &mut F,
    size: f64,
    transforms: &[TransformSpec],
    options: &DrawOptions,
    depth: u32,
) where
    S: Surface,
    F: Shape<S> + ?Sized,
{
    // Base case, checked before drawing at this level.
    if depth > options.max_iteration_depth
        || projected_calls(transforms.len(), depth) > options.max_function_calls
        || size < options.min_size
    {
        log::debug!("recursion stopped at depth {depth} (size {size})");
        return;
    }

    let origin = turtle.pose();

    turtle.pen_down();
    shape.draw(turtle, size, &ShapeContext { iteration: depth });
    turtle.pen_up();

    for transform in transforms {
        // Re-anchor to the parent's pre-draw pose, rotate, then translate
        // along the rotated axes. The order matters whenever angle != 0.
        turtle.set_pose(origin);
        turtle.turn_left(transform.angle);
        turtle.forward(size * transform.x);
        turtle.turn_left(90.0);
        turtle.forward(size * transform.y);
        turtle.turn_right(90.0);
        draw_level(
            turtle,
            shape,
            (size * transform.size).trunc(),
            transforms,
            options,
            depth + 1,
        );
    }
}
