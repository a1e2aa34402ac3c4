//! Built-in shape primitives for the droste draw engine.
//!
//! Each primitive draws one shape centered on the cursor's pose and walks
//! the cursor back to that pose before returning. The walk to the drawing
//! start (a square's corner, a triangle's apex) is each shape's own
//! convention; the engine re-anchors children to the pre-draw pose, so the
//! convention never leaks.
//!
//! Movement uses integer half-steps (`trunc`) the same way sizes are
//! truncated by the engine, so deep recursions stay on whole pixel units.

mod palette;

pub use palette::Palette;

use droste_canvas::{Surface, Turtle};
use droste_engine::{Shape, ShapeContext};

/// Walk to the top-right corner, trace the four sides, walk back.
fn square_walk<S: Surface>(t: &mut Turtle<S>, size: f64, filled: bool) {
    let half = (size / 2.0).trunc();
    t.pen_up();
    t.forward(half);
    t.turn_left(90.0);
    t.forward(half);
    t.turn_left(180.0);
    t.pen_down();
    if filled {
        t.begin_fill();
    }
    for _ in 0..4 {
        t.forward(size);
        t.turn_right(90.0);
    }
    if filled {
        t.end_fill();
    }
    t.pen_up();
    t.forward(half);
    t.turn_right(90.0);
    t.forward(half);
    t.turn_left(180.0);
}

/// Axis-aligned square outline centered on the cursor.
pub struct SquareOutline;

impl<S: Surface> Shape<S> for SquareOutline {
    fn draw(&mut self, turtle: &mut Turtle<S>, size: f64, _ctx: &ShapeContext) {
        square_walk(turtle, size.trunc(), false);
    }
}

/// Equilateral triangle outline centered on the cursor, apex up.
pub struct TriangleOutline;

impl<S: Surface> Shape<S> for TriangleOutline {
    fn draw(&mut self, turtle: &mut Turtle<S>, size: f64, _ctx: &ShapeContext) {
        let size = size.trunc();
        let height = size * 3.0_f64.sqrt() / 2.0;
        // The centroid sits a third of the height above the base, so the
        // apex is two thirds of the height from the centroid.
        let apex = height * (2.0 / 3.0);
        turtle.pen_up();
        turtle.turn_left(90.0);
        turtle.forward(apex);
        turtle.turn_right(150.0);
        turtle.pen_down();
        for _ in 0..3 {
            turtle.forward(size);
            turtle.turn_right(120.0);
        }
        turtle.pen_up();
        turtle.turn_right(30.0);
        turtle.forward(apex);
        turtle.turn_left(90.0);
    }
}

/// Square outline rotated 45 degrees.
pub struct DiamondOutline;

impl<S: Surface> Shape<S> for DiamondOutline {
    fn draw(&mut self, turtle: &mut Turtle<S>, size: f64, _ctx: &ShapeContext) {
        turtle.turn_left(45.0);
        square_walk(turtle, size.trunc(), false);
        turtle.turn_right(45.0);
    }
}

/// Filled square whose pen and fill color cycle through a palette, indexed
/// by the recursion iteration. Two alternating colors give the classic
/// bullseye effect.
pub struct FilledSquare {
    palette: Palette,
}

impl FilledSquare {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl<S: Surface> Shape<S> for FilledSquare {
    fn draw(&mut self, turtle: &mut Turtle<S>, size: f64, ctx: &ShapeContext) {
        let color = self.palette.color_for(ctx.iteration);
        turtle.set_pen_color(color);
        turtle.set_fill_color(color);
        square_walk(turtle, size.trunc(), true);
    }
}
