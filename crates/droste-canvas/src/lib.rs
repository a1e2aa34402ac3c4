//! Turtle-style 2D drawing cursor and render surfaces.
//!
//! A [`Turtle`] carries a position, a heading and a pen over an abstract
//! [`Surface`]. All movement is relative to the current heading (forward
//! moves and turns); the only absolute operation is [`Turtle::set_pose`],
//! which restores a pose previously captured with [`Turtle::pose`]. Pen-down
//! movement is buffered into polylines and flushed to the surface when the
//! pen lifts, a color changes, the pose is reset or the drawing is
//! refreshed.

pub mod color;
pub mod record;
pub mod svg;

pub use color::Color;

use glam::DVec2;

/// Position and facing direction of the drawing cursor.
///
/// `heading` is in degrees, `0` pointing along +x, counter-clockwise
/// positive, normalized to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: DVec2,
    pub heading: f64,
}

impl Pose {
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
        }
    }

    /// Unit vector along the heading.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.heading.to_radians())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

fn normalize_heading(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Receiver of finished drawing primitives.
///
/// The turtle hands over complete polylines and polygons; a surface decides
/// what to do with them (accumulate SVG elements, record events for tests).
pub trait Surface {
    /// An open polyline stroked with `color`. `points` has at least two
    /// entries.
    fn stroke_path(&mut self, points: &[DVec2], color: Color, width: f64);

    /// A closed filled polygon. `points` has at least three entries and is
    /// implicitly closed.
    fn fill_polygon(&mut self, points: &[DVec2], fill: Color, stroke: Color);

    /// Buffered drawing is complete and may be made visible.
    fn refresh(&mut self) {}
}

/// The drawing cursor.
pub struct Turtle<S: Surface> {
    surface: S,
    pose: Pose,
    pen_down: bool,
    pen_color: Color,
    fill_color: Color,
    pen_width: f64,
    /// Points of the polyline currently being stroked, empty while the pen
    /// is up or nothing has been drawn since the last flush.
    path: Vec<DVec2>,
    /// Positions visited since `begin_fill`, `None` outside a fill.
    fill: Option<Vec<DVec2>>,
}

impl<S: Surface> Turtle<S> {
    /// A turtle at the origin, heading +x, pen up, black pen and fill.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            pose: Pose::default(),
            pen_down: false,
            pen_color: Color::BLACK,
            fill_color: Color::BLACK,
            pen_width: 1.0,
            path: Vec::new(),
            fill: None,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Restore a previously captured pose. Breaks the current stroke: the
    /// jump itself is never drawn, regardless of pen state.
    pub fn set_pose(&mut self, pose: Pose) {
        self.flush_path();
        self.pose = Pose::new(pose.position, pose.heading);
        if let Some(fill) = &mut self.fill {
            fill.push(self.pose.position);
        }
    }

    /// Move `distance` units along the current heading. Draws when the pen
    /// is down; negative distances move backwards.
    pub fn forward(&mut self, distance: f64) {
        let target = self.pose.position + self.pose.direction() * distance;
        if self.pen_down {
            if self.path.is_empty() {
                self.path.push(self.pose.position);
            }
            self.path.push(target);
        }
        if let Some(fill) = &mut self.fill {
            fill.push(target);
        }
        self.pose.position = target;
    }

    pub fn turn_left(&mut self, degrees: f64) {
        self.pose.heading = normalize_heading(self.pose.heading + degrees);
    }

    pub fn turn_right(&mut self, degrees: f64) {
        self.pose.heading = normalize_heading(self.pose.heading - degrees);
    }

    pub fn pen_up(&mut self) {
        self.flush_path();
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Change the stroke color. Ends the current stroke, if any.
    pub fn set_pen_color(&mut self, color: Color) {
        if color != self.pen_color {
            self.flush_path();
            self.pen_color = color;
        }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_pen_width(&mut self, width: f64) {
        if width != self.pen_width {
            self.flush_path();
            self.pen_width = width;
        }
    }

    /// Start recording visited positions for a filled polygon.
    pub fn begin_fill(&mut self) {
        if self.fill.is_some() {
            log::warn!("begin_fill while a fill is already active; discarding the previous one");
        }
        self.fill = Some(vec![self.pose.position]);
    }

    /// Emit the polygon recorded since [`Turtle::begin_fill`].
    ///
    /// Degenerate fills (fewer than three vertices) are dropped silently,
    /// matching how an empty stroke is dropped.
    pub fn end_fill(&mut self) {
        if let Some(points) = self.fill.take() {
            if points.len() >= 3 {
                self.surface
                    .fill_polygon(&points, self.fill_color, self.pen_color);
            }
        } else {
            log::warn!("end_fill without a matching begin_fill");
        }
    }

    /// Flush buffered drawing and tell the surface the picture is complete.
    pub fn refresh(&mut self) {
        self.flush_path();
        self.surface.refresh();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the turtle, flushing any buffered stroke first.
    pub fn into_surface(mut self) -> S {
        self.flush_path();
        self.surface
    }

    fn flush_path(&mut self) {
        if self.path.len() >= 2 {
            self.surface
                .stroke_path(&self.path, self.pen_color, self.pen_width);
        }
        self.path.clear();
    }
}
