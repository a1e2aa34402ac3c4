//! SVG render surface.
//!
//! Elements are accumulated while drawing and serialized on
//! [`SvgSurface::write_to`] / [`SvgSurface::save`], with a viewBox computed
//! from the drawing's bounds. Turtle coordinates are y-up; SVG is y-down, so
//! y is negated at write time.

use crate::{Color, Surface};
use glam::DVec2;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Whitespace added around the drawing's bounding box, in drawing units.
const MARGIN: f64 = 10.0;

#[derive(Debug, Clone)]
enum Element {
    Path {
        points: Vec<DVec2>,
        color: Color,
        width: f64,
    },
    Polygon {
        points: Vec<DVec2>,
        fill: Color,
        stroke: Color,
    },
}

impl Element {
    fn points(&self) -> &[DVec2] {
        match self {
            Element::Path { points, .. } => points,
            Element::Polygon { points, .. } => points,
        }
    }
}

#[derive(Debug, Default)]
pub struct SvgSurface {
    elements: Vec<Element>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Bounding box over every recorded point, in turtle (y-up) coordinates.
    fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut min = DVec2::MAX;
        let mut max = DVec2::MIN;
        let mut any = false;
        for element in &self.elements {
            for p in element.points() {
                min = min.min(*p);
                max = max.max(*p);
                any = true;
            }
        }
        any.then_some((min, max))
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        // Fall back to a unit viewport for an empty drawing.
        let (min, max) = self.bounds().unwrap_or((DVec2::ZERO, DVec2::ONE));
        // y-flip swaps and negates the vertical bounds.
        let x = min.x - MARGIN;
        let y = -max.y - MARGIN;
        let width = (max.x - min.x) + 2.0 * MARGIN;
        let height = (max.y - min.y) + 2.0 * MARGIN;

        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{x:.2} {y:.2} {width:.2} {height:.2}">"#
        )?;
        for element in &self.elements {
            match element {
                Element::Path {
                    points,
                    color,
                    width,
                } => {
                    writeln!(
                        w,
                        r#"  <polyline points="{}" fill="none" stroke="{color}" stroke-width="{width}"/>"#,
                        format_points(points)
                    )?;
                }
                Element::Polygon {
                    points,
                    fill,
                    stroke,
                } => {
                    writeln!(
                        w,
                        r#"  <polygon points="{}" fill="{fill}" stroke="{stroke}"/>"#,
                        format_points(points)
                    )?;
                }
            }
        }
        writeln!(w, "</svg>")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w)?;
        w.flush()
    }
}

fn format_points(points: &[DVec2]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Negate y: turtle coordinates are y-up.
        out.push_str(&format!("{:.2},{:.2}", p.x, -p.y));
    }
    out
}

impl Surface for SvgSurface {
    fn stroke_path(&mut self, points: &[DVec2], color: Color, width: f64) {
        self.elements.push(Element::Path {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[DVec2], fill: Color, stroke: Color) {
        self.elements.push(Element::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }
}
