use anyhow::{Context, Result};
use droste_canvas::Turtle;
use droste_canvas::svg::SvgSurface;
use droste_engine::{DrawOptions, Shape, TransformSpec, draw};
use std::path::Path;

/// Run one top-level draw against a fresh SVG surface and save it.
pub fn render_svg<F: Shape<SvgSurface>>(
    mut shape: F,
    size: f64,
    transforms: &[TransformSpec],
    options: &DrawOptions,
    output: &Path,
) -> Result<()> {
    let mut turtle = Turtle::new(SvgSurface::new());
    draw(&mut turtle, &mut shape, size, transforms, options)?;
    let surface = turtle.into_surface();
    surface
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::debug!(
        "rendered {} elements to {}",
        surface.element_count(),
        output.display()
    );
    println!("Wrote {}", output.display());
    Ok(())
}
