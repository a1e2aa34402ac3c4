use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use droste_canvas::Color;
use droste_engine::{DrawOptions, TransformSpec};
use droste_shapes::{DiamondOutline, FilledSquare, Palette, SquareOutline, TriangleOutline};
use std::fs;
use std::path::PathBuf;

use crate::output::render_svg;

#[derive(Args)]
pub struct RenderArgs {
    /// Shape primitive to recurse on
    #[arg(long, value_enum, default_value_t = ShapeKind::Square)]
    shape: ShapeKind,

    /// Starting size in pixels
    #[arg(long, default_value_t = 350.0)]
    size: f64,

    /// JSON file holding the transform list, e.g. [{"size": 0.8, "x": 0.2}]
    #[arg(long)]
    transforms: PathBuf,

    /// Comma-separated palette for filled shapes (names or #rrggbb)
    #[arg(long, default_value = "red,black")]
    colors: String,

    /// Cap on recursion depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Cap on the projected number of shape-draw calls
    #[arg(long)]
    max_calls: Option<u64>,

    /// Smallest size still drawn
    #[arg(long)]
    min_size: Option<f64>,

    /// Output SVG file
    #[arg(short, long, default_value = "droste.svg")]
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeKind {
    Square,
    Triangle,
    Diamond,
    FilledSquare,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let data = fs::read_to_string(&args.transforms)
        .with_context(|| format!("Failed to read {}", args.transforms.display()))?;
    let transforms: Vec<TransformSpec> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", args.transforms.display()))?;

    let mut options = DrawOptions::default();
    if let Some(depth) = args.max_depth {
        options.max_iteration_depth = depth;
    }
    if let Some(calls) = args.max_calls {
        options.max_function_calls = calls;
    }
    if let Some(min_size) = args.min_size {
        options.min_size = min_size;
    }

    match args.shape {
        ShapeKind::Square => {
            render_svg(SquareOutline, args.size, &transforms, &options, &args.output)
        }
        ShapeKind::Triangle => render_svg(
            TriangleOutline,
            args.size,
            &transforms,
            &options,
            &args.output,
        ),
        ShapeKind::Diamond => render_svg(
            DiamondOutline,
            args.size,
            &transforms,
            &options,
            &args.output,
        ),
        ShapeKind::FilledSquare => {
            let colors = parse_palette(&args.colors)?;
            render_svg(
                FilledSquare::new(Palette::new(colors)),
                args.size,
                &transforms,
                &options,
                &args.output,
            )
        }
    }
}

fn parse_palette(spec: &str) -> Result<Vec<Color>> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Color>().map_err(Into::into))
        .collect()
}
