use anyhow::{Result, bail};
use clap::Args;
use droste_canvas::Color;
use droste_engine::{DrawOptions, TransformSpec};
use droste_shapes::{FilledSquare, Palette, SquareOutline, TriangleOutline};
use std::path::PathBuf;

use crate::output::render_svg;

#[derive(Args)]
pub struct DemoArgs {
    /// Demo to draw (see --list)
    name: Option<String>,

    /// List the available demos
    #[arg(long)]
    list: bool,

    /// Output SVG file
    #[arg(short, long, default_value = "droste.svg")]
    output: PathBuf,
}

const DEMOS: &[(&str, &str)] = &[
    ("squares", "nested concentric squares"),
    ("spiral", "nested squares sliding off to one side"),
    ("quad", "four half-size copies, one per corner"),
    ("triangle-spiral", "triangles rotating as they shrink"),
    ("filled-spiral", "rotating filled squares in two colors"),
];

pub fn execute(args: DemoArgs) -> Result<()> {
    if args.list {
        for (name, description) in DEMOS {
            println!("{name:<16} {description}");
        }
        return Ok(());
    }
    let Some(name) = args.name.as_deref() else {
        bail!("missing demo name (try --list)");
    };

    let spiral = TransformSpec {
        size: 0.8,
        y: 0.2,
        angle: 10.0,
        ..TransformSpec::default()
    };

    match name {
        "squares" => render_svg(
            SquareOutline,
            350.0,
            &[TransformSpec::scaled(0.8)],
            &DrawOptions::default(),
            &args.output,
        ),
        "spiral" => render_svg(
            SquareOutline,
            350.0,
            &[TransformSpec {
                size: 0.8,
                x: 0.2,
                ..TransformSpec::default()
            }],
            &DrawOptions::default(),
            &args.output,
        ),
        "quad" => {
            let mut corners = Vec::new();
            for (x, y) in [(-0.5, 0.5), (0.5, 0.5), (-0.5, -0.5), (0.5, -0.5)] {
                corners.push(TransformSpec {
                    size: 0.5,
                    x,
                    y,
                    ..TransformSpec::default()
                });
            }
            render_svg(
                SquareOutline,
                350.0,
                &corners,
                &DrawOptions::default(),
                &args.output,
            )
        }
        "triangle-spiral" => render_svg(
            TriangleOutline,
            350.0,
            &[spiral],
            &DrawOptions::default(),
            &args.output,
        ),
        "filled-spiral" => render_svg(
            FilledSquare::new(Palette::new(vec![Color::RED, Color::BLACK])),
            350.0,
            &[spiral],
            &DrawOptions {
                max_iteration_depth: 20,
                ..DrawOptions::default()
            },
            &args.output,
        ),
        other => bail!("unknown demo '{other}' (try --list)"),
    }
}
