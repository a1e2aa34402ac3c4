use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod demo;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "droste")]
#[command(about = "Recursive (Droste effect) drawing tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a built-in demo scene
    #[command(alias = "d")]
    Demo(demo::DemoArgs),

    /// Draw a shape with transforms loaded from a JSON file
    #[command(alias = "r")]
    Render(render::RenderArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default log level depends on --debug; RUST_LOG overrides both.
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Demo(args) => demo::execute(args),
        Commands::Render(args) => render::execute(args),
    }
}
