//! CLI for orgtree: build the interactive org chart once, or watch the
//! source description and rebuild on every change.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "orgtree", version, about = "Build an interactive management tree from an org YAML description")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the HTML artifact once
    Build(IoArgs),
    /// Build, then rebuild on every change to the org file
    Watch(IoArgs),
}

#[derive(Parser)]
struct IoArgs {
    /// Path to the org YAML description
    #[arg(long = "in", value_name = "PATH", default_value = "org/org.yaml")]
    input: PathBuf,

    /// Output HTML path
    #[arg(long = "out", value_name = "PATH", default_value = "output/tree.html")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "orgtree=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => orgtree::pipeline::build(&args.input, &args.output).map(|()| {
            println!("Wrote {} (open in a browser)", args.output.display());
        }),
        Commands::Watch(args) => orgtree::watch::watch(&args.input, &args.output),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
