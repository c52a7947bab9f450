//! CLI entry point for twig

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use twig::{
    JsonFormatter, OutputConfig, Result, TextFormatter, TraverseConfig, Traverser,
    parse_positionals, resolve_path,
};

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print a directory tree with icons and per-type counts")]
#[command(version)]
struct Args {
    /// Directory to display, or the depth when it is the only argument and numeric
    directory: Option<String>,

    /// Number of levels to list (default: 2)
    max_depth: Option<String>,

    /// Use [D]/[F] markers instead of emoji icons
    #[arg(long = "ascii")]
    ascii: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log traversal details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "twig=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let tokens: Vec<&str> = args
        .directory
        .iter()
        .chain(args.max_depth.iter())
        .map(String::as_str)
        .collect();
    let positionals = parse_positionals(&tokens)?;
    let root = resolve_path(&positionals.directory)?;
    tracing::debug!(root = %root.display(), max_depth = positionals.max_depth, "starting walk");

    let traverser = Traverser::new(TraverseConfig {
        max_depth: positionals.max_depth,
    });

    if args.json {
        traverser.walk(&root, &mut JsonFormatter::stdout())?;
    } else {
        let config = if args.ascii {
            OutputConfig::ascii()
        } else {
            OutputConfig::default()
        };
        traverser.walk(&root, &mut TextFormatter::stdout(config))?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("twig: {}", e);
        process::exit(1);
    }
}
