use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitedeck::assets;
use sitedeck::config::{Cli, Command, DumpArgs, GridArgs};
use sitedeck::grid::Grid;
use sitedeck::page::{build_document, Page};
use sitedeck::preview;
use sitedeck::preview::texture_loader::{caption_for, load_sorted_image_paths};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Preview(args) => preview::run(&args),
        Command::Grid(args) => print_grid(&args),
        Command::Dump(args) => dump(&args),
        Command::Assets(args) => {
            for path in assets::generate(&args)? {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn print_grid(args: &GridArgs) -> Result<()> {
    print!("{}", Grid::generate(args.seed));
    Ok(())
}

fn dump(args: &DumpArgs) -> Result<()> {
    let captions: Vec<String> = match &args.dir {
        Some(dir) => load_sorted_image_paths(dir)
            .with_context(|| format!("loading slides from {}", dir.display()))?
            .iter()
            .map(|p| caption_for(p))
            .collect(),
        None => (1..=args.slides).map(|i| format!("Slide {i}")).collect(),
    };

    let page = Page::ready(build_document(&captions));
    print!("{}", page.document().to_html());
    Ok(())
}
