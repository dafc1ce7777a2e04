use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constants::*;

#[derive(Debug, Parser)]
#[command(name = "sitedeck", version, about = "Slide deck and contribution grid for the home page")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "SITEDECK_LOG", default_value = "info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a window running the page with one slide per image
    Preview(PreviewArgs),
    /// Print the contribution grid levels
    Grid(GridArgs),
    /// Print the page markup after initialization
    Dump(DumpArgs),
    /// Render the touch icon and copy Open Graph images into the site
    Assets(AssetsArgs),
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Directory holding the slide images
    pub dir: PathBuf,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

#[derive(Debug, Args)]
pub struct GridArgs {
    #[arg(long, default_value_t = GRID_SEED)]
    pub seed: u32,
}

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Number of placeholder slides when no directory is given
    #[arg(long, default_value_t = 3)]
    pub slides: usize,

    /// Name slides after the images in this directory instead
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AssetsArgs {
    /// SVG favicon the touch icon is rendered from
    #[arg(long, default_value = "public/favicon.svg")]
    pub favicon: PathBuf,

    /// Directory the generated files are written to
    #[arg(long, default_value = "public")]
    pub out: PathBuf,

    /// Image to re-encode as PNG into the output directory, as NAME=SOURCE
    #[arg(long = "og", value_name = "NAME=SOURCE", value_parser = parse_og_copy)]
    pub og: Vec<OgCopy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgCopy {
    pub name: String,
    pub source: PathBuf,
}

fn parse_og_copy(raw: &str) -> Result<OgCopy, String> {
    let (name, source) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=SOURCE, got {raw:?}"))?;
    if name.is_empty() || source.is_empty() {
        return Err(format!("expected NAME=SOURCE, got {raw:?}"));
    }
    if name.contains(['/', '\\']) {
        return Err(format!("output name must be a bare file name, got {name:?}"));
    }
    Ok(OgCopy {
        name: name.to_string(),
        source: PathBuf::from(source),
    })
}
