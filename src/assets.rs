//! Static images the page links to: the apple-touch-icon rendered from the
//! favicon, and Open Graph images re-encoded as PNG.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::info;

use crate::config::{AssetsArgs, OgCopy};
use crate::constants::*;
use crate::error::AssetError;

pub fn load_svg(path: &Path) -> Result<Tree, AssetError> {
    let data = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Tree::from_data(&data, &Options::default()).map_err(|source| AssetError::Svg {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `tree` into a `size` square, scaled to cover it and centred.
pub fn rasterize(tree: &Tree, size: u32) -> Result<Pixmap, AssetError> {
    let mut pixmap = Pixmap::new(size, size).ok_or(AssetError::Size(size))?;
    let (w, h) = (tree.size().width(), tree.size().height());
    let edge = size as f32;
    let scale = (edge / w).max(edge / h);
    let (dx, dy) = ((edge - w * scale) / 2.0, (edge - h * scale) / 2.0);
    resvg::render(
        tree,
        Transform::from_row(scale, 0.0, 0.0, scale, dx, dy),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Composites the (premultiplied) pixmap over an opaque background.
pub fn flatten(pixmap: &Pixmap, background: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let Some(px) = pixmap.pixel(x, y) else {
            return Rgb(background);
        };
        let under = 255 - u16::from(px.alpha());
        let mix = |src: u8, bg: u8| (u16::from(src) + (u16::from(bg) * under + 127) / 255) as u8;
        Rgb([
            mix(px.red(), background[0]),
            mix(px.green(), background[1]),
            mix(px.blue(), background[2]),
        ])
    })
}

/// Writes the touch icon for `favicon` into `out` and returns its path.
pub fn write_touch_icon(favicon: &Path, out: &Path) -> Result<PathBuf, AssetError> {
    let tree = load_svg(favicon)?;
    let icon = flatten(&rasterize(&tree, TOUCH_ICON_SIZE)?, TOUCH_ICON_BACKGROUND);
    let dest = out.join(TOUCH_ICON_FILE);
    icon.save_with_format(&dest, ImageFormat::Png)
        .map_err(|source| AssetError::Image {
            path: dest.clone(),
            source,
        })?;
    info!(path = %dest.display(), size = TOUCH_ICON_SIZE, "wrote touch icon");
    Ok(dest)
}

/// Decodes any supported image and writes it back out as PNG.
pub fn copy_as_png(source: &Path, dest: &Path) -> Result<(), AssetError> {
    let decoded = image::open(source).map_err(|e| AssetError::Image {
        path: source.to_path_buf(),
        source: e,
    })?;
    decoded
        .save_with_format(dest, ImageFormat::Png)
        .map_err(|e| AssetError::Image {
            path: dest.to_path_buf(),
            source: e,
        })
}

/// Produces every asset into `args.out`, creating it if needed.
pub fn generate(args: &AssetsArgs) -> Result<Vec<PathBuf>, AssetError> {
    fs::create_dir_all(&args.out).map_err(|source| AssetError::Write {
        path: args.out.clone(),
        source,
    })?;

    let mut written = vec![write_touch_icon(&args.favicon, &args.out)?];
    for OgCopy { name, source } in &args.og {
        let dest = args.out.join(name);
        copy_as_png(source, &dest)?;
        info!(from = %source.display(), to = %dest.display(), "copied og image");
        written.push(dest);
    }
    Ok(written)
}
