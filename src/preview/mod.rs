//! Desktop host for the page: a raylib window feeding input into [`Page`]
//! and painting the result every frame.

pub mod draw;
pub mod input;
pub mod layout;
pub mod texture_loader;

use std::time::Duration;

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::config::PreviewArgs;
use crate::constants::*;
use crate::page::{build_document, HostEvent, Page};
use crate::reveal::IntersectionEntry;
use input::PointerTracker;
use layout::Layout;
use texture_loader::{caption_for, load_sorted_image_paths, load_texture_with_exif_rotation};

pub fn run(args: &PreviewArgs) -> Result<()> {
    let paths = load_sorted_image_paths(&args.dir)
        .with_context(|| format!("loading slides from {}", args.dir.display()))?;
    info!(dir = %args.dir.display(), slides = paths.len(), "starting preview");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("sitedeck preview")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // A slide whose image fails to load still shows its caption.
    let textures: Vec<Option<Texture2D>> = paths
        .iter()
        .map(|path| match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!(error = %e, "showing caption instead of image");
                None
            }
        })
        .collect();
    let captions: Vec<String> = paths.iter().map(|p| caption_for(p)).collect();

    let mut page = Page::ready(build_document(&captions));
    let deck = page.deck().context("page has no slide deck")?;
    let (container, controls) = (deck.container(), deck.controls());
    let dots = page.document().elements_by_class(controls, DOT_CLASS);
    let body = page.document().root();

    // Everything in the window is on screen from the first frame, and the
    // grid sits in the projects section.
    let revealed = page
        .reveal()
        .observed()
        .map(|node| IntersectionEntry::new(node, 1.0))
        .collect();
    page.post(HostEvent::Reveal(revealed));
    if let Some(projects) = page.document().get_element_by_id("projects") {
        page.post(HostEvent::Sections(vec![IntersectionEntry::new(projects, 1.0)]));
    }

    let mut pointer = PointerTracker::default();
    while !rl.window_should_close() {
        let layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            dots.len(),
        );
        for event in input::poll(&rl, &layout, &mut pointer, container, &dots, body) {
            page.post(event);
        }
        page.pump(Duration::from_secs_f32(rl.get_frame_time().max(0.0)));

        let mut d = rl.begin_drawing(&thread);
        draw::draw_page(&mut d, &page, &layout, &textures);
    }

    info!(elapsed = ?page.now(), "preview closed");
    Ok(())
}
