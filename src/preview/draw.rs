//! Paints the page from its element tree. Nothing here looks at controller
//! state directly; what is visible is decided by the `active` and level
//! classes, the same way the stylesheet would.

use raylib::prelude::*;

use crate::constants::*;
use crate::deck::AutoplayState;
use crate::dom::NodeId;
use crate::grid::Level;
use crate::page::Page;
use crate::preview::layout::Layout;

const BACKGROUND: Color = Color { r: 0x14, g: 0x12, b: 0x1c, a: 255 };
const PANEL: Color = Color { r: 0x22, g: 0x1f, b: 0x2e, a: 255 };
const ACCENT: Color = Color { r: 0x5b, g: 0x4a, b: 0x8a, a: 255 };
const MUTED: Color = Color { r: 0x8a, g: 0x86, b: 0x99, a: 255 };
const LEVEL_COLORS: [Color; 5] = [
    Color { r: 0x2a, g: 0x27, b: 0x36, a: 255 },
    Color { r: 0x3d, g: 0x33, b: 0x5e, a: 255 },
    Color { r: 0x5b, g: 0x4a, b: 0x8a, a: 255 },
    Color { r: 0x84, g: 0x6d, b: 0xc4, a: 255 },
    Color { r: 0xb9, g: 0xa6, b: 0xf2, a: 255 },
];

pub fn draw_page(d: &mut RaylibDrawHandle, page: &Page, layout: &Layout, textures: &[Option<Texture2D>]) {
    d.clear_background(BACKGROUND);
    draw_nav(d, page, layout);
    draw_deck(d, page, layout, textures);
    draw_grid(d, page, layout);
}

fn draw_nav(d: &mut RaylibDrawHandle, page: &Page, layout: &Layout) {
    let doc = page.document();
    let items = doc.elements_by_class(doc.root(), NAV_ITEM_CLASS);
    for (i, item) in items.iter().enumerate() {
        let slot = layout.nav_slot(i, items.len());
        let color = if doc.has_class(*item, ACTIVE_CLASS) { Color::WHITE } else { MUTED };
        let label = doc.element(*item).and_then(|el| el.text()).unwrap_or_default();
        d.draw_text(label, slot.x as i32 + 8, slot.y as i32 + 6, 18, color);
    }
}

fn draw_deck(d: &mut RaylibDrawHandle, page: &Page, layout: &Layout, textures: &[Option<Texture2D>]) {
    let doc = page.document();
    let Some(deck) = page.deck() else {
        return;
    };

    d.draw_rectangle_rec(layout.deck, PANEL);
    let slides = doc.elements_by_class(deck.container(), SLIDE_CLASS);
    for (i, slide) in slides.iter().enumerate() {
        if !doc.has_class(*slide, ACTIVE_CLASS) {
            continue;
        }
        match textures.get(i).and_then(Option::as_ref) {
            Some(texture) => {
                let (w, h) = (texture.width() as f32, texture.height() as f32);
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, w, h),
                    layout.fit_in_deck(w, h),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                let caption = doc.element(*slide).and_then(|el| el.text()).unwrap_or_default();
                d.draw_text(
                    caption,
                    layout.deck.x as i32 + 24,
                    (layout.deck.y + layout.deck.height * 0.5) as i32,
                    32,
                    Color::WHITE,
                );
            }
        }
    }

    if doc.focused().is_some_and(|f| doc.contains(deck.container(), f)) {
        d.draw_rectangle_lines_ex(layout.deck, 2.0, ACCENT);
    }

    let status = match deck.state() {
        AutoplayState::Autoplaying => "autoplay",
        AutoplayState::Idle => "paused",
    };
    d.draw_text(
        &format!("{} / {}  {status}", deck.current() + 1, deck.len()),
        layout.deck.x as i32 + 8,
        (layout.deck.y + layout.deck.height) as i32 - 22,
        16,
        MUTED,
    );

    let dots = doc.elements_by_class(deck.controls(), DOT_CLASS);
    for (dot, centre) in dots.iter().zip(&layout.dots) {
        let (x, y) = (centre.x as i32, centre.y as i32);
        if doc.has_class(*dot, ACTIVE_CLASS) {
            d.draw_circle(x, y, layout.dot_radius, Color::WHITE);
        } else {
            d.draw_circle_lines(x, y, layout.dot_radius, MUTED);
        }
    }
}

fn draw_grid(d: &mut RaylibDrawHandle, page: &Page, layout: &Layout) {
    let doc = page.document();
    let Some(container) = doc.get_element_by_id(GRID_ID) else {
        return;
    };
    let children = |node: NodeId| doc.element(node).map(|el| el.children()).unwrap_or_default();
    for (r, row) in children(container).iter().enumerate() {
        for (c, cell) in children(*row).iter().enumerate() {
            let classes = doc.element(*cell).map(|el| el.classes()).unwrap_or_default();
            let level = Level::from_classes(classes);
            d.draw_rectangle_rec(layout.cell_rect(r, c), LEVEL_COLORS[usize::from(level.value())]);
        }
    }
}
