use raylib::prelude::*;

use crate::constants::{GRID_COLS, GRID_ROWS};

const MARGIN: f32 = 32.0;
const NAV_HEIGHT: f32 = 28.0;
const DOT_RADIUS: f32 = 7.0;
const DOT_SPACING: f32 = 28.0;
const CELL_GAP: f32 = 4.0;
const MAX_CELL: f32 = 16.0;

/// Screen placement of everything the preview draws, recomputed per frame
/// so the window can be resized.
#[derive(Debug, Clone)]
pub struct Layout {
    pub nav: Rectangle,
    pub deck: Rectangle,
    pub dots: Vec<Vector2>,
    pub dot_radius: f32,
    pub grid_origin: Vector2,
    pub cell: f32,
}

fn contains(r: &Rectangle, p: Vector2) -> bool {
    p.x >= r.x && p.x < r.x + r.width && p.y >= r.y && p.y < r.y + r.height
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, dot_count: usize) -> Self {
        let inner_width = (screen_width - 2.0 * MARGIN).max(1.0);
        let nav = Rectangle::new(MARGIN, MARGIN * 0.5, inner_width, NAV_HEIGHT);

        let deck_top = nav.y + nav.height + MARGIN * 0.5;
        let deck = Rectangle::new(MARGIN, deck_top, inner_width, (screen_height * 0.55).max(1.0));

        let dots_y = deck.y + deck.height + DOT_SPACING;
        let dots_width = DOT_SPACING * dot_count.saturating_sub(1) as f32;
        let first_x = screen_width * 0.5 - dots_width * 0.5;
        let dots = (0..dot_count)
            .map(|i| Vector2::new(first_x + DOT_SPACING * i as f32, dots_y))
            .collect();

        let grid_top = dots_y + DOT_SPACING;
        let by_width = inner_width / GRID_COLS as f32 - CELL_GAP;
        let by_height = (screen_height - grid_top - MARGIN) / GRID_ROWS as f32 - CELL_GAP;
        let cell = by_width.min(by_height).clamp(2.0, MAX_CELL);
        let grid_width = GRID_COLS as f32 * (cell + CELL_GAP) - CELL_GAP;
        let grid_origin = Vector2::new(screen_width * 0.5 - grid_width * 0.5, grid_top);

        Self {
            nav,
            deck,
            dots,
            dot_radius: DOT_RADIUS,
            grid_origin,
            cell,
        }
    }

    pub fn in_deck(&self, p: Vector2) -> bool {
        contains(&self.deck, p)
    }

    /// Index of the dot under `p`. The hit area is a bit wider than the dot.
    pub fn dot_at(&self, p: Vector2) -> Option<usize> {
        let reach = self.dot_radius * 1.5;
        self.dots.iter().position(|c| {
            let (dx, dy) = (p.x - c.x, p.y - c.y);
            dx * dx + dy * dy <= reach * reach
        })
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rectangle {
        Rectangle::new(
            self.grid_origin.x + col as f32 * (self.cell + CELL_GAP),
            self.grid_origin.y + row as f32 * (self.cell + CELL_GAP),
            self.cell,
            self.cell,
        )
    }

    /// `index`-th of `count` equal slots across the nav bar.
    pub fn nav_slot(&self, index: usize, count: usize) -> Rectangle {
        let width = self.nav.width / count.max(1) as f32;
        Rectangle::new(self.nav.x + width * index as f32, self.nav.y, width, self.nav.height)
    }

    /// `width` x `height` scaled to fit the deck, centered.
    pub fn fit_in_deck(&self, width: f32, height: f32) -> Rectangle {
        let scale = (self.deck.width / width).min(self.deck.height / height);
        let (w, h) = (width * scale, height * scale);
        Rectangle::new(
            self.deck.x + (self.deck.width - w) * 0.5,
            self.deck.y + (self.deck.height - h) * 0.5,
            w,
            h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_centered_under_the_deck() {
        let layout = Layout::compute(1280.0, 720.0, 3);
        assert_eq!(layout.dots.len(), 3);
        assert_eq!(layout.dots[1].x, 640.0);
        assert!(layout.dots.iter().all(|d| d.y > layout.deck.y + layout.deck.height));
    }

    #[test]
    fn hit_testing() {
        let layout = Layout::compute(1280.0, 720.0, 3);
        let centre = Vector2::new(640.0, layout.deck.y + 10.0);
        assert!(layout.in_deck(centre));
        assert!(!layout.in_deck(Vector2::new(2.0, 2.0)));

        let second = layout.dots[1];
        assert_eq!(layout.dot_at(second), Some(1));
        assert_eq!(layout.dot_at(Vector2::new(second.x + 3.0, second.y - 3.0)), Some(1));
        assert_eq!(layout.dot_at(Vector2::new(second.x, second.y + 40.0)), None);
    }

    #[test]
    fn grid_fits_the_window() {
        let layout = Layout::compute(1280.0, 720.0, 3);
        let last = layout.cell_rect(GRID_ROWS - 1, GRID_COLS - 1);
        assert!(last.x + last.width <= 1280.0);
        assert!(last.y + last.height <= 720.0);
        assert!(layout.cell_rect(0, 0).y > layout.dots[0].y);
    }

    #[test]
    fn fit_keeps_aspect_ratio() {
        let layout = Layout::compute(1280.0, 720.0, 1);
        let r = layout.fit_in_deck(400.0, 400.0);
        assert!((r.width - r.height).abs() < 1e-3);
        assert!(r.height <= layout.deck.height + 1e-3);
        assert!((r.x + r.width * 0.5 - 640.0).abs() < 1e-3);
    }
}
