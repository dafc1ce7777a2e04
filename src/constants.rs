use std::time::Duration;

// --- Preview window ---
pub const RENDER_WIDTH: i32 = 1280;          // Default window width
pub const RENDER_HEIGHT: i32 = 720;          // Default window height
pub const FPS: u32 = 60;                     // Frames per second

// --- Slide deck ---
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(5000);
pub const DECK_ID: &str = "slideDeck";
pub const CONTROLS_ID: &str = "slideControls";
pub const SLIDE_CLASS: &str = "slide";
pub const DOT_CLASS: &str = "slide-dot";
pub const TARGET_ATTR: &str = "data-target";
pub const ACTIVE_CLASS: &str = "active";

// --- Reveal animations ---
pub const REVEAL_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f32 = 0.1;       // Visible fraction that starts the animation

// --- Mobile nav ---
pub const NAV_ITEM_CLASS: &str = "mobile-nav-item";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const NAV_SECTIONS: [&str; 3] = ["writing", "projects", "connect"];

// --- Contribution grid ---
pub const GRID_ID: &str = "contribGrid";
pub const GRID_ROW_CLASS: &str = "contrib-row";
pub const GRID_CELL_CLASS: &str = "contrib-cell";
pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 26;
pub const GRID_SEED: u32 = 42;
pub const LEVEL_THRESHOLDS: [f64; 4] = [0.35, 0.55, 0.72, 0.88]; // Lower cut of levels 1..=4

// --- Static assets ---
pub const TOUCH_ICON_SIZE: u32 = 180;        // apple-touch-icon edge in pixels
pub const TOUCH_ICON_BACKGROUND: [u8; 3] = [0x5b, 0x4a, 0x8a];
pub const TOUCH_ICON_FILE: &str = "apple-touch-icon.png";
