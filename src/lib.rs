//! Behavior layer of a personal site's front page: the autoplaying slide
//! deck, scroll reveal, mobile nav highlighting and the seeded contribution
//! grid, plus a raylib window that hosts them and the static image assets
//! the page links to.

pub mod assets;
pub mod config;
pub mod constants;
pub mod deck;
pub mod dom;
pub mod error;
pub mod grid;
pub mod nav;
pub mod page;
pub mod preview;
pub mod reveal;
pub mod scheduler;
