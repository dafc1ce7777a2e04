//! The autoplaying slide deck: slide panels, their indicator dots and the
//! timer that walks through them.

pub mod controller;
pub mod input;
pub mod pairs;
pub mod state;

pub use controller::SlideDeckController;
pub use input::{AutoAdvance, DeckInput, Key};
pub use state::AutoplayState;
