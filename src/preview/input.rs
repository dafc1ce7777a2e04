use raylib::prelude::*;

use crate::deck::Key;
use crate::dom::NodeId;
use crate::page::HostEvent;
use crate::preview::layout::Layout;

pub const ARROW_KEYS: [(KeyboardKey, &str); 4] = [
    (KeyboardKey::KEY_RIGHT, "ArrowRight"),
    (KeyboardKey::KEY_DOWN, "ArrowDown"),
    (KeyboardKey::KEY_LEFT, "ArrowLeft"),
    (KeyboardKey::KEY_UP, "ArrowUp"),
];

/// Turns per-frame "is the pointer over the deck" samples into enter/leave
/// edges.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    pub fn update(&mut self, inside: bool, deck: NodeId) -> Option<HostEvent> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            HostEvent::PointerEnter(deck)
        } else {
            HostEvent::PointerLeave(deck)
        })
    }
}

/// Element a click at `p` lands on: a dot, the deck, or the page body.
pub fn click_target(layout: &Layout, p: Vector2, deck: NodeId, dots: &[NodeId], body: NodeId) -> NodeId {
    if let Some(dot) = layout.dot_at(p).and_then(|i| dots.get(i)) {
        *dot
    } else if layout.in_deck(p) {
        deck
    } else {
        body
    }
}

/// Host events for this frame's raylib input.
pub fn poll(
    rl: &RaylibHandle,
    layout: &Layout,
    pointer: &mut PointerTracker,
    deck: NodeId,
    dots: &[NodeId],
    body: NodeId,
) -> Vec<HostEvent> {
    let mut events = Vec::new();
    let mouse = rl.get_mouse_position();

    if let Some(edge) = pointer.update(layout.in_deck(mouse), deck) {
        events.push(edge);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(HostEvent::Click(click_target(layout, mouse, deck, dots, body)));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
        events.push(HostEvent::Focus(deck));
    }
    for (key, name) in ARROW_KEYS {
        if rl.is_key_pressed(key) {
            events.push(HostEvent::KeyDown(Key::from_name(name)));
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn pointer_reports_edges_only() {
        let mut doc = Document::new();
        let deck = doc.create_element("section");
        let mut pointer = PointerTracker::default();
        assert_eq!(pointer.update(false, deck), None);
        assert_eq!(pointer.update(true, deck), Some(HostEvent::PointerEnter(deck)));
        assert_eq!(pointer.update(true, deck), None);
        assert_eq!(pointer.update(false, deck), Some(HostEvent::PointerLeave(deck)));
    }

    #[test]
    fn clicks_resolve_to_dots_then_deck_then_body() {
        let mut doc = Document::new();
        let deck = doc.create_element("section");
        let dots: Vec<NodeId> = (0..3).map(|_| doc.create_element("button")).collect();
        let body = doc.root();
        let layout = Layout::compute(1280.0, 720.0, dots.len());

        assert_eq!(click_target(&layout, layout.dots[2], deck, &dots, body), dots[2]);
        let inside = Vector2::new(layout.deck.x + 5.0, layout.deck.y + 5.0);
        assert_eq!(click_target(&layout, inside, deck, &dots, body), deck);
        assert_eq!(click_target(&layout, Vector2::new(0.0, 719.0), deck, &dots, body), body);
    }
}
