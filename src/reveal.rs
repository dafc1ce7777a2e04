//! Scroll reveal: `animate-in` elements sit paused until they first scroll
//! into view.

use std::collections::BTreeSet;

use tracing::debug;

use crate::constants::*;
use crate::dom::{Document, NodeId};

const PAUSED: &str = "animation-play-state: paused";
const RUNNING: &str = "animation-play-state: running";

/// Visibility report for one observed element, as the host measured it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    /// Visible fraction of the element, 0.0 to 1.0.
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(target: NodeId, ratio: f32) -> Self {
        Self { target, ratio }
    }
}

#[derive(Debug, Default)]
pub struct RevealAnimator {
    observed: BTreeSet<NodeId>,
}

impl RevealAnimator {
    pub fn init(doc: &mut Document) -> Self {
        let observed: BTreeSet<NodeId> = doc
            .elements_by_class(doc.root(), REVEAL_CLASS)
            .into_iter()
            .collect();
        for node in &observed {
            doc.set_attribute(*node, "style", PAUSED);
        }
        debug!(count = observed.len(), "reveal animations paused");
        Self { observed }
    }

    pub fn observed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.observed.iter().copied()
    }

    pub fn observe(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) {
        for entry in entries {
            if entry.ratio >= REVEAL_THRESHOLD && self.observed.remove(&entry.target) {
                doc.set_attribute(entry.target, "style", RUNNING);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let root = doc.root();
        let nodes = (0..n)
            .map(|_| {
                let el = doc.create_element("div");
                doc.add_class(el, REVEAL_CLASS);
                doc.append_child(root, el);
                el
            })
            .collect();
        (doc, nodes)
    }

    #[test]
    fn starts_paused() {
        let (mut doc, nodes) = page(2);
        let reveal = RevealAnimator::init(&mut doc);
        assert_eq!(reveal.observed().count(), 2);
        for node in nodes {
            assert_eq!(doc.attribute(node, "style"), Some(PAUSED));
        }
    }

    #[test]
    fn runs_once_threshold_is_reached() {
        let (mut doc, nodes) = page(2);
        let mut reveal = RevealAnimator::init(&mut doc);

        reveal.observe(&mut doc, &[IntersectionEntry::new(nodes[0], 0.05)]);
        assert_eq!(doc.attribute(nodes[0], "style"), Some(PAUSED));

        reveal.observe(&mut doc, &[IntersectionEntry::new(nodes[0], 0.1)]);
        assert_eq!(doc.attribute(nodes[0], "style"), Some(RUNNING));
        assert_eq!(doc.attribute(nodes[1], "style"), Some(PAUSED));
    }

    #[test]
    fn never_pauses_again() {
        let (mut doc, nodes) = page(1);
        let mut reveal = RevealAnimator::init(&mut doc);
        reveal.observe(&mut doc, &[IntersectionEntry::new(nodes[0], 1.0)]);
        reveal.observe(&mut doc, &[IntersectionEntry::new(nodes[0], 0.0)]);
        assert_eq!(doc.attribute(nodes[0], "style"), Some(RUNNING));
        assert_eq!(reveal.observed().count(), 0);
    }

    #[test]
    fn ignores_unobserved_targets() {
        let (mut doc, _) = page(1);
        let stranger = doc.create_element("p");
        let mut reveal = RevealAnimator::init(&mut doc);
        reveal.observe(&mut doc, &[IntersectionEntry::new(stranger, 1.0)]);
        assert_eq!(doc.attribute(stranger, "style"), None);
    }
}
