//! Mobile nav highlighter: marks the nav item of the first section that is
//! currently in the middle band of the viewport.

use std::collections::BTreeSet;

use tracing::debug;

use crate::constants::*;
use crate::dom::{Document, NodeId};
use crate::reveal::IntersectionEntry;

#[derive(Debug)]
pub struct MobileNavHighlighter {
    items: Vec<NodeId>,
    /// Observed sections in priority order.
    sections: Vec<(&'static str, NodeId)>,
    visible: BTreeSet<&'static str>,
}

impl MobileNavHighlighter {
    /// `None` when the page has no mobile nav.
    pub fn init(doc: &Document) -> Option<Self> {
        let items = doc.elements_by_class(doc.root(), NAV_ITEM_CLASS);
        if items.is_empty() {
            return None;
        }
        let sections: Vec<_> = NAV_SECTIONS
            .iter()
            .filter_map(|id| doc.get_element_by_id(id).map(|node| (*id, node)))
            .collect();
        debug!(items = items.len(), sections = sections.len(), "mobile nav ready");
        Some(Self {
            items,
            sections,
            visible: BTreeSet::new(),
        })
    }

    pub fn observed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.sections.iter().map(|(_, node)| *node)
    }

    /// Section id whose nav item is highlighted, if any.
    pub fn active_section(&self) -> Option<&'static str> {
        self.sections
            .iter()
            .map(|(id, _)| *id)
            .find(|id| self.visible.contains(id))
    }

    pub fn observe(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) {
        for entry in entries {
            let Some(&(id, _)) = self.sections.iter().find(|(_, node)| *node == entry.target) else {
                continue;
            };
            if entry.ratio > 0.0 {
                self.visible.insert(id);
            } else {
                self.visible.remove(id);
            }
        }

        for item in &self.items {
            doc.remove_class(*item, ACTIVE_CLASS);
        }
        let Some(section) = self.active_section() else {
            return;
        };
        if let Some(item) = self
            .items
            .iter()
            .find(|item| doc.attribute(**item, NAV_SECTION_ATTR) == Some(section))
        {
            doc.add_class(*item, ACTIVE_CLASS);
        }
    }
}
