//! The page as a whole: markup contract, "ready" initialization and the
//! single-threaded event loop every component is driven from.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info};

use crate::constants::*;
use crate::deck::{AutoAdvance, DeckInput, Key, SlideDeckController};
use crate::dom::{Document, NodeId};
use crate::grid::Grid;
use crate::nav::MobileNavHighlighter;
use crate::reveal::{IntersectionEntry, RevealAnimator};
use crate::scheduler::Scheduler;

/// Input the host feeds into the page.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Click(NodeId),
    /// Delivered to whatever element holds focus.
    KeyDown(Key),
    PointerEnter(NodeId),
    PointerLeave(NodeId),
    Focus(NodeId),
    Blur,
    /// Visibility of `animate-in` elements.
    Reveal(Vec<IntersectionEntry>),
    /// Visibility of the nav sections within the middle viewport band.
    Sections(Vec<IntersectionEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTask {
    Deck(AutoAdvance),
}

impl From<AutoAdvance> for PageTask {
    fn from(tick: AutoAdvance) -> Self {
        PageTask::Deck(tick)
    }
}

#[derive(Debug)]
pub struct Page {
    doc: Document,
    timers: Scheduler<PageTask>,
    queue: VecDeque<HostEvent>,
    deck: Option<SlideDeckController>,
    reveal: RevealAnimator,
    nav: Option<MobileNavHighlighter>,
    grid: Option<Grid>,
}

impl Page {
    pub fn ready(doc: Document) -> Self {
        Self::ready_with_seed(doc, GRID_SEED)
    }

    /// Runs every component's initialization against `doc`. Components whose
    /// markup is missing stay inert.
    pub fn ready_with_seed(mut doc: Document, seed: u32) -> Self {
        let mut timers = Scheduler::new();
        let deck = SlideDeckController::init(&mut doc, &mut timers);
        let reveal = RevealAnimator::init(&mut doc);
        let nav = MobileNavHighlighter::init(&doc);

        let grid = doc.get_element_by_id(GRID_ID).map(|container| {
            let grid = Grid::generate(seed);
            grid.render(&mut doc, container);
            grid
        });

        info!(
            deck = deck.as_ref().map(|d| d.len()),
            nav = nav.is_some(),
            grid = grid.is_some(),
            "page ready"
        );
        Self {
            doc,
            timers,
            queue: VecDeque::new(),
            deck,
            reveal,
            nav,
            grid,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn deck(&self) -> Option<&SlideDeckController> {
        self.deck.as_ref()
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }

    pub fn nav(&self) -> Option<&MobileNavHighlighter> {
        self.nav.as_ref()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn post(&mut self, event: HostEvent) {
        self.queue.push_back(event);
    }

    /// Handles queued events in order, then lets `dt` pass, firing timers
    /// one by one as the clock reaches them.
    pub fn pump(&mut self, dt: Duration) {
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event);
        }

        let until = self.timers.now() + dt;
        while let Some((id, task)) = self.timers.pop_due(until) {
            match task {
                PageTask::Deck(_) => self.with_deck(DeckInput::AutoAdvance(id)),
            }
        }
        self.timers.advance_to(until);
    }

    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::Click(target) => {
                self.focus_from(target);
                let dot = self
                    .deck
                    .as_ref()
                    .and_then(|deck| deck.indicator_for(&self.doc, target));
                if let Some(dot) = dot {
                    self.with_deck(DeckInput::IndicatorClick(dot));
                }
            }
            HostEvent::KeyDown(key) => {
                if self.deck_holds_focus() {
                    self.with_deck(DeckInput::KeyDown(key));
                }
            }
            HostEvent::PointerEnter(target) => {
                if self.is_deck(target) {
                    self.with_deck(DeckInput::PointerEnter);
                }
            }
            HostEvent::PointerLeave(target) => {
                if self.is_deck(target) {
                    self.with_deck(DeckInput::PointerLeave);
                }
            }
            HostEvent::Focus(target) => {
                self.doc.focus(target);
            }
            HostEvent::Blur => self.doc.blur(),
            HostEvent::Reveal(entries) => self.reveal.observe(&mut self.doc, &entries),
            HostEvent::Sections(entries) => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.observe(&mut self.doc, &entries);
                }
            }
        }
    }

    fn with_deck(&mut self, input: DeckInput) {
        if let Some(deck) = self.deck.as_mut() {
            deck.handle(input, &mut self.doc, &mut self.timers);
        }
    }

    fn is_deck(&self, node: NodeId) -> bool {
        self.deck.as_ref().is_some_and(|d| d.container() == node)
    }

    fn deck_holds_focus(&self) -> bool {
        match (self.deck.as_ref(), self.doc.focused()) {
            (Some(deck), Some(focused)) => self.doc.contains(deck.container(), focused),
            _ => false,
        }
    }

    /// Clicking moves focus to the nearest focusable element, or clears it.
    fn focus_from(&mut self, target: NodeId) {
        let focusable = self
            .doc
            .ancestors_inclusive(target)
            .find(|node| self.doc.is_focusable(*node));
        match focusable {
            Some(node) => {
                self.doc.focus(node);
            }
            None => {
                debug!(?target, "click outside focusable elements");
                self.doc.blur();
            }
        }
    }
}

/// Builds the page markup: nav, deck with one slide per caption, indicator
/// dots, the three content sections and the grid container.
pub fn build_document(captions: &[String]) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let nav = doc.create_element("nav");
    doc.add_class(nav, "mobile-nav");
    doc.append_child(root, nav);
    for section in NAV_SECTIONS {
        let item = doc.create_element("a");
        doc.add_class(item, NAV_ITEM_CLASS);
        doc.set_attribute(item, NAV_SECTION_ATTR, section);
        doc.set_attribute(item, "href", &format!("#{section}"));
        doc.set_text(item, section);
        doc.append_child(nav, item);
    }

    let deck = doc.create_element("section");
    doc.set_id(deck, DECK_ID);
    doc.append_child(root, deck);
    let controls = doc.create_element("div");
    doc.set_id(controls, CONTROLS_ID);
    doc.append_child(root, controls);

    for (i, caption) in captions.iter().enumerate() {
        let slide = doc.create_element("div");
        doc.add_class(slide, SLIDE_CLASS);
        doc.set_text(slide, caption);
        doc.append_child(deck, slide);

        let dot = doc.create_element("button");
        doc.add_class(dot, DOT_CLASS);
        doc.set_attribute(dot, TARGET_ATTR, &i.to_string());
        doc.set_attribute(dot, "aria-label", &format!("Slide {}", i + 1));
        doc.append_child(controls, dot);

        if i == 0 {
            doc.add_class(slide, ACTIVE_CLASS);
            doc.add_class(dot, ACTIVE_CLASS);
        }
    }

    for section in NAV_SECTIONS {
        let el = doc.create_element("section");
        doc.set_id(el, section);
        doc.append_child(root, el);

        let body = doc.create_element("div");
        doc.add_class(body, REVEAL_CLASS);
        doc.set_text(body, section);
        doc.append_child(el, body);

        if section == "projects" {
            let grid = doc.create_element("div");
            doc.set_id(grid, GRID_ID);
            doc.append_child(el, grid);
        }
    }

    doc
}
