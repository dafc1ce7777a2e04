use tracing::debug;

use crate::constants::*;
use crate::deck::input::{parse_index, AutoAdvance, DeckInput, Step};
use crate::deck::pairs::Deck;
use crate::deck::state::AutoplayState;
use crate::dom::{Document, NodeId};
use crate::scheduler::{Scheduler, TimerId};

/// Drives the page's single slide deck.
///
/// Clicks, arrow keys and the autoplay timer all end up in [`Self::go_to`];
/// explicit navigation is always wrapped in stop / move / restart so the
/// period starts over after the user acts.
#[derive(Debug)]
pub struct SlideDeckController {
    container: NodeId,
    controls: NodeId,
    deck: Deck,
    /// Every dot under the controls, paired or not.
    indicators: Vec<NodeId>,
    timer: Option<TimerId>,
}

impl SlideDeckController {
    /// Finds the deck and its controls in `doc` and starts autoplay.
    ///
    /// A missing container, missing controls or an empty side leaves the
    /// page untouched and returns `None`.
    pub fn init<T>(doc: &mut Document, timers: &mut Scheduler<T>) -> Option<Self>
    where
        T: Clone + From<AutoAdvance>,
    {
        let (Some(container), Some(controls)) = (
            doc.get_element_by_id(DECK_ID),
            doc.get_element_by_id(CONTROLS_ID),
        ) else {
            debug!("slide deck markup not found, skipping");
            return None;
        };

        let slides = doc.elements_by_class(container, SLIDE_CLASS);
        let dots = doc.elements_by_class(controls, DOT_CLASS);
        let Some(deck) = Deck::pair(&slides, &dots) else {
            debug!(slides = slides.len(), dots = dots.len(), "slide deck is empty, skipping");
            return None;
        };

        // Whatever the markup pre-marked, start from exactly pair 0.
        for node in slides.iter().chain(&dots) {
            doc.remove_class(*node, ACTIVE_CLASS);
        }
        let first = deck.current_pair();
        doc.add_class(first.slide, ACTIVE_CLASS);
        doc.add_class(first.dot, ACTIVE_CLASS);
        doc.set_attribute(container, "tabindex", "0");

        let mut controller = Self {
            container,
            controls,
            deck,
            indicators: dots,
            timer: None,
        };
        controller.start_autoplay(timers);
        Some(controller)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn controls(&self) -> NodeId {
        self.controls
    }

    pub fn current(&self) -> usize {
        self.deck.current()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn state(&self) -> AutoplayState {
        match self.timer {
            Some(_) => AutoplayState::Autoplaying,
            None => AutoplayState::Idle,
        }
    }

    /// Activates pair `index`. Out of range requests are dropped.
    pub fn go_to(&mut self, doc: &mut Document, index: usize) -> bool {
        let Some((left, entered)) = self.deck.go_to(index) else {
            debug!(index, len = self.deck.len(), "ignoring out of range slide");
            return false;
        };
        doc.remove_class(left.slide, ACTIVE_CLASS);
        doc.remove_class(left.dot, ACTIVE_CLASS);
        doc.add_class(entered.slide, ACTIVE_CLASS);
        doc.add_class(entered.dot, ACTIVE_CLASS);
        true
    }

    pub fn next(&mut self, doc: &mut Document) {
        let index = self.deck.next_index();
        self.go_to(doc, index);
    }

    pub fn previous(&mut self, doc: &mut Document) {
        let index = self.deck.previous_index();
        self.go_to(doc, index);
    }

    /// Schedules the periodic advance, replacing any pending one.
    pub fn start_autoplay<T>(&mut self, timers: &mut Scheduler<T>)
    where
        T: Clone + From<AutoAdvance>,
    {
        self.stop_autoplay(timers);
        let id = timers.set_interval(AUTOPLAY_PERIOD, AutoAdvance.into());
        debug!(?id, "autoplay started");
        self.timer = Some(id);
    }

    pub fn stop_autoplay<T: Clone>(&mut self, timers: &mut Scheduler<T>) {
        if let Some(id) = self.timer.take() {
            timers.clear_interval(id);
            debug!(?id, "autoplay stopped");
        }
    }

    /// The indicator `target` sits in, if any (clicks bubble up). Dots past
    /// the last slide are still indicators; their target is range-checked
    /// by [`Self::go_to`].
    pub fn indicator_for(&self, doc: &Document, target: NodeId) -> Option<NodeId> {
        doc.ancestors_inclusive(target)
            .find(|node| self.indicators.contains(node))
    }

    pub fn handle<T>(&mut self, input: DeckInput, doc: &mut Document, timers: &mut Scheduler<T>)
    where
        T: Clone + From<AutoAdvance>,
    {
        match input {
            DeckInput::IndicatorClick(dot) => {
                if !self.indicators.contains(&dot) {
                    return;
                }
                let target = doc
                    .attribute(dot, TARGET_ATTR)
                    .and_then(parse_index)
                    .and_then(|i| usize::try_from(i).ok());
                self.stop_autoplay(timers);
                if let Some(index) = target {
                    self.go_to(doc, index);
                } else {
                    debug!(?dot, "indicator has no usable target");
                }
                self.start_autoplay(timers);
            }
            DeckInput::KeyDown(key) => {
                let Some(step) = key.step() else {
                    return;
                };
                self.stop_autoplay(timers);
                match step {
                    Step::Forward => self.next(doc),
                    Step::Back => self.previous(doc),
                }
                self.start_autoplay(timers);
            }
            DeckInput::PointerEnter => self.stop_autoplay(timers),
            DeckInput::PointerLeave => self.start_autoplay(timers),
            DeckInput::AutoAdvance(id) => {
                if self.timer == Some(id) {
                    self.next(doc);
                }
            }
        }
    }
}
