use tracing::warn;

use crate::dom::NodeId;

/// One slide panel and the indicator dot that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePair {
    pub slide: NodeId,
    pub dot: NodeId,
}

/// Slides and dots zipped into one sequence with a single cursor.
///
/// The cursor is always a valid index, so there is exactly one current pair
/// for as long as the deck exists.
#[derive(Debug, Clone)]
pub struct Deck {
    pairs: Vec<SlidePair>,
    current: usize,
}

impl Deck {
    /// Pairs slides with dots by position. Returns `None` when either side
    /// is empty; a length mismatch is clamped to the shorter side.
    pub fn pair(slides: &[NodeId], dots: &[NodeId]) -> Option<Self> {
        if slides.is_empty() || dots.is_empty() {
            return None;
        }
        if slides.len() != dots.len() {
            warn!(
                slides = slides.len(),
                dots = dots.len(),
                "slide and indicator counts differ, extra elements are ignored"
            );
        }

        let pairs = slides
            .iter()
            .zip(dots)
            .map(|(&slide, &dot)| SlidePair { slide, dot })
            .collect();
        Some(Self { pairs, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_pair(&self) -> SlidePair {
        self.pairs[self.current]
    }

    /// Moves the cursor. Out of range indices leave it untouched and return
    /// `None`; otherwise returns the pair left and the pair entered.
    pub fn go_to(&mut self, index: usize) -> Option<(SlidePair, SlidePair)> {
        let entered = *self.pairs.get(index)?;
        let left = self.current_pair();
        self.current = index;
        Some((left, entered))
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.len()
    }

    pub fn previous_index(&self) -> usize {
        (self.current + self.len() - 1) % self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn nodes(doc: &mut Document, n: usize) -> Vec<NodeId> {
        (0..n).map(|_| doc.create_element("div")).collect()
    }

    #[test]
    fn empty_sides_do_not_pair() {
        let mut doc = Document::new();
        let some = nodes(&mut doc, 2);
        assert!(Deck::pair(&[], &some).is_none());
        assert!(Deck::pair(&some, &[]).is_none());
    }

    #[test]
    fn mismatch_clamps_to_shorter_side() {
        let mut doc = Document::new();
        let slides = nodes(&mut doc, 4);
        let dots = nodes(&mut doc, 3);
        let mut deck = Deck::pair(&slides, &dots).unwrap();
        assert_eq!(deck.len(), 3);
        let (_, entered) = deck.go_to(2).unwrap();
        assert_eq!(entered, SlidePair { slide: slides[2], dot: dots[2] });
        assert!(deck.go_to(3).is_none());
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut doc = Document::new();
        let slides = nodes(&mut doc, 3);
        let dots = nodes(&mut doc, 3);
        let mut deck = Deck::pair(&slides, &dots).unwrap();
        assert!(deck.go_to(3).is_none());
        assert_eq!(deck.current(), 0);

        let (left, entered) = deck.go_to(2).unwrap();
        assert_eq!(left.slide, slides[0]);
        assert_eq!(entered.dot, dots[2]);
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn neighbours_wrap_around() {
        let mut doc = Document::new();
        let slides = nodes(&mut doc, 3);
        let dots = nodes(&mut doc, 3);
        let mut deck = Deck::pair(&slides, &dots).unwrap();
        assert_eq!(deck.previous_index(), 2);
        deck.go_to(2);
        assert_eq!(deck.next_index(), 0);
    }

    #[test]
    fn single_pair_wraps_onto_itself() {
        let mut doc = Document::new();
        let slides = nodes(&mut doc, 1);
        let dots = nodes(&mut doc, 1);
        let deck = Deck::pair(&slides, &dots).unwrap();
        assert_eq!(deck.next_index(), 0);
        assert_eq!(deck.previous_index(), 0);
    }
}
