use crate::dom::NodeId;
use crate::scheduler::TimerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Other(String),
}

impl Key {
    /// Maps a key name as the browser reports it (`"ArrowRight"`, `"a"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" => Key::ArrowRight,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowUp" => Key::ArrowUp,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn step(&self) -> Option<Step> {
        match self {
            Key::ArrowRight | Key::ArrowDown => Some(Step::Forward),
            Key::ArrowLeft | Key::ArrowUp => Some(Step::Back),
            Key::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

/// Everything that can drive the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckInput {
    IndicatorClick(NodeId),
    KeyDown(Key),
    PointerEnter,
    PointerLeave,
    AutoAdvance(TimerId),
}

/// Timer payload of the deck's autoplay interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance;

/// Reads a base-10 integer prefix the way browsers parse data attributes:
/// leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit, and no digits at all yields `None`.
pub fn parse_index(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value: i64 = digits[..len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_steps() {
        assert_eq!(Key::from_name("ArrowRight").step(), Some(Step::Forward));
        assert_eq!(Key::from_name("ArrowDown").step(), Some(Step::Forward));
        assert_eq!(Key::from_name("ArrowLeft").step(), Some(Step::Back));
        assert_eq!(Key::from_name("ArrowUp").step(), Some(Step::Back));
        assert_eq!(Key::from_name("Enter").step(), None);
        assert_eq!(Key::from_name("Enter"), Key::Other("Enter".into()));
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_index("2"), Some(2));
        assert_eq!(parse_index("  7"), Some(7));
        assert_eq!(parse_index("3px"), Some(3));
        assert_eq!(parse_index("-1"), Some(-1));
        assert_eq!(parse_index("+4"), Some(4));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("-"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }
}
