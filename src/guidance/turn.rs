use once_cell::sync::Lazy;
use regex::Regex;
use strum::{Display, EnumIter};

/// The maneuver classes guidance can speak an imperative for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Turn {
    Left,
    Right,
    Straight,
    UTurn,
}

// Korean syllables are matched as plain substrings; English words need
// boundaries so "bright" is not a right turn.
static PATTERNS: Lazy<[(Turn, Regex); 4]> = Lazy::new(|| {
    let pattern = |source: &str| Regex::new(source).expect("static turn pattern");
    [
        (Turn::Left, pattern(r"(?i)좌|\bleft\b")),
        (Turn::Right, pattern(r"(?i)우|\bright\b")),
        (Turn::Straight, pattern(r"(?i)직진|\bstraight\b")),
        (Turn::UTurn, pattern(r"(?i)유턴|\bu[\s-]?turn\b")),
    ]
});

impl Turn {
    /// First matching class, checked left, right, straight, u-turn.
    pub fn detect(text: &str) -> Option<Turn> {
        PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(turn, _)| *turn)
    }

    /// Like [`Turn::detect`], restricted to left and right. Used to infer a
    /// maneuver label from free text.
    pub fn detect_side(text: &str) -> Option<Turn> {
        Turn::detect(text).filter(|turn| matches!(turn, Turn::Left | Turn::Right))
    }
}
