//! Per-letter feedback categories

/// State of a single tile on the board
///
/// `Empty` and `Pending` describe tiles of the row being typed; the other
/// three are assigned when a row is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterClassification {
    /// No letter entered
    #[default]
    Empty,
    /// Letter entered, not yet scored
    Pending,
    /// Letter matches the secret at this position (green)
    Correct,
    /// Letter occurs elsewhere in the secret (yellow)
    WrongSpot,
    /// Letter does not occur, or all its occurrences are already used (gray)
    Absent,
}

impl LetterClassification {
    /// Whether this classification came from scoring a guess
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::WrongSpot | Self::Absent)
    }

    /// Strength of the information a classification carries about a letter
    ///
    /// `Correct` > `WrongSpot` > `Absent` > unscored. Used to merge hints
    /// across rows for keyboard display.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty | Self::Pending => 0,
            Self::Absent => 1,
            Self::WrongSpot => 2,
            Self::Correct => 3,
        }
    }

    /// Single-character code: `G`, `Y`, `-`, or `.`/`?` for unscored tiles
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Pending => '?',
            Self::Correct => 'G',
            Self::WrongSpot => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongSpot => '🟨',
            Self::Absent => '⬜',
            Self::Empty | Self::Pending => '⬛',
        }
    }

    /// Parse a scored classification from its code or emoji
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::WrongSpot),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_variants() {
        assert!(!LetterClassification::Empty.is_scored());
        assert!(!LetterClassification::Pending.is_scored());
        assert!(LetterClassification::Correct.is_scored());
        assert!(LetterClassification::WrongSpot.is_scored());
        assert!(LetterClassification::Absent.is_scored());
    }

    #[test]
    fn rank_orders_information() {
        use LetterClassification::{Absent, Correct, Empty, WrongSpot};
        assert!(Correct.rank() > WrongSpot.rank());
        assert!(WrongSpot.rank() > Absent.rank());
        assert!(Absent.rank() > Empty.rank());
    }

    #[test]
    fn symbol_round_trip_for_scored() {
        for class in [
            LetterClassification::Correct,
            LetterClassification::WrongSpot,
            LetterClassification::Absent,
        ] {
            assert_eq!(LetterClassification::from_symbol(class.symbol()), Some(class));
            assert_eq!(
                LetterClassification::from_symbol(class.to_emoji()),
                Some(class)
            );
        }
        assert_eq!(LetterClassification::from_symbol('x'), None);
        assert_eq!(LetterClassification::from_symbol('?'), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(LetterClassification::default(), LetterClassification::Empty);
    }
}
