//! Per-letter feedback signal

/// The three-valued signal shown for one letter of a guess
///
/// Each signal maps to a base-3 digit: Absent = 0, Present = 1, Exact = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterSignal {
    /// Grey: letter not in the word, or every occurrence already accounted for
    Absent,
    /// Yellow: letter occurs elsewhere in the word
    Present,
    /// Green: letter occurs at this exact position
    Exact,
}

impl LetterSignal {
    /// All signals in digit order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Exact];

    /// Base-3 digit of this signal
    #[inline]
    #[must_use]
    pub const fn digit(self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    /// Signal for a base-3 digit, or `None` if the digit is out of range
    #[must_use]
    pub const fn from_digit(digit: usize) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    /// Parse a feedback-line symbol
    ///
    /// `' '` is Absent, `'.'` is Present, anything else is Exact.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            ' ' => Self::Absent,
            '.' => Self::Present,
            _ => Self::Exact,
        }
    }

    /// Feedback-line symbol that parses back to this signal
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => ' ',
            Self::Present => '.',
            Self::Exact => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_a_bijection() {
        for (digit, signal) in LetterSignal::ALL.into_iter().enumerate() {
            assert_eq!(signal.digit(), digit);
            assert_eq!(LetterSignal::from_digit(digit), Some(signal));
        }
        assert_eq!(LetterSignal::from_digit(3), None);
    }

    #[test]
    fn symbols_parse() {
        assert_eq!(LetterSignal::from_symbol(' '), LetterSignal::Absent);
        assert_eq!(LetterSignal::from_symbol('.'), LetterSignal::Present);
        assert_eq!(LetterSignal::from_symbol('x'), LetterSignal::Exact);
        assert_eq!(LetterSignal::from_symbol('G'), LetterSignal::Exact);
    }

    #[test]
    fn symbols_round_trip() {
        for signal in LetterSignal::ALL {
            assert_eq!(LetterSignal::from_symbol(signal.symbol()), signal);
        }
    }
}
