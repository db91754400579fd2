use std::{fmt, ops::RangeInclusive};

use combine::{parser::combinator::StrLike, stream::Range, ParseError, Parser, RangeStream};

use super::parse;

/// An inclusive range of IDs, written `start-end` in puzzle inputs.
///
/// The bounds are kept in the order they were written, so `9-0` is a valid
/// range covering the same IDs as `0-9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl IdRange {
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn low(&self) -> u64 {
        self.start.min(self.end)
    }

    #[inline]
    pub fn high(&self) -> u64 {
        self.start.max(self.end)
    }

    /// All IDs in the range, lowest first.
    #[inline]
    pub fn ids(&self) -> RangeInclusive<u64> {
        self.low()..=self.high()
    }

    #[inline]
    pub fn contains(&self, id: u64) -> bool {
        self.ids().contains(&id)
    }

    /// Number of IDs in the range.
    #[inline]
    pub fn count(&self) -> u64 {
        self.high() - self.low() + 1
    }

    // "11-22"
    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: RangeStream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        Input::Range: Range + StrLike,
    {
        (
            parse::decimal_integer(),
            combine::token('-'),
            parse::decimal_integer(),
        )
            .map(|(start, _, end)| Self::new(start, end))
    }

    /// Parses a whole string as a range, e.g. `"1188511880-1188511890"`.
    ///
    /// Anything other than exactly two dash-separated unsigned integers is an
    /// error, including negative numbers.
    pub fn parse(s: &str) -> parse::Result<'_, Self> {
        parse::from_str(s, Self::parser())
    }
}
