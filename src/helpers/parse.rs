use std::{fmt, str::FromStr};

use combine::{
    easy,
    parser::{combinator::StrLike, range::take_while1},
    stream::Range,
    EasyParser, ParseError, Parser, RangeStream,
};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`, failing if any input is left over.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// An unsigned run of ASCII digits, parsed into `T`.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: RangeStream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    Input::Range: Range + StrLike,
{
    combine::from_str(take_while1(|c: char| c.is_ascii_digit()))
}
