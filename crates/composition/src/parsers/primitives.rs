use nom::{
    character::complete::{char, satisfy, u32},
    combinator::{cut, map_opt, not},
    sequence::preceded,
};

use crate::{Count, errors::CompositionErrorKind};

use super::{ParseResult, expect};

/// uppercase
///   = "A" | "B" | "C" | "D" | "E" | "F" | "G"
///   | "H" | "I" | "J" | "K" | "L" | "M" | "N"
///   | "O" | "P" | "Q" | "R" | "S" | "T" | "U"
///   | "V" | "W" | "X" | "Y" | "Z"
///   ;
pub fn uppercase(i: &str) -> ParseResult<'_, char> {
    let parser = satisfy(|c| c.is_ascii_uppercase());
    expect(parser, CompositionErrorKind::ExpectedUppercase)(i)
}

/// lowercase
///   = "a" | "b" | "c" | "d" | "e" | "f" | "g"
///   | "h" | "i" | "j" | "k" | "l" | "m" | "n"
///   | "o" | "p" | "q" | "r" | "s" | "t" | "u"
///   | "v" | "w" | "x" | "y" | "z"
///   ;
pub fn lowercase(i: &str) -> ParseResult<'_, char> {
    let parser = satisfy(|c| c.is_ascii_lowercase());
    expect(parser, CompositionErrorKind::ExpectedLowercase)(i)
}

/// Count = digit - "0" , { digit } ;
pub fn count(i: &str) -> ParseResult<'_, Count> {
    let not_zero = cut(expect(
        not(char('0')),
        CompositionErrorKind::ExpectedNoLeadingZero,
    ));
    let digits = expect(u32, CompositionErrorKind::ExpectedDigit);
    map_opt(preceded(not_zero, digits), Count::new)(i)
}
