pub(crate) mod chemical_composition;
pub mod primitives;

// External Crate Imports
use nom::{
    Err, Finish, IResult, Parser,
    combinator::{all_consuming, complete},
    error::{ErrorKind, ParseError as NomParseError},
};

// Local Crate Imports
use crate::{
    atoms::errors::AtomicLookupError,
    errors::{CompositionError, CompositionErrorKind},
};

// Re-exports
pub use chemical_composition::chemical_formula;

pub type ParseResult<'s, O> = IResult<&'s str, O, ParseError<'s>>;

/// An in-flight parsing error, tracking the unparsed input at the point of failure
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError<'s> {
    input: &'s str,
    length: usize,
    kind: CompositionErrorKind,
}

impl<'s> ParseError<'s> {
    const fn new(input: &'s str, kind: CompositionErrorKind) -> Self {
        Self {
            input,
            length: 0,
            kind,
        }
    }

    fn into_final_error(self, full_input: &str) -> CompositionError {
        // NOTE: `self.input` is always a suffix of `full_input`, so the difference in lengths is its offset
        let offset = full_input.len() - self.input.len();
        CompositionError::new(full_input, offset, self.length, self.kind)
    }
}

impl<'s> NomParseError<&'s str> for ParseError<'s> {
    fn from_error_kind(input: &'s str, kind: ErrorKind) -> Self {
        Self::new(input, kind.into())
    }

    fn append(_input: &'s str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

// Parser Combinators ==================================================================================================

/// Runs `parser` over the whole input, converting any failure into a labeled [`CompositionError`]
pub fn final_parser<'s, O, P>(parser: P) -> impl FnMut(&'s str) -> Result<O, CompositionError>
where
    P: Parser<&'s str, O, ParseError<'s>>,
{
    let mut parser = all_consuming(complete(parser));
    move |input| {
        parser
            .parse(input)
            .finish()
            .map(|(_, o)| o)
            .map_err(|e| e.into_final_error(input))
    }
}

/// Replaces recoverable errors from `parser` with `kind`, leaving unrecoverable failures untouched
pub fn expect<'s, O, P>(
    mut parser: P,
    kind: CompositionErrorKind,
) -> impl FnMut(&'s str) -> ParseResult<'s, O>
where
    P: Parser<&'s str, O, ParseError<'s>>,
{
    move |i| match parser.parse(i) {
        Err(Err::Error(_)) => Err(Err::Error(ParseError::new(i, kind.clone()))),
        result => result,
    }
}

/// Feeds the output of `parser` into a database lookup, failing unrecoverably (and labeling everything `parser`
/// consumed) if the lookup comes up empty
pub fn lookup<'s, O1, O2, P, F>(mut parser: P, mut f: F) -> impl FnMut(&'s str) -> ParseResult<'s, O2>
where
    P: Parser<&'s str, O1, ParseError<'s>>,
    F: FnMut(O1) -> Result<O2, AtomicLookupError>,
{
    move |i| {
        let (rest, o1) = parser.parse(i)?;
        match f(o1) {
            Ok(o2) => Ok((rest, o2)),
            Err(e) => Err(Err::Failure(ParseError {
                length: i.len() - rest.len(),
                ..ParseError::new(i, e.into())
            })),
        }
    }
}
