// External Crate Imports
use nom::{
    branch::alt,
    character::complete::char,
    combinator::{cut, map, opt, recognize},
    multi::many1,
    sequence::{delimited, pair},
};

// Local Crate Imports
use super::{
    ParseResult, expect, lookup,
    primitives::{count, lowercase, uppercase},
};
use crate::{AtomicDatabase, Count, Element, MassNumber, errors::CompositionErrorKind};

// Public API ==========================================================================================================

/// Chemical Formula = { Atomic Offset }- ;
pub fn chemical_formula<'a, 's>(
    db: &'a AtomicDatabase,
) -> impl FnMut(&'s str) -> ParseResult<'s, Vec<(Element<'a>, Count)>> {
    many1(atomic_offset(db))
}

// Private Sub-Parsers =================================================================================================

/// Atomic Offset = ( Element | Isotope ) , [ Count ] ;
fn atomic_offset<'a, 's>(
    db: &'a AtomicDatabase,
) -> impl FnMut(&'s str) -> ParseResult<'s, (Element<'a>, Count)> {
    let element_or_isotope = expect(
        alt((element(db), isotope(db))),
        CompositionErrorKind::ExpectedAtomicOffset,
    );
    let optional_count = map(opt(count), Option::unwrap_or_default);
    pair(element_or_isotope, optional_count)
}

/// Element = uppercase , [ lowercase ] ;
fn element<'a, 's>(db: &'a AtomicDatabase) -> impl FnMut(&'s str) -> ParseResult<'s, Element<'a>> {
    lookup(element_symbol, move |symbol| Element::new(db, symbol))
}

// NOTE: These are not meant to be links, it's just EBNF
#[allow(clippy::doc_link_with_quotes)]
/// Isotope = "[" , Count , Element , "]" ;
fn isotope<'a, 's>(db: &'a AtomicDatabase) -> impl FnMut(&'s str) -> ParseResult<'s, Element<'a>> {
    lookup(isotope_expr, move |(mass_number, symbol)| {
        Element::new_isotope(db, symbol, mass_number)
    })
}

// ---------------------------------------------------------------------------------------------------------------------

/// Element = uppercase , [ lowercase ] ;
fn element_symbol(i: &str) -> ParseResult<'_, &str> {
    let parser = recognize(pair(uppercase, opt(lowercase)));
    expect(parser, CompositionErrorKind::ExpectedElementSymbol)(i)
}

// NOTE: These are not meant to be links, it's just EBNF
#[allow(clippy::doc_link_with_quotes)]
/// Isotope = "[" , Count , Element , "]" ;
fn isotope_expr(i: &str) -> ParseResult<'_, (MassNumber, &str)> {
    let opening_bracket = expect(char('['), CompositionErrorKind::ExpectedIsotopeStart);
    let mass_number = map(
        expect(count, CompositionErrorKind::ExpectedMassNumber),
        |c| MassNumber(c.0),
    );
    let closing_bracket = cut(expect(char(']'), CompositionErrorKind::ExpectedIsotopeEnd));
    delimited(
        opening_bracket,
        cut(pair(mass_number, element_symbol)),
        closing_bracket,
    )(i)
}

// Module Tests ========================================================================================================
