//! Chemical formulae for nanomaterial compositions, validated against an atomic database

pub mod atoms;
pub mod errors;
pub mod parsers;

use std::num::NonZeroU32;

// External Crate Imports
use ahash::HashMap;

pub use atoms::atomic_database::AtomicDatabase;
pub use errors::{CompositionError, Result};

// NOTE: For the types in this module, 'a lifetimes indicate references to the AtomicDatabase
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ChemicalComposition<'a> {
    chemical_formula: Vec<(Element<'a>, Count)>,
}

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Element<'a> {
    symbol: &'a str,
    name: &'a str,
    mass_number: Option<MassNumber>,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Count(NonZeroU32);

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct MassNumber(NonZeroU32);

#[derive(Clone, Eq, PartialEq, Debug)]
struct ElementDescription {
    name: String,
    isotopes: Vec<MassNumber>,
}

type ElementMap = HashMap<String, ElementDescription>;
