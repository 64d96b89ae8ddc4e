use std::fmt::{self, Display, Formatter};

// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use crate::{
    AtomicDatabase, ChemicalComposition, Element, Result,
    parsers::{chemical_composition::chemical_formula, final_parser},
};

// Public API ==========================================================================================================

impl<'a> ChemicalComposition<'a> {
    pub fn new(db: &'a AtomicDatabase, formula: impl AsRef<str>) -> Result<Self> {
        let mut parser = final_parser(chemical_formula(db));
        let chemical_formula = parser(formula.as_ref()).map_err(Box::new)?;
        Ok(Self { chemical_formula })
    }

    /// The distinct isotopes of this composition, in the order they first appear in the formula
    pub fn isotopes(&self) -> impl Iterator<Item = &Element<'a>> {
        self.chemical_formula.iter().map(|(element, _)| element).unique()
    }

    /// The total number of atoms of exactly this isotope (summed over repeated occurrences)
    #[must_use]
    pub fn isotope_count(&self, isotope: &Element<'_>) -> u32 {
        self.chemical_formula
            .iter()
            .filter(|(element, _)| {
                element.symbol == isotope.symbol && element.mass_number == isotope.mass_number
            })
            .map(|&(_, count)| count)
            .sum()
    }

    /// The total number of atoms of an element, counting every isotope of it
    #[must_use]
    pub fn element_count(&self, symbol: &str) -> u32 {
        self.chemical_formula
            .iter()
            .filter(|(element, _)| element.symbol == symbol)
            .map(|&(_, count)| count)
            .sum()
    }
}

// Display Trait Implementation ========================================================================================

impl Display for ChemicalComposition<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &(ref element, count) in &self.chemical_formula {
            write!(f, "{element}{count}")?;
        }
        Ok(())
    }
}

// Module Tests ========================================================================================================
