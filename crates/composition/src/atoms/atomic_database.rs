// Standard Library Imports
use std::{num::NonZeroU32, str::FromStr};

// External Crate Imports
use miette::Diagnostic;
use thiserror::Error;

// Local Crate Imports
use crate::{ElementDescription, ElementMap, MassNumber};

// Public API ==========================================================================================================

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AtomicDatabase {
    pub(crate) elements: ElementMap,
}

/// `(symbol, name, stable or long-lived isotope mass numbers)`
pub type ElementEntry<'e> = (&'e str, &'e str, &'e [u32]);

impl AtomicDatabase {
    pub fn new<'e>(
        entries: impl IntoIterator<Item = ElementEntry<'e>>,
    ) -> Result<Self, InvalidAtomicDataError> {
        let elements = entries
            .into_iter()
            .map(|(symbol, name, isotopes)| -> Result<_, InvalidAtomicDataError> {
                let ElementSymbol(symbol) = symbol.parse()?;
                let isotopes = isotopes
                    .iter()
                    .map(|&a| {
                        NonZeroU32::new(a)
                            .map(MassNumber)
                            .ok_or_else(|| InvalidAtomicDataError::MassNumber(symbol.clone()))
                    })
                    .collect::<Result<_, _>>()?;
                let name = name.to_owned();
                Ok((symbol, ElementDescription { name, isotopes }))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { elements })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for AtomicDatabase {
    fn default() -> Self {
        // NOTE: The built-in table is checked by the `default_database_is_valid` test below
        Self::new(BUILTIN_ELEMENTS.iter().copied())
            .expect("the built-in atomic database should always be valid")
    }
}

// Element Symbol Validation ===========================================================================================

#[derive(Debug)]
struct ElementSymbol(String);

impl FromStr for ElementSymbol {
    type Err = InvalidAtomicDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_owned();
        let chrs: Vec<_> = s.chars().collect();
        match chrs[..] {
            [f] if f.is_ascii_uppercase() => Ok(Self(s)),
            [f, l] if f.is_ascii_uppercase() && l.is_ascii_lowercase() => Ok(Self(s)),
            _ => Err(InvalidAtomicDataError::Symbol(s)),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum InvalidAtomicDataError {
    #[error(
        "expected a single uppercase ASCII letter optionally followed by a lowercase ASCII letter, got {0:?}"
    )]
    Symbol(String),
    #[error("the element {0:?} lists an isotope with a mass number of zero")]
    MassNumber(String),
}

// Built-In Element Table ==============================================================================================

const BUILTIN_ELEMENTS: &[ElementEntry<'static>] = &[
    ("H", "Hydrogen", &[1, 2, 3]),
    ("D", "Deuterium", &[2]),
    ("He", "Helium", &[3, 4]),
    ("Li", "Lithium", &[6, 7]),
    ("Be", "Beryllium", &[9]),
    ("B", "Boron", &[10, 11]),
    ("C", "Carbon", &[12, 13, 14]),
    ("N", "Nitrogen", &[14, 15]),
    ("O", "Oxygen", &[16, 17, 18]),
    ("F", "Fluorine", &[19]),
    ("Ne", "Neon", &[20, 21, 22]),
    ("Na", "Sodium", &[23]),
    ("Mg", "Magnesium", &[24, 25, 26]),
    ("Al", "Aluminium", &[27]),
    ("Si", "Silicon", &[28, 29, 30]),
    ("P", "Phosphorus", &[31]),
    ("S", "Sulfur", &[32, 33, 34, 36]),
    ("Cl", "Chlorine", &[35, 37]),
    ("Ar", "Argon", &[36, 38, 40]),
    ("K", "Potassium", &[39, 40, 41]),
    ("Ca", "Calcium", &[40, 42, 43, 44, 46, 48]),
    ("Sc", "Scandium", &[45]),
    ("Ti", "Titanium", &[46, 47, 48, 49, 50]),
    ("V", "Vanadium", &[50, 51]),
    ("Cr", "Chromium", &[50, 52, 53, 54]),
    ("Mn", "Manganese", &[55]),
    ("Fe", "Iron", &[54, 56, 57, 58]),
    ("Co", "Cobalt", &[59]),
    ("Ni", "Nickel", &[58, 60, 61, 62, 64]),
    ("Cu", "Copper", &[63, 65]),
    ("Zn", "Zinc", &[64, 66, 67, 68, 70]),
    ("Ga", "Gallium", &[69, 71]),
    ("Ge", "Germanium", &[70, 72, 73, 74, 76]),
    ("As", "Arsenic", &[75]),
    ("Se", "Selenium", &[74, 76, 77, 78, 80, 82]),
    ("Br", "Bromine", &[79, 81]),
    ("Kr", "Krypton", &[78, 80, 82, 83, 84, 86]),
    ("Rb", "Rubidium", &[85, 87]),
    ("Sr", "Strontium", &[84, 86, 87, 88]),
    ("Y", "Yttrium", &[89]),
    ("Zr", "Zirconium", &[90, 91, 92, 94, 96]),
    ("Nb", "Niobium", &[93]),
    ("Mo", "Molybdenum", &[92, 94, 95, 96, 97, 98, 100]),
    ("Tc", "Technetium", &[97, 98, 99]),
    ("Ru", "Ruthenium", &[96, 98, 99, 100, 101, 102, 104]),
    ("Rh", "Rhodium", &[103]),
    ("Pd", "Palladium", &[102, 104, 105, 106, 108, 110]),
    ("Ag", "Silver", &[107, 109]),
    ("Cd", "Cadmium", &[106, 108, 110, 111, 112, 113, 114, 116]),
    ("In", "Indium", &[113, 115]),
    ("Sn", "Tin", &[112, 114, 115, 116, 117, 118, 119, 120, 122, 124]),
    ("Sb", "Antimony", &[121, 123]),
    ("Te", "Tellurium", &[120, 122, 123, 124, 125, 126, 128, 130]),
    ("I", "Iodine", &[127]),
    ("Xe", "Xenon", &[124, 126, 128, 129, 130, 131, 132, 134, 136]),
    ("Cs", "Caesium", &[133]),
    ("Ba", "Barium", &[130, 132, 134, 135, 136, 137, 138]),
    ("La", "Lanthanum", &[138, 139]),
    ("Ce", "Cerium", &[136, 138, 140, 142]),
    ("Pr", "Praseodymium", &[141]),
    ("Nd", "Neodymium", &[142, 143, 144, 145, 146, 148, 150]),
    ("Sm", "Samarium", &[144, 147, 148, 149, 150, 152, 154]),
    ("Eu", "Europium", &[151, 153]),
    ("Gd", "Gadolinium", &[152, 154, 155, 156, 157, 158, 160]),
    ("Tb", "Terbium", &[159]),
    ("Dy", "Dysprosium", &[156, 158, 160, 161, 162, 163, 164]),
    ("Ho", "Holmium", &[165]),
    ("Er", "Erbium", &[162, 164, 166, 167, 168, 170]),
    ("Tm", "Thulium", &[169]),
    ("Yb", "Ytterbium", &[168, 170, 171, 172, 173, 174, 176]),
    ("Lu", "Lutetium", &[175, 176]),
    ("Hf", "Hafnium", &[174, 176, 177, 178, 179, 180]),
    ("Ta", "Tantalum", &[180, 181]),
    ("W", "Tungsten", &[180, 182, 183, 184, 186]),
    ("Re", "Rhenium", &[185, 187]),
    ("Os", "Osmium", &[184, 186, 187, 188, 189, 190, 192]),
    ("Ir", "Iridium", &[191, 193]),
    ("Pt", "Platinum", &[190, 192, 194, 195, 196, 198]),
    ("Au", "Gold", &[197]),
    ("Hg", "Mercury", &[196, 198, 199, 200, 201, 202, 204]),
    ("Tl", "Thallium", &[203, 205]),
    ("Pb", "Lead", &[204, 206, 207, 208]),
    ("Bi", "Bismuth", &[209]),
    ("Th", "Thorium", &[230, 232]),
    ("U", "Uranium", &[234, 235, 238]),
];

// Module Tests ========================================================================================================
