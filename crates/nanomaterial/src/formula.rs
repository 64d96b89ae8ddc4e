//! The read-only view of a molecular formula that descriptors and serializers are written against

use std::fmt::{Debug, Display, Write};

use ahash::HashSet;
use composition::{ChemicalComposition, Element};
use itertools::Itertools;

/// An occurrence of an element within a formula, optionally pinned to a specific mass number
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Isotope<'f> {
    pub symbol: &'f str,
    pub mass_number: Option<u32>,
}

/// A molecular formula, exposing its isotopes and how many atoms of each it contains
///
/// The `Display` implementation renders the formula as it was written, while [`MolecularFormula::hill_formula`] gives
/// the same string for every way of writing the same composition.
pub trait MolecularFormula: Display + Debug + Sync {
    /// The distinct isotopes of this formula, in a stable order
    fn isotopes(&self) -> Vec<Isotope<'_>>;

    fn isotope_count(&self, isotope: &Isotope<'_>) -> u32;

    /// The number of atoms of `symbol`, summed over every isotope of that element (saturating at `u32::MAX`)
    fn element_count(&self, symbol: &str) -> u32 {
        self.isotopes()
            .iter()
            .filter(|isotope| isotope.symbol == symbol)
            .map(|isotope| self.isotope_count(isotope))
            .fold(0, u32::saturating_add)
    }

    /// The number of distinct elements, with every isotope of an element counted only once
    fn distinct_elements(&self) -> usize {
        let isotopes = self.isotopes();
        let symbols: HashSet<_> = isotopes.iter().map(|isotope| isotope.symbol).collect();
        symbols.len()
    }

    /// The canonical string of this formula, in Hill order: when there is carbon, carbon then hydrogen come first,
    /// and every other element follows alphabetically (`"OZn"`, `"Fe2O3"`, `"C2H6O"`)
    ///
    /// Unlabelled atoms of an element come before its isotopes, which are ordered by mass number.
    fn hill_formula(&self) -> String {
        let isotopes = self.isotopes();
        let has_carbon = isotopes.iter().any(|isotope| isotope.symbol == "C");
        let hill_rank = |symbol: &str| match symbol {
            "C" if has_carbon => 0,
            "H" if has_carbon => 1,
            _ => 2,
        };

        let mut buf = String::new();
        for isotope in isotopes
            .iter()
            .sorted_by_key(|isotope| (hill_rank(isotope.symbol), isotope.symbol, isotope.mass_number))
        {
            let symbol = isotope.symbol;
            // NOTE: Writing to a `String` never fails
            let _ = match isotope.mass_number {
                Some(mass_number) => write!(buf, "[{mass_number}{symbol}]"),
                None => write!(buf, "{symbol}"),
            };
            let count = self.isotope_count(isotope);
            if count > 1 {
                let _ = write!(buf, "{count}");
            }
        }
        buf
    }
}

impl<'f> From<&Element<'f>> for Isotope<'f> {
    fn from(element: &Element<'f>) -> Self {
        Self {
            symbol: element.symbol(),
            mass_number: element.mass_number().map(u32::from),
        }
    }
}

impl MolecularFormula for ChemicalComposition<'_> {
    fn isotopes(&self) -> Vec<Isotope<'_>> {
        self.isotopes().map(Isotope::from).collect()
    }

    fn isotope_count(&self, isotope: &Isotope<'_>) -> u32 {
        self.isotopes()
            .find(|element| Isotope::from(*element) == *isotope)
            .map_or(0, |element| self.isotope_count(element))
    }

    fn element_count(&self, symbol: &str) -> u32 {
        self.element_count(symbol)
    }
}

#[cfg(test)]
mod tests {
    use composition::AtomicDatabase;
    use once_cell::sync::Lazy;

    use super::*;

    static DB: Lazy<AtomicDatabase> = Lazy::new(AtomicDatabase::default);

    fn formula(formula: &str) -> ChemicalComposition<'static> {
        ChemicalComposition::new(&DB, formula).unwrap()
    }

    const fn isotope(symbol: &str, mass_number: Option<u32>) -> Isotope<'_> {
        Isotope {
            symbol,
            mass_number,
        }
    }

    #[test]
    fn isotopes_keep_formula_order() {
        let iron_oxide = formula("Fe2O3");
        let isotopes = MolecularFormula::isotopes(&iron_oxide);
        assert_eq!(isotopes, [isotope("Fe", None), isotope("O", None)]);

        let zinc_oxide = formula("OZn");
        let isotopes = MolecularFormula::isotopes(&zinc_oxide);
        assert_eq!(isotopes, [isotope("O", None), isotope("Zn", None)]);

        let carbon_dioxide = formula("C[13C]O2");
        let isotopes = MolecularFormula::isotopes(&carbon_dioxide);
        assert_eq!(
            isotopes,
            [isotope("C", None), isotope("C", Some(13)), isotope("O", None)]
        );
    }

    #[test]
    fn counting_atoms() {
        let cuprous_oxide = formula("Cu2O");
        assert_eq!(
            MolecularFormula::isotope_count(&cuprous_oxide, &isotope("Cu", None)),
            2
        );
        assert_eq!(
            MolecularFormula::isotope_count(&cuprous_oxide, &isotope("O", None)),
            1
        );
        assert_eq!(
            MolecularFormula::isotope_count(&cuprous_oxide, &isotope("Zn", None)),
            0
        );
        assert_eq!(
            MolecularFormula::isotope_count(&cuprous_oxide, &isotope("Cu", Some(63))),
            0
        );

        let labelled = formula("[18O]Fe2O2");
        assert_eq!(MolecularFormula::element_count(&labelled, "O"), 3);
        assert_eq!(
            MolecularFormula::isotope_count(&labelled, &isotope("O", Some(18))),
            1
        );
    }

    #[test]
    fn distinct_elements() {
        assert_eq!(formula("ZnO").distinct_elements(), 2);
        assert_eq!(formula("Fe3O4").distinct_elements(), 2);
        assert_eq!(formula("C60").distinct_elements(), 1);
        assert_eq!(formula("CaTiO3").distinct_elements(), 3);
        // Isotopes of the same element don't count as separate elements
        assert_eq!(formula("C[13C]O2").distinct_elements(), 2);
    }

    #[test]
    fn written_string() {
        let zinc_oxide = formula("ZnO");
        let formula: &dyn MolecularFormula = &zinc_oxide;
        assert_eq!(formula.to_string(), "ZnO");
    }

    #[test]
    fn hill_order() {
        let hill = |f| formula(f).hill_formula();
        // Without carbon, everything is alphabetical
        assert_eq!(hill("ZnO"), "OZn");
        assert_eq!(hill("OZn"), "OZn");
        assert_eq!(hill("Fe2O3"), "Fe2O3");
        assert_eq!(hill("O3Fe2"), "Fe2O3");
        assert_eq!(hill("TiO2"), "O2Ti");
        assert_eq!(hill("H2O"), "H2O");
        assert_eq!(hill("CaTiO3"), "CaO3Ti");
        // With carbon, carbon and hydrogen come first
        assert_eq!(hill("CH3CH2OH"), "C2H6O");
        assert_eq!(hill("OC2H6"), "C2H6O");
        assert_eq!(hill("C60"), "C60");
        // Repeated elements are merged and isotopes follow their unlabelled element
        assert_eq!(hill("HOH"), "H2O");
        assert_eq!(hill("[13C]O2C"), "C[13C]O2");
        assert_eq!(hill("O[18O]Fe2O"), "Fe2O2[18O]");
        assert_eq!(hill("[65Cu][63Cu]O"), "[63Cu][65Cu]O");
    }
}
