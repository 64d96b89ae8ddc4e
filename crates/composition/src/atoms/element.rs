use std::fmt::{self, Display, Formatter};

use crate::{Element, MassNumber};

use super::{atomic_database::AtomicDatabase, errors::AtomicLookupError};

impl<'a> Element<'a> {
    pub(crate) fn new(
        db: &'a AtomicDatabase,
        symbol: impl AsRef<str>,
    ) -> Result<Self, AtomicLookupError> {
        Self::lookup(db, symbol, None)
    }

    pub(crate) fn new_isotope(
        db: &'a AtomicDatabase,
        symbol: impl AsRef<str>,
        mass_number: MassNumber,
    ) -> Result<Self, AtomicLookupError> {
        Self::lookup(db, symbol, Some(mass_number))
    }

    fn lookup(
        db: &'a AtomicDatabase,
        symbol: impl AsRef<str>,
        mass_number: Option<MassNumber>,
    ) -> Result<Self, AtomicLookupError> {
        let symbol = symbol.as_ref();
        let (symbol, description) = db
            .elements
            .get_key_value(symbol)
            .ok_or_else(|| AtomicLookupError::Element(symbol.to_owned()))?;

        if let Some(mass_number) = mass_number {
            if !description.isotopes.contains(&mass_number) {
                return Err(AtomicLookupError::isotope(
                    symbol,
                    mass_number,
                    &description.name,
                    &description.isotopes,
                ));
            }
        }

        Ok(Self {
            symbol,
            name: &description.name,
            mass_number,
        })
    }

    #[must_use]
    pub const fn symbol(&self) -> &'a str {
        self.symbol
    }

    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    #[must_use]
    pub const fn mass_number(&self) -> Option<MassNumber> {
        self.mass_number
    }
}

impl Display for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol;
        if let Some(mass_number) = self.mass_number {
            write!(f, "[{mass_number}{symbol}]")
        } else {
            write!(f, "{symbol}")
        }
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;

    use super::*;

    static DB: Lazy<AtomicDatabase> = Lazy::new(AtomicDatabase::default);

    #[test]
    fn new_element() {
        // Sucessfully lookup elements that exist
        let Element {
            symbol,
            name,
            mass_number,
        } = Element::new(&DB, "Zn").unwrap();
        assert_eq!(symbol, "Zn");
        assert_eq!(name, "Zinc");
        assert_eq!(mass_number, None);
        // Fail to lookup elements that don't exist
        assert_eq!(
            Element::new(&DB, "R"),
            Err(AtomicLookupError::Element("R".to_owned()))
        );
    }

    #[test]
    fn new_isotope() {
        // Sucessfully lookup isotopes that exist
        let c13 = Element::new_isotope(&DB, "C", MassNumber::new(13).unwrap()).unwrap();
        assert_eq!(c13.symbol(), "C");
        assert_eq!(c13.name(), "Carbon");
        assert_eq!(c13.mass_number(), MassNumber::new(13));
        // Fail to lookup isotopes for elements that don't exist
        assert!(matches!(
            Element::new_isotope(&DB, "R", MassNumber::new(42).unwrap()),
            Err(AtomicLookupError::Element(_))
        ));
        // Fail to lookup isotopes that don't exist
        assert!(matches!(
            Element::new_isotope(&DB, "C", MassNumber::new(15).unwrap()),
            Err(AtomicLookupError::Isotope(..))
        ));
    }

    #[test]
    fn element_display() {
        let c = Element::new(&DB, "C").unwrap();
        assert_eq!(c.to_string(), "C");
        let c13 = Element::new_isotope(&DB, "C", MassNumber::new(13).unwrap()).unwrap();
        assert_eq!(c13.to_string(), "[13C]");
        let fe = Element::new(&DB, "Fe").unwrap();
        assert_eq!(fe.to_string(), "Fe");
        let fe57 = Element::new_isotope(&DB, "Fe", MassNumber::new(57).unwrap()).unwrap();
        assert_eq!(fe57.to_string(), "[57Fe]");
    }
}
