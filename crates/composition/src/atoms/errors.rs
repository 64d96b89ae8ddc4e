use miette::Diagnostic;
use thiserror::Error;

use crate::MassNumber;

// NOTE: Public so that callers building on `chemical_formula` can inspect lookup failures
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AtomicLookupError {
    #[diagnostic(help("double-check for typos, or add a new entry to the atomic database"))]
    #[error("the element {0:?} could not be found in the supplied atomic database")]
    Element(String),

    #[diagnostic(help("double-check for typos, or add a new entry to the atomic database"))]
    #[error(
        "the isotope \"{0}-{1}\" could not be found in the supplied atomic database, though the following {2} \
        isotopes were found: {3}"
    )]
    Isotope(String, MassNumber, String, String),
}

impl AtomicLookupError {
    pub(crate) fn isotope(
        symbol: &str,
        mass_number: MassNumber,
        name: &str,
        isotopes: &[MassNumber],
    ) -> Self {
        Self::Isotope(
            symbol.to_owned(),
            mass_number,
            name.to_owned(),
            Self::display_vec(isotopes),
        )
    }

    pub(crate) fn display_vec<I: ToString>(items: impl IntoIterator<Item = I>) -> String {
        let mut items: Vec<_> = items.into_iter().map(|i| i.to_string()).collect();
        items.sort_unstable();
        format!("[{}]", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn lookup_error_messages() {
        assert_snapshot!(
            AtomicLookupError::Element("Xx".to_owned()),
            @r#"the element "Xx" could not be found in the supplied atomic database"#
        );
        let isotopes = [MassNumber::new(63).unwrap(), MassNumber::new(65).unwrap()];
        assert_snapshot!(
            AtomicLookupError::isotope("Cu", MassNumber::new(64).unwrap(), "Copper", &isotopes),
            @r#"the isotope "Cu-64" could not be found in the supplied atomic database, though the following Copper isotopes were found: [63, 65]"#
        );
    }
}
