use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use itertools::Itertools;

use crate::{NanomaterialError, Unit};

impl Unit {
    /// Every known unit, in the order that name lookups scan them
    pub const ALL: [Self; 10] = [
        Self::Nanometre,
        Self::Micrometre,
        Self::Metre,
        Self::Angstrom,
        Self::ElectronVolt,
        Self::Joule,
        Self::Millivolt,
        Self::Volt,
        Self::Kelvin,
        Self::Celsius,
    ];

    /// The enumerated name used to look up this unit from a string
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanometre => "NM",
            Self::Micrometre => "UM",
            Self::Metre => "M",
            Self::Angstrom => "ANGSTROM",
            Self::ElectronVolt => "EV",
            Self::Joule => "J",
            Self::Millivolt => "MV",
            Self::Volt => "V",
            Self::Kelvin => "K",
            Self::Celsius => "DEG_C",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanometre => "nm",
            Self::Micrometre => "µm",
            Self::Metre => "m",
            Self::Angstrom => "Å",
            Self::ElectronVolt => "eV",
            Self::Joule => "J",
            Self::Millivolt => "mV",
            Self::Volt => "V",
            Self::Kelvin => "K",
            Self::Celsius => "°C",
        }
    }
}

impl FromStr for Unit {
    type Err = Box<NanomaterialError>;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == name)
            .ok_or_else(|| {
                let known = Self::ALL.iter().map(|unit| unit.name()).join(", ");
                Box::new(NanomaterialError::unknown_unit(name, known))
            })
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn lookup_by_name() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>(), Ok(unit));
        }
        assert_eq!("NM".parse::<Unit>(), Ok(Unit::Nanometre));
        assert_eq!("EV".parse::<Unit>(), Ok(Unit::ElectronVolt));
    }

    #[test]
    fn lookup_is_exact() {
        // Lookups are case-sensitive and never trim or guess
        for name in ["nm", "Nm", " NM", "NM ", "NANOMETRE", "", "BOGUS"] {
            assert!(name.parse::<Unit>().is_err(), "{name:?} should not be a unit");
        }
        assert_snapshot!(
            "BOGUS".parse::<Unit>().unwrap_err(),
            @r#"the unit "BOGUS" is not one of the known units"#
        );
    }

    #[test]
    fn names_are_unique() {
        let names: Vec<_> = Unit::ALL.iter().map(|unit| unit.name()).collect();
        assert_eq!(names.iter().unique().count(), Unit::ALL.len());
    }

    #[test]
    fn unit_display() {
        assert_eq!(Unit::Nanometre.to_string(), "nm");
        assert_eq!(Unit::ElectronVolt.to_string(), "eV");
        assert_eq!(Unit::Millivolt.to_string(), "mV");
    }
}
