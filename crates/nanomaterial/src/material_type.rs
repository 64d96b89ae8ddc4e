use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use itertools::Itertools;

use crate::{MaterialType, NanomaterialError};

impl MaterialType {
    pub const ALL: [Self; 9] = [
        Self::MetalOxide,
        Self::Metal,
        Self::CarbonNanotube,
        Self::Graphene,
        Self::Fullerene,
        Self::QuantumDot,
        Self::Dendrimer,
        Self::Polymeric,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MetalOxide => "METALOXIDE",
            Self::Metal => "METAL",
            Self::CarbonNanotube => "CARBONNANOTUBE",
            Self::Graphene => "GRAPHENE",
            Self::Fullerene => "FULLERENE",
            Self::QuantumDot => "QUANTUMDOT",
            Self::Dendrimer => "DENDRIMER",
            Self::Polymeric => "POLYMERIC",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for MaterialType {
    type Err = Box<NanomaterialError>;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|material_type| material_type.name() == name)
            .ok_or_else(|| {
                let known = Self::ALL.iter().map(|t| t.name()).join(", ");
                Box::new(NanomaterialError::unknown_material_type(name, known))
            })
    }
}

impl Display for MaterialType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn display_and_parse() {
        for material_type in MaterialType::ALL {
            let name = material_type.to_string();
            assert_eq!(name.parse::<MaterialType>(), Ok(material_type));
        }
        assert_eq!(MaterialType::MetalOxide.to_string(), "METALOXIDE");
        assert_eq!(MaterialType::default(), MaterialType::Unknown);
    }

    #[test]
    fn unknown_material_types() {
        assert!("metaloxide".parse::<MaterialType>().is_err());
        assert!("METAL_OXIDE".parse::<MaterialType>().is_err());
        assert_snapshot!(
            "ALLOY".parse::<MaterialType>().unwrap_err(),
            @r#"the material type "ALLOY" is not one of the known material types"#
        );
    }
}
