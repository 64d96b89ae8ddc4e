use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = Box<NanomaterialError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, PartialEq, Error)]
pub enum NanomaterialError {
    #[diagnostic(help("unit names are case-sensitive, and must be one of: {known}"))]
    #[error("the unit {name:?} is not one of the known units")]
    UnknownUnit { name: String, known: String },

    #[diagnostic(help("swap the two ends of the range, or measure a single value instead"))]
    #[error("the range {minimum} - {maximum} is invalid, as its minimum must not be greater than its maximum")]
    InvalidRange { minimum: f64, maximum: f64 },

    #[diagnostic(help("material types are case-sensitive, and must be one of: {known}"))]
    #[error("the material type {name:?} is not one of the known material types")]
    UnknownMaterialType { name: String, known: String },
}

impl NanomaterialError {
    pub(crate) fn unknown_unit(name: &str, known: String) -> Self {
        let name = name.to_owned();

        Self::UnknownUnit { name, known }
    }

    pub(crate) const fn invalid_range(minimum: f64, maximum: f64) -> Self {
        Self::InvalidRange { minimum, maximum }
    }

    pub(crate) fn unknown_material_type(name: &str, known: String) -> Self {
        let name = name.to_owned();

        Self::UnknownMaterialType { name, known }
    }
}
