//! Descriptors calculated from a [`Nanomaterial`], along with the provenance attached to their results

mod energy_band;

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::Nanomaterial;

pub use energy_band::{
    BandRule, ENERGY_BAND_RULES, EnergyBandDescriptor, EnergyBands, MINIMUM_RANGE_MAXIMUM,
    MINIMUM_SIZE, lookup_bands,
};

/// A descriptor producing `N` named values for each nanomaterial it's calculated for
pub trait NanomaterialDescriptor<const N: usize> {
    fn names(&self) -> [&'static str; N];

    fn specification(&self) -> &'static DescriptorSpecification;

    fn parameter_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn parameters(&self) -> &[f64] {
        &[]
    }

    fn result_length(&self) -> usize {
        N
    }

    /// Never fails: when a value can't be computed for `material` (or there is no material at all), every entry of
    /// the result is `NaN`
    fn calculate(&self, material: Option<&Nanomaterial<'_>>) -> DescriptorValue<N>;
}

/// Identifies the implementation that produced a [`DescriptorValue`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DescriptorSpecification {
    pub reference: &'static str,
    pub identifier: &'static str,
    pub version: &'static str,
    pub vendor: &'static str,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DescriptorValue<const N: usize> {
    specification: &'static DescriptorSpecification,
    names: [&'static str; N],
    parameter_names: &'static [&'static str],
    values: [f64; N],
}

impl<const N: usize> DescriptorValue<N> {
    #[must_use]
    pub const fn new(
        specification: &'static DescriptorSpecification,
        names: [&'static str; N],
        parameter_names: &'static [&'static str],
        values: [f64; N],
    ) -> Self {
        Self {
            specification,
            names,
            parameter_names,
            values,
        }
    }

    #[must_use]
    pub const fn not_computable(
        specification: &'static DescriptorSpecification,
        names: [&'static str; N],
        parameter_names: &'static [&'static str],
    ) -> Self {
        Self::new(specification, names, parameter_names, [f64::NAN; N])
    }

    #[must_use]
    pub const fn values(&self) -> [f64; N] {
        self.values
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|&n| n == name)
            .map(|i| self.values[i])
    }

    #[must_use]
    pub const fn names(&self) -> [&'static str; N] {
        self.names
    }

    #[must_use]
    pub const fn parameter_names(&self) -> &'static [&'static str] {
        self.parameter_names
    }

    #[must_use]
    pub const fn specification(&self) -> &'static DescriptorSpecification {
        self.specification
    }

    #[must_use]
    pub fn is_computable(&self) -> bool {
        !self.values.iter().any(|v| v.is_nan())
    }
}

impl<const N: usize> Display for DescriptorValue<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs = self
            .names
            .iter()
            .zip(self.values)
            .map(|(name, value)| format!("{name}: {value:?}"))
            .join(", ");
        write!(f, "{pairs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SPECIFICATION: DescriptorSpecification = DescriptorSpecification {
        reference: "urn:test",
        identifier: "tests::Descriptor",
        version: "0.0",
        vendor: "Nobody",
    };

    #[test]
    fn named_values() {
        let value = DescriptorValue::new(&SPECIFICATION, ["A", "B"], &[], [1.5, -2.0]);
        assert_eq!(value.values(), [1.5, -2.0]);
        assert_eq!(value.get("A"), Some(1.5));
        assert_eq!(value.get("B"), Some(-2.0));
        assert_eq!(value.get("C"), None);
        assert!(value.is_computable());
        assert_eq!(value.to_string(), "A: 1.5, B: -2.0");
        assert_eq!(value.specification().vendor, "Nobody");
    }

    #[test]
    fn not_computable() {
        let value = DescriptorValue::not_computable(&SPECIFICATION, ["A", "B"], &[]);
        assert!(value.values().iter().all(|v| v.is_nan()));
        assert!(!value.is_computable());
        assert_eq!(value.to_string(), "A: NaN, B: NaN");
        assert!(value.parameter_names().is_empty());
    }
}
