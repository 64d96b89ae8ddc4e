use tracing::debug;

use super::{DescriptorSpecification, DescriptorValue, NanomaterialDescriptor};
use crate::{Measurement, MolecularFormula, Nanomaterial, Quantity};

/// Size ranges whose maximum falls below this are too small for the bulk band energies to apply
pub const MINIMUM_RANGE_MAXIMUM: f64 = 30.0;
/// Point sizes below this are too small for the bulk band energies to apply
pub const MINIMUM_SIZE: f64 = 20.0;

const NAMES: [&str; 2] = ["CBandE", "VBandE"];

static SPECIFICATION: DescriptorSpecification = DescriptorSpecification {
    reference: "http://egonw.github.com/resource/NM_001001",
    identifier: "nanomaterial::descriptor::EnergyBandDescriptor",
    version: "1.0",
    vendor: "The NanoJava Project",
};

/// Conduction and valence band energies, in electronvolts
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EnergyBands {
    pub conduction: f64,
    pub valence: f64,
}

/// Matches an element of an oxide, with `oxygen_count` oxygens and (when given) `element_count` atoms of the element
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BandRule {
    pub element: &'static str,
    pub oxygen_count: u32,
    pub element_count: Option<u32>,
    pub bands: EnergyBands,
}

const fn rule(
    element: &'static str,
    oxygen_count: u32,
    element_count: Option<u32>,
    conduction: f64,
    valence: f64,
) -> BandRule {
    BandRule {
        element,
        oxygen_count,
        element_count,
        bands: EnergyBands {
            conduction,
            valence,
        },
    }
}

pub static ENERGY_BAND_RULES: [BandRule; 8] = [
    rule("Zn", 1, None, -3.7, -7.25),
    rule("Cu", 1, Some(1), -4.7, -6.7),
    rule("Cu", 1, Some(2), -4.4, -5.6),
    rule("Ti", 2, None, -4.2, -7.5),
    rule("Ti", 1, None, -1.8, -8.0),
    rule("Fe", 1, None, -4.25, -6.8),
    rule("Fe", 3, None, -4.25, -7.6),
    rule("Fe", 4, None, -5.7, -5.8),
];

/// Finds the band energies of the first rule matching `element`, given the number of oxygens in the whole formula and
/// the total number of atoms of `element` (counting every one of its isotopes)
#[must_use]
pub fn lookup_bands(element: &str, oxygen_count: u32, element_count: u32) -> Option<EnergyBands> {
    ENERGY_BAND_RULES
        .iter()
        .find(|rule| {
            rule.element == element
                && rule.oxygen_count == oxygen_count
                && rule.element_count.is_none_or(|count| count == element_count)
        })
        .map(|rule| rule.bands)
}

/// Estimates the conduction and valence band energies of binary metal oxides from a small table of bulk values
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct EnergyBandDescriptor;

impl NanomaterialDescriptor<2> for EnergyBandDescriptor {
    fn names(&self) -> [&'static str; 2] {
        NAMES
    }

    fn specification(&self) -> &'static DescriptorSpecification {
        &SPECIFICATION
    }

    fn calculate(&self, material: Option<&Nanomaterial<'_>>) -> DescriptorValue<2> {
        let Some(bands) = material.and_then(energy_bands) else {
            return DescriptorValue::not_computable(&SPECIFICATION, NAMES, &[]);
        };
        let values = [bands.conduction, bands.valence];
        DescriptorValue::new(&SPECIFICATION, NAMES, &[], values)
    }
}

fn energy_bands(material: &Nanomaterial<'_>) -> Option<EnergyBands> {
    let Some(formula) = material.chemical_composition() else {
        debug!("the nanomaterial has no chemical composition");
        return None;
    };

    let distinct_elements = formula.distinct_elements();
    if distinct_elements != 2 {
        debug!(%formula, distinct_elements, "only binary compounds have known band energies");
        return None;
    }

    if let Some(size) = material.size() {
        if too_small(size) {
            debug!(%formula, %size, "the nanomaterial is too small for bulk band energies");
            return None;
        }
    }

    first_matching_rule(formula)
}

// NOTE: The unit of `size` is never consulted, so a size of 25 µm passes the same as one of 25 nm
fn too_small(size: &Measurement) -> bool {
    match size.quantity() {
        Quantity::Value(magnitude) => magnitude < MINIMUM_SIZE,
        Quantity::Range { maximum, .. } => maximum < MINIMUM_RANGE_MAXIMUM,
    }
}

fn first_matching_rule(formula: &dyn MolecularFormula) -> Option<EnergyBands> {
    let oxygen_count = formula.element_count("O");
    for isotope in formula.isotopes() {
        let element_count = formula.element_count(isotope.symbol);
        if let Some(bands) = lookup_bands(isotope.symbol, oxygen_count, element_count) {
            debug!(
                %formula,
                element = isotope.symbol,
                oxygen_count,
                element_count,
                ?bands,
                "matched a band energy rule"
            );
            return Some(bands);
        }
    }
    debug!(%formula, oxygen_count, "no band energy rule matches this composition");
    None
}
