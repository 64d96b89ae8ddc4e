//! Converts a [`Nanomaterial`] into a CML `molecule` element
//!
//! The element names, attributes and dictionary references written here are read by other CML tools, so they
//! should be treated as a stable format.

use tracing::trace;

use crate::{Measurement, MolecularFormula, Nanomaterial, Quantity, Unit, cml::CmlElement};

pub const NANO_NAMESPACE: &str = "http://example.org/nano#";
pub const QUDT_NAMESPACE: &str = "http://example.org/qudt#";

// Public API ==========================================================================================================

#[must_use]
pub fn to_cml(material: &Nanomaterial<'_>) -> CmlElement {
    let mut molecule = CmlElement::new("molecule");
    molecule
        .set_attribute("convention", "nano:material")
        .add_namespace_declaration("nano", NANO_NAMESPACE)
        .add_namespace_declaration("qudt", QUDT_NAMESPACE);

    if let Some(formula) = material.chemical_composition() {
        molecule.append_child(CmlElement::new("formula").with_attribute("inline", formula.hill_formula()));
    }

    for label in material.labels() {
        molecule.append_child(CmlElement::new("name").with_text(label));
    }

    molecule.append_child(
        CmlElement::new("scalar")
            .with_attribute("dataType", "xsd:string")
            .with_attribute("dictRef", "nano:type")
            .with_text(material.material_type().to_string()),
    );

    if let Some(size) = material.size() {
        append_property(&mut molecule, "nano:dimension", size, Unit::Nanometre, "qudt:nm");
    }

    if let Some(zeta_potential) = material.zeta_potential() {
        append_property(
            &mut molecule,
            "nano:zetaPotential",
            zeta_potential,
            Unit::ElectronVolt,
            "qudt:eV",
        );
    }

    molecule
}

/// Wraps the `molecule` of each material, in order, in a single CML `list`
#[must_use]
pub fn to_cml_list<'m, 'c: 'm>(materials: impl IntoIterator<Item = &'m Nanomaterial<'c>>) -> CmlElement {
    materials
        .into_iter()
        .fold(CmlElement::new("list"), |list, material| list.with_child(to_cml(material)))
}

#[must_use]
pub fn to_cml_string(material: &Nanomaterial<'_>) -> String {
    to_cml(material).to_xml()
}

// Private Helper Functions ============================================================================================

// FIXME: Only point values are written out for now; ranges need a CML representation (likely a `minValue` and
// `maxValue` pair on the scalar) before they can be serialized
fn append_property(
    molecule: &mut CmlElement,
    dict_ref: &str,
    measurement: &Measurement,
    qudt_unit: Unit,
    qudt_name: &str,
) {
    let Quantity::Value(magnitude) = measurement.quantity() else {
        trace!(dict_ref, %measurement, "skipping a ranged property");
        return;
    };

    let mut scalar = CmlElement::new("scalar")
        .with_attribute("dataType", "xsd:double")
        .with_text(format!("{magnitude:?}"));
    if measurement.unit() == qudt_unit {
        scalar.set_attribute("units", qudt_name);
    }

    molecule.append_child(
        CmlElement::new("property")
            .with_attribute("dictRef", dict_ref)
            .with_child(scalar),
    );
}

// Module Tests ========================================================================================================
