//! A model of engineered nanomaterials (their composition, size and surface charge), along with descriptors
//! calculated from that model and its serialization to Chemical Markup Language (CML)

pub mod cml;
pub mod descriptor;
pub mod errors;
pub mod formula;
mod material;
mod material_type;
mod measurement;
pub mod serializer;
mod units;

// External Crate Imports
use derive_more::{Display, From};
use static_assertions::assert_impl_all;

// Re-exports
pub use errors::{NanomaterialError, Result};
pub use formula::{Isotope, MolecularFormula};

// NOTE: For the types in this module, 'c lifetimes indicate references to an externally owned chemical composition
#[derive(Clone, Debug)]
pub struct Nanomaterial<'c> {
    chemical_composition: Option<&'c dyn MolecularFormula>,
    size: Option<Measurement>,
    zeta_potential: Option<Measurement>,
    labels: Vec<String>,
    material_type: MaterialType,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MaterialType {
    MetalOxide,
    Metal,
    CarbonNanotube,
    Graphene,
    Fullerene,
    QuantumDot,
    Dendrimer,
    Polymeric,
    #[default]
    Unknown,
}

// ---------------------------------------------------------------------------------------------------------------------

/// A physical quantity, either a single point value or a closed range, always carrying a unit
#[derive(Clone, PartialEq, Debug)]
pub struct Measurement {
    quantity: Quantity,
    unit: Unit,
    conditions: Vec<Condition>,
    end_point: Option<EndPoint>,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Quantity {
    Value(f64),
    Range { minimum: f64, maximum: f64 },
}

/// The experimental context a measurement was taken under (like the dispersion medium or pH)
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display, From)]
pub struct Condition(String);

/// The boundary or property a measurement describes (like a hydrodynamic or primary particle diameter)
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display, From)]
pub struct EndPoint(String);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Unit {
    Nanometre,
    Micrometre,
    Metre,
    Angstrom,
    ElectronVolt,
    Joule,
    Millivolt,
    Volt,
    Kelvin,
    Celsius,
}

// =====================================================================================================================

assert_impl_all!(Nanomaterial<'static>: Send, Sync);
assert_impl_all!(Measurement: Send, Sync);
assert_impl_all!(Unit: Send, Sync, Copy);
assert_impl_all!(descriptor::DescriptorValue<2>: Send, Sync);
assert_impl_all!(descriptor::EnergyBandDescriptor: Send, Sync);
assert_impl_all!(cml::CmlElement: Send, Sync);
