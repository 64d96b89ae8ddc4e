use crate::{MaterialType, Measurement, MolecularFormula, Nanomaterial};

impl<'c> Nanomaterial<'c> {
    #[must_use]
    pub const fn new(material_type: MaterialType) -> Self {
        Self {
            chemical_composition: None,
            size: None,
            zeta_potential: None,
            labels: Vec::new(),
            material_type,
        }
    }

    #[must_use]
    pub fn with_composition(mut self, chemical_composition: &'c dyn MolecularFormula) -> Self {
        self.set_chemical_composition(chemical_composition);
        self
    }

    pub fn set_chemical_composition(&mut self, chemical_composition: &'c dyn MolecularFormula) {
        self.chemical_composition = Some(chemical_composition);
    }

    pub fn set_size(&mut self, size: Measurement) {
        self.size = Some(size);
    }

    pub fn set_zeta_potential(&mut self, zeta_potential: Measurement) {
        self.zeta_potential = Some(zeta_potential);
    }

    /// Appends a label, keeping any earlier labels (including identical ones)
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    pub fn set_material_type(&mut self, material_type: MaterialType) {
        self.material_type = material_type;
    }

    #[must_use]
    pub fn chemical_composition(&self) -> Option<&'c dyn MolecularFormula> {
        self.chemical_composition
    }

    #[must_use]
    pub const fn size(&self) -> Option<&Measurement> {
        self.size.as_ref()
    }

    #[must_use]
    pub const fn zeta_potential(&self) -> Option<&Measurement> {
        self.zeta_potential.as_ref()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub const fn material_type(&self) -> MaterialType {
        self.material_type
    }
}

impl Default for Nanomaterial<'_> {
    fn default() -> Self {
        Self::new(MaterialType::default())
    }
}

#[cfg(test)]
mod tests {
    use composition::{AtomicDatabase, ChemicalComposition};
    use once_cell::sync::Lazy;

    use super::*;
    use crate::Unit;

    static DB: Lazy<AtomicDatabase> = Lazy::new(AtomicDatabase::default);

    #[test]
    fn building_a_material() {
        let zinc_oxide = ChemicalComposition::new(&DB, "ZnO").unwrap();
        let mut material = Nanomaterial::new(MaterialType::MetalOxide).with_composition(&zinc_oxide);
        material.set_size(Measurement::value(25.0, Unit::Nanometre));
        material.set_zeta_potential(Measurement::value(-25.0, Unit::Millivolt));
        material.add_label("ZnO-1");
        material.add_label("zinc oxide");
        material.add_label("ZnO-1");

        assert_eq!(material.material_type(), MaterialType::MetalOxide);
        assert_eq!(material.chemical_composition().unwrap().to_string(), "ZnO");
        assert_eq!(material.size(), Some(&Measurement::value(25.0, Unit::Nanometre)));
        assert_eq!(
            material.zeta_potential().map(ToString::to_string).as_deref(),
            Some("-25.0 mV")
        );
        assert_eq!(material.labels(), ["ZnO-1", "zinc oxide", "ZnO-1"]);
    }

    #[test]
    fn empty_material() {
        let material = Nanomaterial::default();
        assert_eq!(material.material_type(), MaterialType::Unknown);
        assert!(material.chemical_composition().is_none());
        assert!(material.size().is_none());
        assert!(material.zeta_potential().is_none());
        assert!(material.labels().is_empty());

        let mut material = Nanomaterial::new(MaterialType::Metal);
        material.set_material_type(MaterialType::Fullerene);
        assert_eq!(material.material_type(), MaterialType::Fullerene);
    }

    #[test]
    fn replacing_measurements() {
        let mut material = Nanomaterial::new(MaterialType::MetalOxide);
        material.set_size(Measurement::value(25.0, Unit::Nanometre));
        material.set_size(Measurement::range(10.0, 40.0, Unit::Nanometre).unwrap());
        assert_eq!(material.size().unwrap().to_string(), "10.0 - 40.0 nm");
    }
}
