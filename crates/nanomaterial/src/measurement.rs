use std::fmt::{self, Display, Formatter};

use crate::{Condition, EndPoint, Measurement, NanomaterialError, Quantity, Result, Unit};

// Construction ========================================================================================================

impl Measurement {
    #[must_use]
    pub const fn value(magnitude: f64, unit: Unit) -> Self {
        Self::new(Quantity::Value(magnitude), unit)
    }

    /// Like [`Measurement::value`], but looks the unit up by its enumerated name (like `"NM"`)
    pub fn value_in(magnitude: f64, unit_name: &str) -> Result<Self> {
        let unit = unit_name.parse()?;
        Ok(Self::value(magnitude, unit))
    }

    pub fn range(minimum: f64, maximum: f64, unit: Unit) -> Result<Self> {
        let quantity = Quantity::range(minimum, maximum)?;
        Ok(Self::new(quantity, unit))
    }

    /// Like [`Measurement::range`], but looks the unit up by its enumerated name (like `"NM"`)
    pub fn range_in(minimum: f64, maximum: f64, unit_name: &str) -> Result<Self> {
        let unit = unit_name.parse()?;
        Self::range(minimum, maximum, unit)
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    #[must_use]
    pub fn with_end_point(mut self, end_point: impl Into<EndPoint>) -> Self {
        self.end_point = Some(end_point.into());
        self
    }

    /// Replaces this measurement with the range `minimum - maximum`, leaving it untouched if the range is invalid
    pub fn set_values(&mut self, minimum: f64, maximum: f64, unit: Unit) -> Result<()> {
        self.quantity = Quantity::range(minimum, maximum)?;
        self.unit = unit;
        Ok(())
    }

    /// Like [`Measurement::set_values`], but looks the unit up by its enumerated name (like `"NM"`)
    pub fn set_values_by_name(&mut self, minimum: f64, maximum: f64, unit_name: &str) -> Result<()> {
        let unit = unit_name.parse()?;
        self.set_values(minimum, maximum, unit)
    }

    const fn new(quantity: Quantity, unit: Unit) -> Self {
        Self {
            quantity,
            unit,
            conditions: Vec::new(),
            end_point: None,
        }
    }
}

impl Quantity {
    fn range(minimum: f64, maximum: f64) -> Result<Self> {
        // NOTE: Written as a negation so that NaN bounds (which compare false with everything) are also rejected
        if !(minimum <= maximum) {
            return Err(Box::new(NanomaterialError::invalid_range(minimum, maximum)));
        }
        Ok(Self::Range { minimum, maximum })
    }
}

// Accessors ===========================================================================================================

impl Measurement {
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub const fn end_point(&self) -> Option<&EndPoint> {
        self.end_point.as_ref()
    }

    /// The magnitude of a point value, or `None` for ranges
    #[must_use]
    pub const fn magnitude(&self) -> Option<f64> {
        match self.quantity {
            Quantity::Value(magnitude) => Some(magnitude),
            Quantity::Range { .. } => None,
        }
    }

    /// The `(minimum, maximum)` of a range, or `None` for point values
    #[must_use]
    pub const fn bounds(&self) -> Option<(f64, f64)> {
        match self.quantity {
            Quantity::Value(_) => None,
            Quantity::Range { minimum, maximum } => Some((minimum, maximum)),
        }
    }
}

// Display Trait Implementation ========================================================================================

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let unit = self.unit;
        // NOTE: `Debug` is used for the numbers so that whole values keep their trailing `.0`
        match self.quantity {
            Quantity::Value(magnitude) => write!(f, "{magnitude:?} {unit}"),
            Quantity::Range { minimum, maximum } => write!(f, "{minimum:?} - {maximum:?} {unit}"),
        }
    }
}

impl Condition {
    pub fn new(condition: impl Into<String>) -> Self {
        Self(condition.into())
    }
}

impl EndPoint {
    pub fn new(end_point: impl Into<String>) -> Self {
        Self(end_point.into())
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn measurement_display() {
        assert_eq!(Measurement::value(25.0, Unit::Nanometre).to_string(), "25.0 nm");
        assert_eq!(Measurement::value(-31.5, Unit::Millivolt).to_string(), "-31.5 mV");
        assert_eq!(
            Measurement::range(10.0, 25.0, Unit::Nanometre).unwrap().to_string(),
            "10.0 - 25.0 nm"
        );
        assert_eq!(
            Measurement::range(0.5, 0.5, Unit::ElectronVolt).unwrap().to_string(),
            "0.5 - 0.5 eV"
        );
    }

    #[test]
    fn construction_by_unit_name() {
        let typed = Measurement::value(25.0, Unit::Nanometre);
        let named = Measurement::value_in(25.0, "NM").unwrap();
        assert_eq!(named.unit(), typed.unit());
        assert_eq!(named, typed);

        let typed = Measurement::range(10.0, 40.0, Unit::ElectronVolt).unwrap();
        let named = Measurement::range_in(10.0, 40.0, "EV").unwrap();
        assert_eq!(named, typed);

        assert!(matches!(
            *Measurement::value_in(25.0, "BOGUS").unwrap_err(),
            NanomaterialError::UnknownUnit { ref name, .. } if name == "BOGUS"
        ));
        assert!(matches!(
            *Measurement::range_in(10.0, 25.0, "nm").unwrap_err(),
            NanomaterialError::UnknownUnit { .. }
        ));
    }

    #[test]
    fn invalid_ranges() {
        assert_eq!(
            *Measurement::range(25.0, 10.0, Unit::Nanometre).unwrap_err(),
            NanomaterialError::InvalidRange {
                minimum: 25.0,
                maximum: 10.0
            }
        );
        assert!(Measurement::range(f64::NAN, 10.0, Unit::Nanometre).is_err());
        assert!(Measurement::range(10.0, f64::NAN, Unit::Nanometre).is_err());
        assert_snapshot!(
            Measurement::range(25.0, 10.0, Unit::Nanometre).unwrap_err(),
            @"the range 25 - 10 is invalid, as its minimum must not be greater than its maximum"
        );
        // An unknown unit is reported before the range is checked
        assert!(matches!(
            *Measurement::range_in(25.0, 10.0, "BOGUS").unwrap_err(),
            NanomaterialError::UnknownUnit { .. }
        ));
    }

    #[test]
    fn accessors() {
        let value = Measurement::value(25.0, Unit::Nanometre);
        assert_eq!(value.quantity(), Quantity::Value(25.0));
        assert_eq!(value.magnitude(), Some(25.0));
        assert_eq!(value.bounds(), None);

        let range = Measurement::range(10.0, 40.0, Unit::Nanometre).unwrap();
        assert_eq!(
            range.quantity(),
            Quantity::Range {
                minimum: 10.0,
                maximum: 40.0
            }
        );
        assert_eq!(range.magnitude(), None);
        assert_eq!(range.bounds(), Some((10.0, 40.0)));
    }

    #[test]
    fn annotations() {
        let measurement = Measurement::value(-25.0, Unit::Millivolt)
            .with_conditions([Condition::new("pH 7"), Condition::new("water")])
            .with_end_point(EndPoint::new("zeta potential"));
        assert_eq!(
            measurement.conditions(),
            [Condition::new("pH 7"), Condition::new("water")]
        );
        assert_eq!(measurement.end_point(), Some(&EndPoint::new("zeta potential")));
        assert_eq!(measurement.conditions()[1].to_string(), "water");

        let bare = Measurement::value(-25.0, Unit::Millivolt);
        assert!(bare.conditions().is_empty());
        assert_eq!(bare.end_point(), None);
        // Annotations don't change how the measurement itself is rendered
        assert_eq!(measurement.to_string(), bare.to_string());
    }

    #[test]
    fn bulk_setters() {
        let mut measurement = Measurement::value(25.0, Unit::Nanometre);
        measurement.set_values(10.0, 40.0, Unit::Micrometre).unwrap();
        assert_eq!(measurement.to_string(), "10.0 - 40.0 µm");

        measurement.set_values_by_name(1.0, 2.0, "EV").unwrap();
        assert_eq!(measurement.to_string(), "1.0 - 2.0 eV");

        // Failed updates leave the measurement as it was
        assert!(measurement.set_values(3.0, 2.0, Unit::Nanometre).is_err());
        assert!(measurement.set_values_by_name(1.0, 3.0, "BOGUS").is_err());
        assert_eq!(measurement.to_string(), "1.0 - 2.0 eV");
    }
}
