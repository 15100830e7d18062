use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar held inside the closed unit interval `[0, 1]`.
///
/// Every constructor and update clamps, and NaN collapses to `0.0`, so a
/// value of this type can never drift out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct UnitInterval(f64);

impl UnitInterval {
    pub const ZERO: UnitInterval = UnitInterval(0.0);
    pub const ONE: UnitInterval = UnitInterval(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Shift by `delta`, clamping the result.
    pub fn nudge(&mut self, delta: f64) {
        *self = Self::new(self.0 + delta);
    }
}

impl From<f64> for UnitInterval {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitInterval> for f64 {
    fn from(value: UnitInterval) -> Self {
        value.0
    }
}

/// Clamp a raw gene or score into `[0, 1]`, mapping NaN to `0.0`.
pub fn clamp_unit(value: f64) -> f64 {
    UnitInterval::new(value).get()
}

/// Opaque identifier, unique within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndividualId(pub u64);

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_clamps() {
        assert_eq!(UnitInterval::new(1.7).get(), 1.0);
        assert_eq!(UnitInterval::new(-0.2).get(), 0.0);
        assert_eq!(UnitInterval::new(f64::NAN).get(), 0.0);
        assert_eq!(UnitInterval::new(0.25).get(), 0.25);
    }

    #[test]
    fn test_nudge_stays_in_bounds() {
        let mut value = UnitInterval::new(0.98);
        value.nudge(0.05);
        assert_eq!(value, UnitInterval::ONE);

        value.nudge(-3.0);
        assert_eq!(value, UnitInterval::ZERO);
    }

    #[test]
    fn test_deserialize_clamps() {
        let value: UnitInterval = serde_json::from_str("4.5").unwrap();
        assert_eq!(value, UnitInterval::ONE);
    }
}
