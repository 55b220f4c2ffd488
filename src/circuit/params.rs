//! Input parameters of a series RLC circuit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validate::validate_parameters;
use crate::error::Result;

/// Default series resistance in ohms.
pub const DEFAULT_RESISTANCE: f64 = 10.0;
/// Default series inductance in henries.
pub const DEFAULT_INDUCTANCE: f64 = 0.1;
/// Default series capacitance in farads.
pub const DEFAULT_CAPACITANCE: f64 = 0.001;
/// Default driving frequency in hertz.
pub const DEFAULT_FREQUENCY: f64 = 50.0;
/// Default source amplitude in volts.
pub const DEFAULT_VOLTAGE: f64 = 100.0;

/// The five scalar inputs of a series RLC circuit driven by a sinusoidal source.
///
/// Values are checked for finiteness on construction. Zero frequency or
/// capacitance is accepted here and rejected by the solver, since both only
/// become a problem once they are used as divisors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParameters {
    resistance: f64,
    inductance: f64,
    capacitance: f64,
    frequency: f64,
    voltage: f64,
}

impl CircuitParameters {
    /// Create a new parameter set.
    ///
    /// # Arguments
    /// * `resistance` - R in ohms
    /// * `inductance` - L in henries (non-negative)
    /// * `capacitance` - C in farads
    /// * `frequency` - f in hertz
    /// * `voltage` - source amplitude V in volts
    pub fn new(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        frequency: f64,
        voltage: f64,
    ) -> Result<Self> {
        let params = Self {
            resistance,
            inductance,
            capacitance,
            frequency,
            voltage,
        };
        validate_parameters(&params)?;
        Ok(params)
    }

    /// Series resistance R (Ω).
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Series inductance L (H).
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Series capacitance C (F).
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Driving frequency f (Hz).
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Source voltage amplitude V (V).
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Duration of one period of the source, 1/f (s).
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    /// Frequency at which XL = XC, 1/(2π√(LC)).
    ///
    /// Returns `None` when L or C is zero, since the reactances can never cancel.
    pub fn resonant_frequency(&self) -> Option<f64> {
        let lc = self.inductance * self.capacitance;
        if lc <= 0.0 {
            return None;
        }
        Some(1.0 / (2.0 * std::f64::consts::PI * lc.sqrt()))
    }
}

impl Default for CircuitParameters {
    fn default() -> Self {
        Self {
            resistance: DEFAULT_RESISTANCE,
            inductance: DEFAULT_INDUCTANCE,
            capacitance: DEFAULT_CAPACITANCE,
            frequency: DEFAULT_FREQUENCY,
            voltage: DEFAULT_VOLTAGE,
        }
    }
}

impl fmt::Display for CircuitParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R={} Ω, L={} H, C={} F, f={} Hz, V={} V",
            self.resistance, self.inductance, self.capacitance, self.frequency, self.voltage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let p = CircuitParameters::default();
        assert_eq!(p.resistance(), 10.0);
        assert_eq!(p.inductance(), 0.1);
        assert_eq!(p.capacitance(), 0.001);
        assert_eq!(p.frequency(), 50.0);
        assert_eq!(p.voltage(), 100.0);
        assert_eq!(CircuitParameters::new(10.0, 0.1, 0.001, 50.0, 100.0).unwrap(), p);
    }

    #[test]
    fn test_period() {
        let p = CircuitParameters::new(1.0, 0.0, 1e-6, 1000.0, 1.0).unwrap();
        assert_relative_eq!(p.period(), 1e-3);
    }

    #[test]
    fn test_resonant_frequency() {
        // 0.1 H, 1 mF: f0 = 1 / (2π * 0.01) ≈ 15.915 Hz
        let p = CircuitParameters::default();
        assert_relative_eq!(p.resonant_frequency().unwrap(), 15.915494309189533, max_relative = 1e-12);

        let no_inductor = CircuitParameters::new(10.0, 0.0, 0.001, 50.0, 100.0).unwrap();
        assert!(no_inductor.resonant_frequency().is_none());
    }

    #[test]
    fn test_zero_divisors_accepted_at_construction() {
        assert!(CircuitParameters::new(10.0, 0.1, 0.0, 50.0, 100.0).is_ok());
        assert!(CircuitParameters::new(10.0, 0.1, 0.001, 0.0, 100.0).is_ok());
    }
}
