//! Closed-form steady-state solution of a series RLC circuit.

use std::f64::consts::PI;

use serde::Serialize;

use crate::circuit::{check_divisors, CircuitParameters};
use crate::error::Result;

/// How the phase angle is recovered from the net reactance and resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseConvention {
    /// Two-argument arctangent `atan2(XL - XC, R)`.
    ///
    /// Quadrant-correct for negative R, and yields 0 rather than NaN when
    /// both R and the net reactance are zero.
    #[default]
    Quadrant,
    /// Single-argument arctangent `atan((XL - XC) / R)`, limited to (-π/2, π/2).
    Principal,
}

impl PhaseConvention {
    /// Parse a convention from its name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quadrant" | "atan2" => Some(Self::Quadrant),
            "principal" | "atan" => Some(Self::Principal),
            _ => None,
        }
    }

    /// Phase angle in radians for net reactance `x` and resistance `r`.
    pub fn phase(&self, x: f64, r: f64) -> f64 {
        match self {
            PhaseConvention::Quadrant => x.atan2(r),
            PhaseConvention::Principal => (x / r).atan(),
        }
    }
}

/// All quantities derived from one set of [`CircuitParameters`].
///
/// A record is produced by a single solve and never changes afterwards.
/// Angles are stored in radians; use [`SolutionRecord::phase_degrees`]
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolutionRecord {
    voltage: f64,
    omega: f64,
    inductive_reactance: f64,
    capacitive_reactance: f64,
    impedance: f64,
    phase: f64,
    current: f64,
    apparent_power: f64,
    real_power: f64,
    reactive_power: f64,
}

impl SolutionRecord {
    /// Solve the circuit.
    ///
    /// Fails with [`RlcError::DivisionByZero`](crate::RlcError::DivisionByZero)
    /// when the frequency or the capacitance is zero.
    pub fn compute(params: &CircuitParameters, convention: PhaseConvention) -> Result<Self> {
        check_divisors(params)?;

        let r = params.resistance();
        let v = params.voltage();

        let omega = 2.0 * PI * params.frequency();
        let inductive_reactance = omega * params.inductance();
        let capacitive_reactance = 1.0 / (omega * params.capacitance());

        let x = inductive_reactance - capacitive_reactance;
        let impedance = r.hypot(x);
        let phase = convention.phase(x, r);

        // A shorted, undriven circuit carries no current
        let current = if impedance == 0.0 && v == 0.0 {
            0.0
        } else {
            v / impedance
        };

        let apparent_power = v * current;
        let real_power = apparent_power * phase.cos();
        let reactive_power = apparent_power * phase.sin();

        Ok(Self {
            voltage: v,
            omega,
            inductive_reactance,
            capacitive_reactance,
            impedance,
            phase,
            current,
            apparent_power,
            real_power,
            reactive_power,
        })
    }

    /// Source voltage amplitude V the circuit was solved for (V).
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Angular frequency ω = 2πf (rad/s).
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Inductive reactance XL = ωL (Ω).
    pub fn inductive_reactance(&self) -> f64 {
        self.inductive_reactance
    }

    /// Capacitive reactance XC = 1/(ωC) (Ω).
    pub fn capacitive_reactance(&self) -> f64 {
        self.capacitive_reactance
    }

    /// Net reactance XL - XC (Ω).
    pub fn net_reactance(&self) -> f64 {
        self.inductive_reactance - self.capacitive_reactance
    }

    /// Impedance magnitude Z (Ω).
    pub fn impedance(&self) -> f64 {
        self.impedance
    }

    /// Phase angle φ between voltage and current (rad).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase angle φ in degrees.
    pub fn phase_degrees(&self) -> f64 {
        self.phase.to_degrees()
    }

    /// Current amplitude I = V/Z (A).
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Apparent power S = V·I (VA).
    pub fn apparent_power(&self) -> f64 {
        self.apparent_power
    }

    /// Real power P = S·cos φ (W).
    pub fn real_power(&self) -> f64 {
        self.real_power
    }

    /// Reactive power Q = S·sin φ (VAR).
    pub fn reactive_power(&self) -> f64 {
        self.reactive_power
    }

    /// Power factor cos φ.
    pub fn power_factor(&self) -> f64 {
        self.phase.cos()
    }

    /// Current lags voltage.
    pub fn is_inductive(&self) -> bool {
        self.net_reactance() > 0.0
    }

    /// Current leads voltage.
    pub fn is_capacitive(&self) -> bool {
        self.net_reactance() < 0.0
    }
}
