//! Parameter validation.

use crate::error::{Divisor, RlcError, Result};

use super::CircuitParameters;

/// Validate a parameter set on construction.
///
/// Checks:
/// - All five values are finite
/// - Inductance is non-negative
pub fn validate_parameters(params: &CircuitParameters) -> Result<()> {
    let values = [
        ("R", params.resistance()),
        ("L", params.inductance()),
        ("C", params.capacitance()),
        ("f", params.frequency()),
        ("V", params.voltage()),
    ];

    for (name, value) in values {
        if !value.is_finite() {
            return Err(RlcError::invalid_parameter(
                name,
                format!("must be finite (got {value})"),
            ));
        }
    }

    if params.inductance() < 0.0 {
        return Err(RlcError::invalid_parameter(
            "L",
            format!("must be non-negative (got {})", params.inductance()),
        ));
    }

    Ok(())
}

/// Check the two quantities that the solver divides by.
///
/// Frequency is checked first: with f = 0 the angular frequency is zero and
/// the capacitive reactance is undefined regardless of C.
pub fn check_divisors(params: &CircuitParameters) -> Result<()> {
    if params.frequency() == 0.0 {
        return Err(RlcError::division_by_zero(Divisor::Frequency));
    }

    if params.capacitance() == 0.0 {
        return Err(RlcError::division_by_zero(Divisor::Capacitance));
    }

    Ok(())
}
