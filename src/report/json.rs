//! JSON output of a solved circuit.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::circuit::CircuitParameters;
use crate::error::{RlcError, Result};
use crate::solver::{PhasorPair, PowerTriangle, SolutionRecord};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything known about one solve, in a serializable shape.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport<'a> {
    pub format: &'static str,
    pub version: &'static str,
    pub parameters: &'a CircuitParameters,
    pub solution: &'a SolutionRecord,
    pub phase_degrees: f64,
    pub power_factor: f64,
    pub phasors: PhasorPair,
    pub power_triangle: PowerTriangle,
}

impl<'a> SolutionReport<'a> {
    /// Assemble a report for a solved circuit.
    pub fn new(parameters: &'a CircuitParameters, solution: &'a SolutionRecord) -> Self {
        Self {
            format: "rlc-json",
            version: VERSION,
            parameters,
            solution,
            phase_degrees: solution.phase_degrees(),
            power_factor: solution.power_factor(),
            phasors: PhasorPair::from_solution(solution),
            power_triangle: PowerTriangle::from_solution(solution),
        }
    }
}

/// Encode the report as pretty-printed JSON.
pub fn to_json(parameters: &CircuitParameters, solution: &SolutionRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SolutionReport::new(parameters, solution))?)
}

/// Write the JSON report to `path`.
pub fn save_json(parameters: &CircuitParameters, solution: &SolutionRecord, path: &Path) -> Result<()> {
    let _span = tracing::info_span!("save_json", path = %path.display()).entered();
    let json = to_json(parameters, solution)?;
    fs::write(path, json).map_err(|e| RlcError::file_write(path, e))?;
    tracing::debug!("json report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver;

    #[test]
    fn test_json_fields() {
        let params = CircuitParameters::default();
        let solution = solver::solve(&params).unwrap();
        let json = to_json(&params, &solution).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["format"], "rlc-json");
        assert_eq!(value["parameters"]["resistance"], 10.0);
        assert_eq!(value["solution"]["impedance"], solution.impedance());
        assert_eq!(value["solution"]["reactive_power"], solution.reactive_power());
        assert_eq!(value["phasors"]["voltage"]["x"], 100.0);
        assert_eq!(value["power_triangle"]["apparent"], solution.apparent_power());
        assert_eq!(value["power_factor"], solution.power_factor());
        assert_eq!(value["solution"]["voltage"], 100.0);
    }
}
