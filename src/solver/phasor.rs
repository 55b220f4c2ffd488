//! Phasor diagram and power triangle geometry.

use serde::Serialize;

use super::{SolutionRecord, PHASOR_PLOT_MARGIN};

/// A 2-D vector in the complex plane (x = real, y = imaginary).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from polar form.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self {
            x: magnitude * angle.cos(),
            y: magnitude * angle.sin(),
        }
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive real axis (rad).
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Voltage and current phasors, with the voltage as the zero-phase reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhasorPair {
    /// Source voltage phasor (V, 0)
    pub voltage: Vector2,
    /// Current phasor, rotated by -φ
    pub current: Vector2,
}

impl PhasorPair {
    /// Build the phasors from a solved record.
    pub fn from_solution(solution: &SolutionRecord) -> Self {
        Self {
            voltage: Vector2::new(solution.voltage(), 0.0),
            current: Vector2::from_polar(solution.current(), -solution.phase()),
        }
    }

    /// Symmetric axis limits that fit both phasors with a margin.
    pub fn plot_extent(&self) -> PlotExtent {
        PlotExtent {
            x_limit: self.voltage.magnitude() * PHASOR_PLOT_MARGIN,
            y_limit: self.current.magnitude() * PHASOR_PLOT_MARGIN,
        }
    }
}

/// Axis limits for a plot spanning [-x_limit, x_limit] × [-y_limit, y_limit].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotExtent {
    pub x_limit: f64,
    pub y_limit: f64,
}

/// A labelled line segment of the power triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub label: &'static str,
    pub start: Vector2,
    pub end: Vector2,
}

/// The power triangle P, Q, S drawn in the P–Q plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerTriangle {
    /// Real power P (W)
    pub real: f64,
    /// Reactive power Q (VAR)
    pub reactive: f64,
    /// Apparent power S (VA)
    pub apparent: f64,
}

impl PowerTriangle {
    /// Take the three powers from a solved record.
    pub fn from_solution(solution: &SolutionRecord) -> Self {
        Self {
            real: solution.real_power(),
            reactive: solution.reactive_power(),
            apparent: solution.apparent_power(),
        }
    }

    /// P along the real axis, Q vertical at P, and S as the hypotenuse.
    pub fn segments(&self) -> [Segment; 3] {
        let origin = Vector2::default();
        let p = Vector2::new(self.real, 0.0);
        let pq = Vector2::new(self.real, self.reactive);
        [
            Segment { label: "P (W)", start: origin, end: p },
            Segment { label: "Q (VAR)", start: p, end: pq },
            Segment { label: "S (VA)", start: origin, end: pq },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitParameters;
    use crate::solver::PhaseConvention;
    use approx::assert_relative_eq;

    fn reference() -> SolutionRecord {
        SolutionRecord::compute(&CircuitParameters::default(), PhaseConvention::Quadrant).unwrap()
    }

    #[test]
    fn test_phasor_pair() {
        let s = reference();
        let pair = PhasorPair::from_solution(&s);

        assert_eq!(pair.voltage.x, 100.0);
        assert_eq!(pair.voltage.y, 0.0);
        assert_relative_eq!(pair.current.x, s.current() * (-s.phase()).cos(), max_relative = 1e-12);
        assert_relative_eq!(pair.current.y, s.current() * (-s.phase()).sin(), max_relative = 1e-12);
        assert_relative_eq!(pair.current.magnitude(), s.current(), max_relative = 1e-12);
        assert_relative_eq!(pair.current.angle(), -s.phase(), max_relative = 1e-12);
    }

    #[test]
    fn test_plot_extent() {
        let pair = PhasorPair::from_solution(&reference());
        let extent = pair.plot_extent();
        assert_relative_eq!(extent.x_limit, 120.0, max_relative = 1e-12);
        assert_relative_eq!(extent.y_limit, 3.338730564613639 * 1.2, max_relative = 1e-9);
    }

    #[test]
    fn test_power_triangle() {
        let s = reference();
        let tri = PowerTriangle::from_solution(&s);
        let [p, q, hyp] = tri.segments();

        assert_eq!(p.end, Vector2::new(s.real_power(), 0.0));
        assert_eq!(q.start, p.end);
        assert_eq!(q.end, hyp.end);
        assert_relative_eq!(hyp.end.magnitude(), s.apparent_power(), max_relative = 1e-9);
    }

    #[test]
    fn test_voltage_phasor_is_source_amplitude() {
        for i in 1..2000 {
            let v = 0.37 * i as f64;
            let params = CircuitParameters::new(10.0, 0.1, 0.001, 50.0, v).unwrap();
            let s = SolutionRecord::compute(&params, PhaseConvention::Quadrant).unwrap();
            assert_eq!(PhasorPair::from_solution(&s).voltage, Vector2::new(v, 0.0));
        }
    }

    #[test]
    fn test_voltage_phasor_survives_vanishing_current() {
        let params = CircuitParameters::new(1e6, 0.0, 1.0, 1.0, 1e-320).unwrap();
        let s = SolutionRecord::compute(&params, PhaseConvention::Quadrant).unwrap();
        assert_eq!(s.current(), 0.0);
        assert_eq!(PhasorPair::from_solution(&s).voltage.x, 1e-320);
    }
}
