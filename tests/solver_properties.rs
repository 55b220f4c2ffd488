//! End-to-end checks of the solver's physical identities.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rlc_core::report::{self, document, spreadsheet};
use rlc_core::{
    phasor_vectors, sample_waveform, solve, CircuitParameters, CircuitSolver, Divisor,
    PhaseConvention, RlcError, SolverConfig,
};

fn circuits() -> Vec<CircuitParameters> {
    let mut out = Vec::new();
    for &r in &[0.5, 10.0, 1_000.0] {
        for &l in &[0.0, 1e-3, 0.1, 2.0] {
            for &c in &[1e-9, 1e-6, 1e-3] {
                for &f in &[1.0, 50.0, 60.0, 10_000.0] {
                    out.push(CircuitParameters::new(r, l, c, f, 230.0).unwrap());
                }
            }
        }
    }
    out
}

#[test]
fn solve_is_deterministic() {
    for params in circuits() {
        let a = solve(&params).unwrap();
        let b = solve(&params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.phase().to_bits(), b.phase().to_bits());
    }
}

#[test]
fn power_triangle_identity_holds() {
    for params in circuits() {
        let s = solve(&params).unwrap();
        let lhs = s.apparent_power().powi(2);
        let rhs = s.real_power().powi(2) + s.reactive_power().powi(2);
        assert_relative_eq!(lhs, rhs, max_relative = 1e-9);
    }
}

#[test]
fn impedance_is_non_negative() {
    for params in circuits() {
        let s = solve(&params).unwrap();
        let floor = params.resistance().abs().max(s.net_reactance().abs());
        assert!(s.impedance() > 0.0);
        assert!(s.impedance() >= floor * (1.0 - 1e-12));
    }
}

#[test]
fn resonance_is_purely_resistive() {
    let base = CircuitParameters::new(10.0, 0.1, 0.001, 50.0, 100.0).unwrap();
    let f0 = base.resonant_frequency().unwrap();
    let params = CircuitParameters::new(10.0, 0.1, 0.001, f0, 100.0).unwrap();
    let s = solve(&params).unwrap();

    assert_relative_eq!(s.inductive_reactance(), s.capacitive_reactance(), max_relative = 1e-12);
    assert_abs_diff_eq!(s.phase(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.reactive_power(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(s.impedance(), 10.0, max_relative = 1e-12);
    assert_relative_eq!(s.real_power(), s.apparent_power(), max_relative = 1e-12);
    assert_relative_eq!(s.current(), 10.0, max_relative = 1e-12);
}

#[test]
fn zero_divisors_are_rejected() {
    let no_freq = CircuitParameters::new(10.0, 0.1, 0.001, 0.0, 100.0).unwrap();
    let err = solve(&no_freq).unwrap_err();
    assert!(matches!(err, RlcError::DivisionByZero { quantity: Divisor::Frequency }));

    let no_cap = CircuitParameters::new(10.0, 0.1, 0.0, 50.0, 100.0).unwrap();
    let err = solve(&no_cap).unwrap_err();
    assert!(matches!(err, RlcError::DivisionByZero { quantity: Divisor::Capacitance }));

    // Both conventions share the guard
    let solver = CircuitSolver::with_config(
        SolverConfig::new().with_phase_convention(PhaseConvention::Principal),
    );
    assert!(solver.solve(&no_cap).unwrap_err().is_division_by_zero());
}

#[test]
fn reference_scenario() {
    let params = CircuitParameters::new(10.0, 0.1, 0.001, 50.0, 100.0).unwrap();
    let s = solve(&params).unwrap();

    assert_abs_diff_eq!(s.omega(), 314.159, epsilon = 1e-3);
    assert_abs_diff_eq!(s.inductive_reactance(), 31.416, epsilon = 1e-3);
    assert_abs_diff_eq!(s.capacitive_reactance(), 3.183, epsilon = 1e-3);
    assert_abs_diff_eq!(s.impedance(), 29.95, epsilon = 1e-2);
    assert_abs_diff_eq!(s.phase(), 1.2304, epsilon = 1e-4);
    assert_abs_diff_eq!(s.phase_degrees(), 70.50, epsilon = 1e-2);
    assert_abs_diff_eq!(s.current(), 3.339, epsilon = 1e-3);
    assert_abs_diff_eq!(s.apparent_power(), 333.87, epsilon = 1e-2);
    assert_abs_diff_eq!(s.real_power(), 111.47, epsilon = 1e-2);
    assert_abs_diff_eq!(s.reactive_power(), 314.71, epsilon = 1e-2);
}

#[test]
fn waveform_covers_one_period() {
    let params = CircuitParameters::new(10.0, 0.1, 0.001, 50.0, 100.0).unwrap();
    let s = solve(&params).unwrap();
    let samples: Vec<_> = sample_waveform(&params, &s, 500).unwrap().into_iter().collect();

    assert_eq!(samples.len(), 500);
    assert_abs_diff_eq!(samples[0].voltage, 0.0, epsilon = 1e-12);

    // Positive half cycle then negative half cycle, like sin(ωt)
    assert!(samples[1..250].iter().all(|x| x.voltage > 0.0));
    assert!(samples[251..].iter().all(|x| x.voltage < 0.0));

    // Current amplitude never exceeds I
    assert!(samples.iter().all(|x| x.current.abs() <= s.current() + 1e-12));
}

#[test]
fn phasors_follow_phase() {
    let params = CircuitParameters::new(10.0, 0.1, 0.001, 50.0, 100.0).unwrap();
    let s = solve(&params).unwrap();
    let pair = phasor_vectors(&s);

    assert_relative_eq!(pair.voltage.x, 100.0, max_relative = 1e-12);
    assert_eq!(pair.voltage.y, 0.0);
    // Inductive circuit: current lags, so its phasor sits below the real axis
    assert!(pair.current.y < 0.0);
    assert_relative_eq!(pair.current.magnitude(), s.current(), max_relative = 1e-12);
}

#[test]
fn exports_take_a_solved_record() {
    let params = CircuitParameters::default();
    let s = solve(&params).unwrap();

    let mut doc = Vec::new();
    document::write_document(&s, &mut doc).unwrap();
    let mut table = Vec::new();
    spreadsheet::write_spreadsheet(&s, &mut table).unwrap();

    let doc = String::from_utf8(doc).unwrap();
    let table = String::from_utf8(table).unwrap();
    assert_eq!(doc.lines().count(), report::rows(&s).len() + 1);
    assert_eq!(table.lines().count(), report::rows(&s).len() + 1);
    assert!(doc.contains("Q (VAR): 314.71"));
}
