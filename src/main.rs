//! RLC - Series RLC AC circuit analyzer
//!
//! Solves a series RLC circuit driven by a sinusoidal source and exports
//! the results.
//!
//! # Usage
//!
//! ```bash
//! rlc -r 10 -l 0.1 -c 0.001 -f 50 -v 100 --spreadsheet rlc_results.csv
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rlc_core::{
    circuit::{
        DEFAULT_CAPACITANCE, DEFAULT_FREQUENCY, DEFAULT_INDUCTANCE, DEFAULT_RESISTANCE,
        DEFAULT_VOLTAGE,
    },
    error::Result,
    report::{self, document, json, spreadsheet, workbook},
    solver::DEFAULT_WAVEFORM_POINTS,
    CircuitParameters, CircuitSolver, PhaseConvention, SolverConfig,
};

/// Series RLC circuit analyzer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resistance R in ohms
    #[arg(short = 'r', long, default_value_t = DEFAULT_RESISTANCE, allow_hyphen_values = true)]
    resistance: f64,

    /// Inductance L in henries
    #[arg(short = 'l', long, default_value_t = DEFAULT_INDUCTANCE)]
    inductance: f64,

    /// Capacitance C in farads
    #[arg(short = 'c', long, default_value_t = DEFAULT_CAPACITANCE)]
    capacitance: f64,

    /// Source frequency f in hertz
    #[arg(short = 'f', long, default_value_t = DEFAULT_FREQUENCY)]
    frequency: f64,

    /// Source voltage amplitude V in volts
    #[arg(short = 'v', long, default_value_t = DEFAULT_VOLTAGE, allow_hyphen_values = true)]
    voltage: f64,

    /// Waveform samples per period
    #[arg(short = 'n', long, default_value_t = DEFAULT_WAVEFORM_POINTS)]
    points: usize,

    /// Use the single-argument arctangent for the phase angle
    #[arg(long)]
    principal_phase: bool,

    /// Write the results document to this path
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = document::DEFAULT_DOCUMENT_PATH)]
    document: Option<PathBuf>,

    /// Write the results table (CSV) to this path
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = spreadsheet::DEFAULT_SPREADSHEET_PATH)]
    spreadsheet: Option<PathBuf>,

    /// Write the results table as an .xlsx workbook to this path
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = workbook::DEFAULT_WORKBOOK_PATH)]
    workbook: Option<PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write the sampled waveforms (CSV) to this path
    #[arg(long, value_name = "PATH")]
    waveform: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // Build the parameters
    let params = CircuitParameters::new(
        args.resistance,
        args.inductance,
        args.capacitance,
        args.frequency,
        args.voltage,
    )?;
    tracing::info!(%params, "solving circuit");

    // Create solver
    let convention = if args.principal_phase {
        PhaseConvention::Principal
    } else {
        PhaseConvention::Quadrant
    };
    let config = SolverConfig::new()
        .with_phase_convention(convention)
        .with_waveform_points(args.points);
    let solver = CircuitSolver::with_config(config);

    // Solve
    let solution = solver.solve(&params)?;
    let waveform = solver.sample_waveform(&params, &solution)?;
    let phasors = solver.phasor_vectors(&solution);
    let triangle = solver.power_triangle(&solution);

    // Report
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_steps(&solution, &mut out)?;
    writeln!(out)?;
    writeln!(
        out,
        "Power triangle: P = {:.2} W, Q = {:.2} VAR, S = {:.2} VA, pf = {:.3}",
        triangle.real,
        triangle.reactive,
        triangle.apparent,
        solution.power_factor()
    )?;
    writeln!(
        out,
        "Phasors: V = ({:.2}, {:.2}), I = ({:.3}, {:.3})",
        phasors.voltage.x, phasors.voltage.y, phasors.current.x, phasors.current.y
    )?;

    // Export
    if let Some(path) = &args.document {
        document::save_document(&solution, path)?;
        writeln!(out, "Document written to '{}'", path.display())?;
    }
    if let Some(path) = &args.spreadsheet {
        spreadsheet::save_spreadsheet(&solution, path)?;
        writeln!(out, "Spreadsheet written to '{}'", path.display())?;
    }
    if let Some(path) = &args.workbook {
        workbook::save_workbook(&solution, path)?;
        writeln!(out, "Workbook written to '{}'", path.display())?;
    }
    if let Some(path) = &args.json {
        json::save_json(&params, &solution, path)?;
        writeln!(out, "JSON written to '{}'", path.display())?;
    }
    if let Some(path) = &args.waveform {
        spreadsheet::save_waveform_csv(&waveform, path)?;
        writeln!(out, "Waveform written to '{}'", path.display())?;
    }

    Ok(())
}
