//! Error types for the RLC circuit solver.
//!
//! This module provides a unified error type [`RlcError`] that covers
//! parameter validation, the solver's divisor guards, and result export.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`RlcError`].
pub type Result<T> = std::result::Result<T, RlcError>;

/// The input quantity that would have been used as a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    /// Driving frequency `f` (enters the capacitive reactance through ω)
    Frequency,
    /// Capacitance `C`
    Capacitance,
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divisor::Frequency => write!(f, "frequency"),
            Divisor::Capacitance => write!(f, "capacitance"),
        }
    }
}

/// Unified error type for all RLC operations.
#[derive(Error, Debug)]
pub enum RlcError {
    // ============ Solver Errors ============
    /// A divisor in the reactance computation is zero
    #[error("Division by zero: {quantity} must be nonzero")]
    DivisionByZero { quantity: Divisor },

    /// Invalid parameter value
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // ============ Export Errors ============
    /// Error writing an export document
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to an output stream
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Error encoding a record as JSON
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Error assembling a spreadsheet workbook
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl RlcError {
    /// Create a division-by-zero error
    pub fn division_by_zero(quantity: Divisor) -> Self {
        Self::DivisionByZero { quantity }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error came from a zero divisor.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

impl From<serde_json::Error> for RlcError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
