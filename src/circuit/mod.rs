//! Series RLC circuit description and validation.
//!
//! This module holds the input side of an analysis: the five scalar values
//! that fully describe a series RLC circuit driven by a sinusoidal source.

mod params;
mod validate;

pub use params::*;
pub use validate::{check_divisors, validate_parameters};
