//! # Estimating Calculators
//!
//! One module per calculator family. Each calculator follows the pattern:
//!
//! - `*Input` - typed inputs, read from an [`InputMap`](crate::inputs::InputMap)
//!   with `from_inputs` (missing or bad values fall back to defaults)
//! - `*Estimate` - typed numeric outcome
//! - `calculate(&input) -> *Estimate` - pure arithmetic
//! - `compute(&inputs) -> CalculatorResults` - what the registry dispatches to
//! - `descriptor() -> CalculatorDescriptor` - form metadata for the catalog
//!
//! None of them can fail: zero or missing inputs yield zero-based results,
//! never an error.
//!
//! ## Available Calculators
//!
//! - [`asphalt`] - tonnage, thickness estimator
//! - [`concrete`] - slab volume, retaining wall
//! - [`cost`] - paving cost, material waste
//! - [`earthwork`] - excavation
//! - [`measurement`] - material conversion, slope/grade
//! - [`specialty`] - parking lot, project timeline, roofing material

pub mod asphalt;
pub mod concrete;
pub mod cost;
pub mod earthwork;
pub mod measurement;
pub mod specialty;

/// Round up to a whole count, treating negative and NaN as zero
pub(crate) fn ceil_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.ceil() as u64
    }
}

/// Round down to a whole count, treating negative and NaN as zero
pub(crate) fn floor_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(ceil_count(55.55), 56);
        assert_eq!(ceil_count(3.0), 3);
        assert_eq!(ceil_count(-2.0), 0);
        assert_eq!(ceil_count(f64::NAN), 0);
        assert_eq!(floor_count(9.99), 9);
        assert_eq!(floor_count(-0.5), 0);
    }
}
