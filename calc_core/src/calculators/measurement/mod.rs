//! Measurement calculators: unit/material conversion and slope/grade.

pub mod conversion;
pub mod slope;

pub use conversion::{ConversionEstimate, ConversionInput, ConversionMaterial, ConversionUnit};
pub use slope::{SlopeApplication, SlopeClass, SlopeEstimate, SlopeInput, SlopeInputMode};
