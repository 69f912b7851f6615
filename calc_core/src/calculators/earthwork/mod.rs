//! Earthwork calculators.

pub mod excavation;

pub use excavation::{ExcavationEstimate, ExcavationInput, SoilType};
