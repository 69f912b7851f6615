//! Asphalt calculators: how much hot mix to order, and how thick to lay it.

pub mod thickness;
pub mod tonnage;

pub use thickness::{AsphaltThicknessEstimate, AsphaltThicknessInput, Climate, SubgradeType, TrafficLoad};
pub use tonnage::{AsphaltTonnageEstimate, AsphaltTonnageInput, MixType};
