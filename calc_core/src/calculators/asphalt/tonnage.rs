//! # Asphalt Tonnage
//!
//! Converts a paved area and compacted thickness into tons of hot mix.
//!
//! ## Formula
//!
//! ```text
//! cubic_feet = length × width × (thickness_in / 12)
//! tons       = cubic_feet × density / 2000
//! cost       = tons × cost_per_ton
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculators::asphalt::tonnage::{calculate, AsphaltTonnageInput};
//!
//! let estimate = calculate(&AsphaltTonnageInput {
//!     length_ft: 100.0,
//!     width_ft: 20.0,
//!     thickness_in: 2.0,
//!     density_pcf: 145.0,
//!     cost_per_ton: 100.0,
//! });
//! assert!((estimate.tons - 24.1667).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::ceil_count;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::InputMap;
use crate::results::CalculatorResults;
use crate::units::{CubicFeet, CubicYards, Feet, Inches, SqFt, Tons};

pub const ID: &str = "asphalt-tonnage";

/// Compacted hot-mix density used when none is entered (lb/ft³)
pub const DEFAULT_DENSITY_PCF: f64 = 145.0;

/// Delivered price used when none is entered ($/ton)
pub const DEFAULT_COST_PER_TON: f64 = 100.0;

/// Payload of a standard tri-axle dump truck
pub const TONS_PER_TRUCK: f64 = 20.0;

/// Hot-mix gradation suggested for a given thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixType {
    FineHotMix,
    StandardHotMix,
    HeavyDutyHotMix,
}

impl MixType {
    /// Thin lifts need fine aggregate; thick lifts need a coarse, heavy-duty mix.
    pub fn for_thickness(thickness_in: f64) -> Self {
        if thickness_in < 1.5 {
            MixType::FineHotMix
        } else if thickness_in > 3.0 {
            MixType::HeavyDutyHotMix
        } else {
            MixType::StandardHotMix
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MixType::FineHotMix => "Fine Hot Mix",
            MixType::StandardHotMix => "Standard Hot Mix",
            MixType::HeavyDutyHotMix => "Heavy-Duty Hot Mix",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            MixType::FineHotMix => "suits thin overlays and surface patches under 1.5 inches.",
            MixType::StandardHotMix => "is the usual choice for driveways and walkways.",
            MixType::HeavyDutyHotMix => "holds up under trucks and heavy equipment on thick sections.",
        }
    }
}

/// Asphalt tonnage inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltTonnageInput {
    pub length_ft: f64,
    pub width_ft: f64,
    /// Compacted thickness in inches
    pub thickness_in: f64,
    pub density_pcf: f64,
    pub cost_per_ton: f64,
}

impl AsphaltTonnageInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        AsphaltTonnageInput {
            length_ft: inputs.number("length"),
            width_ft: inputs.number("width"),
            thickness_in: inputs.number("thickness"),
            density_pcf: inputs.number_or("density", DEFAULT_DENSITY_PCF),
            cost_per_ton: inputs.number_or("costPerTon", DEFAULT_COST_PER_TON),
        }
    }
}

/// Asphalt tonnage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltTonnageEstimate {
    pub area_sqft: f64,
    pub cubic_feet: f64,
    pub cubic_yards: f64,
    pub tons: f64,
    pub cost: f64,
    pub truck_loads: u64,
    pub mix: MixType,
}

pub fn calculate(input: &AsphaltTonnageInput) -> AsphaltTonnageEstimate {
    let area = SqFt::rectangle(Feet(input.length_ft), Feet(input.width_ft));
    let volume = CubicFeet::slab(area, Inches(input.thickness_in));
    let yards: CubicYards = volume.into();
    let tons = Tons::from_volume(volume, input.density_pcf);

    AsphaltTonnageEstimate {
        area_sqft: area.value(),
        cubic_feet: volume.value(),
        cubic_yards: yards.value(),
        tons: tons.value(),
        cost: tons.value() * input.cost_per_ton,
        truck_loads: ceil_count(tons.value() / TONS_PER_TRUCK),
        mix: MixType::for_thickness(input.thickness_in),
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = AsphaltTonnageInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.entry("Paved Area", format::quantity(estimate.area_sqft, "sq ft"), "Length × width")
        .entry("Volume", format::quantity(estimate.cubic_feet, "cu ft"), "Area × compacted thickness")
        .entry("Volume (Cubic Yards)", format::quantity(estimate.cubic_yards, "cu yd"), "Cubic feet ÷ 27")
        .primary(
            "Asphalt Required",
            format::quantity(estimate.tons, "tons"),
            format!("At {} lb/ft³ compacted density", format::fixed(input.density_pcf, 0)),
        )
        .primary(
            "Estimated Material Cost",
            format::currency(estimate.cost),
            format!("At {} per ton delivered", format::currency(input.cost_per_ton)),
        )
        .entry(
            "Truck Loads",
            format::count(estimate.truck_loads, "loads"),
            format!("{} tons per tri-axle load", format::fixed(TONS_PER_TRUCK, 0)),
        );

    out.info(format!("{} {}", estimate.mix.display_name(), estimate.mix.advice()));
    if input.thickness_in > 0.0 && input.thickness_in < 2.0 {
        out.warning("Lifts under 2 inches are only suitable as overlays on a sound existing base.");
    }
    if input.thickness_in > 4.0 {
        out.tip("Place sections thicker than 4 inches in two lifts so each compacts fully.");
    }
    out.tip("Order 5-10% extra to cover compaction, handling losses and edge taper.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Asphalt Tonnage Calculator".to_string(),
        description: "Estimate tons of hot mix asphalt and material cost for a paved area.".to_string(),
        category: Category::Asphalt,
        time_estimate: "1 min".to_string(),
        fields: vec![
            FieldDescriptor::number("length", "Length", 100.0).unit("ft").step(1.0),
            FieldDescriptor::number("width", "Width", 20.0).unit("ft").step(1.0),
            FieldDescriptor::number("thickness", "Compacted Thickness", 2.0)
                .unit("in")
                .step(0.25)
                .max(12.0)
                .help("Typical driveways are 2-3 inches; parking lots 3-4 inches"),
            FieldDescriptor::number("density", "Asphalt Density", DEFAULT_DENSITY_PCF)
                .unit("lb/ft³")
                .optional()
                .help("145 lb/ft³ is typical for compacted hot mix"),
            FieldDescriptor::number("costPerTon", "Cost per Ton", DEFAULT_COST_PER_TON)
                .unit("$/ton")
                .optional(),
        ],
        formula: Some("tons = length × width × (thickness ÷ 12) × density ÷ 2000".to_string()),
        related_calculators: vec![
            super::thickness::ID.to_string(),
            crate::calculators::cost::paving::ID.to_string(),
            crate::calculators::specialty::parking_lot::ID.to_string(),
        ],
    }
}
