//! # Concrete Volume
//!
//! Slab, pad and footing volume with a waste allowance, bag count for small
//! pours, and a ready-mix cost at a flat $120/yd³.

use serde::{Deserialize, Serialize};

use crate::calculators::ceil_count;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::InputMap;
use crate::results::CalculatorResults;
use crate::units::{CubicFeet, CubicYards, Feet, Inches, SqFt};

pub const ID: &str = "concrete-volume";

/// Ready-mix price per cubic yard
pub const COST_PER_CUBIC_YARD: f64 = 120.0;

/// Yield of one 80 lb premix bag
pub const CUBIC_FEET_PER_80LB_BAG: f64 = 0.6;

/// Above this volume bagged mix stops being practical
const BAG_MIX_LIMIT_CY: f64 = 1.0;

/// Concrete volume inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteVolumeInput {
    pub length_ft: f64,
    pub width_ft: f64,
    pub depth_in: f64,
    /// Extra volume ordered, percent
    pub waste_factor_pct: f64,
}

impl ConcreteVolumeInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        ConcreteVolumeInput {
            length_ft: inputs.number("length"),
            width_ft: inputs.number("width"),
            depth_in: inputs.number("depth"),
            waste_factor_pct: inputs.number("wasteFactor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteVolumeEstimate {
    pub cubic_feet: f64,
    pub cubic_yards: f64,
    /// Cubic yards including the waste allowance
    pub total_cubic_yards: f64,
    /// 80 lb bags for the net volume
    pub bags_80lb: u64,
    pub cost: f64,
}

pub fn calculate(input: &ConcreteVolumeInput) -> ConcreteVolumeEstimate {
    let area = SqFt::rectangle(Feet(input.length_ft), Feet(input.width_ft));
    let volume = CubicFeet::slab(area, Inches(input.depth_in));
    let yards: CubicYards = volume.into();
    let total = yards * (1.0 + input.waste_factor_pct / 100.0);

    ConcreteVolumeEstimate {
        cubic_feet: volume.value(),
        cubic_yards: yards.value(),
        total_cubic_yards: total.value(),
        bags_80lb: ceil_count(volume.value() / CUBIC_FEET_PER_80LB_BAG),
        cost: total.value() * COST_PER_CUBIC_YARD,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = ConcreteVolumeInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.entry("Volume (Cubic Feet)", format::quantity(estimate.cubic_feet, "cu ft"), "Length × width × depth")
        .entry("Volume (Cubic Yards)", format::quantity(estimate.cubic_yards, "cu yd"), "Net volume before waste")
        .primary(
            "Total Concrete Needed",
            format::quantity(estimate.total_cubic_yards, "cu yd"),
            format!("Including {} waste allowance", format::percent(input.waste_factor_pct)),
        )
        .entry("80 lb Bags", format::count(estimate.bags_80lb, "bags"), "About 0.6 cu ft per bag")
        .primary(
            "Estimated Cost",
            format::currency(estimate.cost),
            format!("Ready-mix at {} per cubic yard", format::currency(COST_PER_CUBIC_YARD)),
        );

    if estimate.total_cubic_yards > BAG_MIX_LIMIT_CY {
        out.info("Pours over 1 cubic yard are usually cheaper and more consistent with ready-mix delivery.");
    } else {
        out.info("Small pours like this can be mixed from bags on site.");
    }
    if input.depth_in > 0.0 && input.depth_in < 4.0 {
        out.warning("Slabs thinner than 4 inches crack easily; use 4 inches for walks and patios.");
    }
    if input.waste_factor_pct < 5.0 {
        out.tip("Allow 5-10% extra for uneven subgrade and spillage.");
    }
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Concrete Volume Calculator".to_string(),
        description: "Cubic yards, bag count and ready-mix cost for slabs, pads and footings.".to_string(),
        category: Category::Concrete,
        time_estimate: "1 min".to_string(),
        fields: vec![
            FieldDescriptor::number("length", "Length", 10.0).unit("ft"),
            FieldDescriptor::number("width", "Width", 10.0).unit("ft"),
            FieldDescriptor::number("depth", "Depth", 4.0).unit("in").step(0.5),
            FieldDescriptor::number("wasteFactor", "Waste Factor", 10.0)
                .unit("%")
                .max(30.0)
                .optional()
                .help("5-10% is typical"),
        ],
        formula: Some("cu yd = length × width × (depth ÷ 12) ÷ 27 × (1 + waste ÷ 100)".to_string()),
        related_calculators: vec![
            super::retaining_wall::ID.to_string(),
            crate::calculators::cost::waste::ID.to_string(),
        ],
    }
}
