//! # Roofing Material
//!
//! Roofing is sold by the square (100 sq ft of roof surface). The plan
//! footprint is scaled up for pitch, a waste allowance is added, then the
//! squares are turned into bundles, panels or tiles.
//!
//! ```text
//! area    = L × W × (1 + pitch / 24)
//! squares = area × (1 + waste) / 100
//! units   = ceil(squares × units_per_square)
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::ceil_count;
use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::InputMap;
use crate::results::CalculatorResults;

pub const ID: &str = "roofing-material";

pub const SQUARE_SQFT: f64 = 100.0;
pub const SQUARES_PER_UNDERLAYMENT_ROLL: f64 = 4.0;
pub const UNDERLAYMENT_ROLL_COST: f64 = 80.0;

field_choice! {
    pub enum RoofingType {
        AsphaltShingle => ("asphalt-shingle", "Asphalt shingles"),
        Metal => ("metal", "Metal panels"),
        ClayTile => ("clay-tile", "Clay tile"),
        WoodShake => ("wood-shake", "Wood shakes"),
    }
}

impl RoofingType {
    /// Units per square, unit name and price per unit
    pub fn packaging(self) -> (f64, &'static str, f64) {
        match self {
            RoofingType::AsphaltShingle => (3.0, "bundles", 35.0),
            RoofingType::Metal => (3.0, "panels", 55.0),
            RoofingType::ClayTile => (90.0, "tiles", 3.0),
            RoofingType::WoodShake => (4.0, "bundles", 65.0),
        }
    }
}

/// Waste allowance for the cutting a roof shape needs
pub fn waste_fraction(has_valleys: bool, has_gables: bool) -> f64 {
    match (has_valleys, has_gables) {
        (true, true) => 0.15,
        (true, false) | (false, true) => 0.12,
        (false, false) => 0.10,
    }
}

/// Roofing inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofingInput {
    pub length_ft: f64,
    pub width_ft: f64,
    /// Rise in inches per 12 inches of run
    pub pitch: f64,
    pub roofing: RoofingType,
    pub has_valleys: bool,
    pub has_gables: bool,
}

impl RoofingInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        RoofingInput {
            length_ft: inputs.number("roofLength"),
            width_ft: inputs.number("roofWidth"),
            pitch: inputs.number("pitch"),
            roofing: inputs.choice_or("roofingType", RoofingType::AsphaltShingle),
            has_valleys: inputs.flag_or("hasValleys", false),
            has_gables: inputs.flag_or("hasGables", false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofingEstimate {
    pub roof_area_sqft: f64,
    pub waste_pct: f64,
    pub squares: f64,
    pub units: u64,
    pub material_cost: f64,
    pub underlayment_rolls: u64,
    pub underlayment_cost: f64,
    pub drip_edge_ft: f64,
    pub total_cost: f64,
}

pub fn calculate(input: &RoofingInput) -> RoofingEstimate {
    let roof_area = input.length_ft * input.width_ft * (1.0 + input.pitch / 24.0);
    let waste = waste_fraction(input.has_valleys, input.has_gables);
    let squares = roof_area * (1.0 + waste) / SQUARE_SQFT;

    let (per_square, _, unit_cost) = input.roofing.packaging();
    let units = ceil_count(squares * per_square);
    let material_cost = units as f64 * unit_cost;
    let underlayment_rolls = ceil_count(squares / SQUARES_PER_UNDERLAYMENT_ROLL);
    let underlayment_cost = underlayment_rolls as f64 * UNDERLAYMENT_ROLL_COST;

    RoofingEstimate {
        roof_area_sqft: roof_area,
        waste_pct: waste * 100.0,
        squares,
        units,
        material_cost,
        underlayment_rolls,
        underlayment_cost,
        drip_edge_ft: 2.0 * (input.length_ft + input.width_ft),
        total_cost: material_cost + underlayment_cost,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = RoofingInput::from_inputs(inputs);
    let estimate = calculate(&input);
    let (per_square, unit_name, unit_cost) = input.roofing.packaging();

    let mut out = CalculatorResults::new();
    out.entry(
        "Roof Surface Area",
        format::quantity(estimate.roof_area_sqft, "sq ft"),
        format!("Footprint adjusted for a {}/12 pitch", format::fixed(input.pitch, 0)),
    )
    .entry("Waste Allowance", format::percent(estimate.waste_pct), "For valleys, gables and starter courses")
    .entry("Roofing Squares", format::quantity(estimate.squares, "squares"), "100 sq ft each, waste included")
    .primary(
        "Material Needed",
        format::count(estimate.units, unit_name),
        format!("{} {} per square", format::fixed(per_square, 0), unit_name),
    )
    .entry("Material Cost", format::currency(estimate.material_cost), format!("{} each", format::currency(unit_cost)))
    .entry(
        "Underlayment",
        format::count(estimate.underlayment_rolls, "rolls"),
        format!("{} per roll, 4 squares each", format::currency(UNDERLAYMENT_ROLL_COST)),
    )
    .entry("Drip Edge", format::quantity(estimate.drip_edge_ft, "ft"), "Around the eaves and rakes")
    .primary("Total Material Cost", format::currency(estimate.total_cost), "Roofing plus underlayment");

    if input.pitch > 0.0 && input.pitch < 4.0 && input.roofing == RoofingType::AsphaltShingle {
        out.warning("Shingles below a 4/12 pitch need a double underlayment or a low-slope membrane.");
    }
    if input.pitch >= 9.0 {
        out.tip("Steep roofs need roof jacks and fall protection; labor costs rise accordingly.");
    }
    if input.roofing == RoofingType::ClayTile {
        out.warning("Clay tile weighs 8-12 lb per sq ft; confirm the framing can carry it.");
    }
    out.info("Ridge caps, vents and flashing are priced separately.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Roofing Material Calculator".to_string(),
        description: "Squares, bundles or panels and underlayment for a pitched roof.".to_string(),
        category: Category::Specialty,
        time_estimate: "2 min".to_string(),
        fields: vec![
            FieldDescriptor::number("roofLength", "Roof Length", 40.0).unit("ft"),
            FieldDescriptor::number("roofWidth", "Roof Width", 30.0).unit("ft"),
            FieldDescriptor::number("pitch", "Pitch", 6.0)
                .unit("/12")
                .max(24.0)
                .step(1.0)
                .help("Inches of rise per foot of run"),
            FieldDescriptor::select("roofingType", "Roofing Type", RoofingType::AsphaltShingle),
            FieldDescriptor::checkbox("hasValleys", "Roof has valleys", false),
            FieldDescriptor::checkbox("hasGables", "Roof has gables or dormers", false),
        ],
        formula: Some("squares = L × W × (1 + pitch ÷ 24) × (1 + waste) ÷ 100".to_string()),
        related_calculators: vec![
            super::timeline::ID.to_string(),
            crate::calculators::cost::waste::ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;

    #[test]
    fn test_shingle_roof() {
        // 40 × 30 × 1.25 = 1500 sq ft; × 1.10 / 100 = 16.5 squares
        let estimate = calculate(&RoofingInput::from_inputs(&input_map! {
            "roofLength" => 40,
            "roofWidth" => 30,
            "pitch" => 6,
        }));
        assert!((estimate.roof_area_sqft - 1500.0).abs() < 1e-9);
        assert!((estimate.squares - 16.5).abs() < 1e-9);
        assert_eq!(estimate.units, 50);
        assert!((estimate.material_cost - 1750.0).abs() < 1e-9);
        assert_eq!(estimate.underlayment_rolls, 5);
        assert_eq!(estimate.drip_edge_ft, 140.0);
    }

    #[test]
    fn test_waste_by_shape() {
        assert_eq!(waste_fraction(false, false), 0.10);
        assert_eq!(waste_fraction(true, false), 0.12);
        assert_eq!(waste_fraction(false, true), 0.12);
        assert_eq!(waste_fraction(true, true), 0.15);
    }

    #[test]
    fn test_clay_tile_count() {
        // flat 10 × 10 = 100 sq ft × 1.15 = 1.15 squares × 90 = 103.5 -> 104 tiles
        let estimate = calculate(&RoofingInput::from_inputs(&input_map! {
            "roofLength" => 10,
            "roofWidth" => 10,
            "roofingType" => "clay-tile",
            "hasValleys" => true,
            "hasGables" => true,
        }));
        assert_eq!(estimate.units, 104);
    }

    #[test]
    fn test_low_pitch_warning() {
        let out = compute(&input_map! { "roofLength" => 20, "roofWidth" => 20, "pitch" => 2 });
        assert!(out.recommendations.iter().any(|r| r.text.contains("4/12")));
    }
}
