//! # Parking Lot
//!
//! Space count for a rectangular lot, the accessible spaces the ADA requires
//! for that count, and the asphalt to pave it.
//!
//! About 70% of a lot ends up as stalls; the rest is drive aisles. Each
//! stall plus its share of aisle takes 300-400 sq ft depending on the
//! vehicle size designed for.

use serde::{Deserialize, Serialize};

use crate::calculators::{ceil_count, floor_count};
use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;
use crate::units::{CubicFeet, Feet, Inches, SqFt, Tons};

pub const ID: &str = "parking-lot";

/// Share of the lot usable for stalls
pub const LAYOUT_EFFICIENCY: f64 = 0.7;
/// Paved area and spaces kept when islands and buffers are planted
pub const LANDSCAPING_RETAINED: f64 = 0.92;
pub const ASPHALT_THICKNESS_IN: f64 = 2.0;
pub const ASPHALT_DENSITY_PCF: f64 = 145.0;
pub const ASPHALT_COST_PER_TON: f64 = 100.0;
/// One in six accessible spaces must be van accessible
pub const ACCESSIBLE_PER_VAN: f64 = 6.0;

field_choice! {
    pub enum ParkingType {
        Standard => ("standard", "Standard (9' × 18')"),
        Compact => ("compact", "Compact (8' × 16')"),
        Large => ("large", "Large / truck (10' × 20')"),
    }
}

impl ParkingType {
    /// Lot area per car including aisle share, sq ft
    pub fn area_per_space(self) -> f64 {
        match self {
            ParkingType::Standard => 350.0,
            ParkingType::Compact => 300.0,
            ParkingType::Large => 400.0,
        }
    }
}

/// Accessible spaces required for a lot with `total` spaces (2010 ADA Standards, 208.2).
pub fn required_accessible(total: u64) -> u64 {
    match total {
        0 => 0,
        1..=25 => 1,
        26..=50 => 2,
        51..=75 => 3,
        76..=100 => 4,
        101..=150 => 5,
        151..=200 => 6,
        201..=300 => 7,
        301..=400 => 8,
        401..=500 => 9,
        501..=1000 => ceil_count(total as f64 * 0.02),
        _ => 20 + ceil_count((total - 1000) as f64 / 100.0),
    }
}

/// Parking lot inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingLotInput {
    pub length_ft: f64,
    pub width_ft: f64,
    pub parking: ParkingType,
    pub include_landscaping: bool,
}

impl ParkingLotInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        ParkingLotInput {
            length_ft: inputs.number("lotLength"),
            width_ft: inputs.number("lotWidth"),
            parking: inputs.choice_or("parkingType", ParkingType::Standard),
            include_landscaping: inputs.flag_or("includeLandscaping", false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLotEstimate {
    pub total_area_sqft: f64,
    pub paved_area_sqft: f64,
    pub spaces: u64,
    pub accessible_spaces: u64,
    pub van_spaces: u64,
    pub asphalt_tons: f64,
    pub asphalt_cost: f64,
}

pub fn calculate(input: &ParkingLotInput) -> ParkingLotEstimate {
    let total = SqFt::rectangle(Feet(input.length_ft), Feet(input.width_ft));
    let mut spaces = floor_count(total.value() * LAYOUT_EFFICIENCY / input.parking.area_per_space());
    let mut paved = total;
    if input.include_landscaping {
        paved = paved * LANDSCAPING_RETAINED;
        spaces = floor_count(spaces as f64 * LANDSCAPING_RETAINED);
    }

    let accessible_spaces = required_accessible(spaces);
    let volume = CubicFeet::slab(paved, Inches(ASPHALT_THICKNESS_IN));
    let asphalt_tons = Tons::from_volume(volume, ASPHALT_DENSITY_PCF).value();

    ParkingLotEstimate {
        total_area_sqft: total.value(),
        paved_area_sqft: paved.value(),
        spaces,
        accessible_spaces,
        van_spaces: ceil_count(accessible_spaces as f64 / ACCESSIBLE_PER_VAN),
        asphalt_tons,
        asphalt_cost: asphalt_tons * ASPHALT_COST_PER_TON,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = ParkingLotInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.entry("Total Lot Area", format::quantity(estimate.total_area_sqft, "sq ft"), "Length × width")
        .entry(
            "Paved Area",
            format::quantity(estimate.paved_area_sqft, "sq ft"),
            if input.include_landscaping {
                "After 8% landscaping"
            } else {
                "Entire lot"
            },
        )
        .primary(
            "Parking Spaces",
            format::count(estimate.spaces, "spaces"),
            format!(
                "{} sq ft per {} space at 70% efficiency",
                format::fixed(input.parking.area_per_space(), 0),
                input.parking.key()
            ),
        )
        .entry("Accessible Spaces", format::count(estimate.accessible_spaces, "spaces"), "ADA minimum, included in the total")
        .entry("Van-Accessible Spaces", format::count(estimate.van_spaces, "spaces"), "One in every six accessible spaces")
        .entry("Asphalt Required", format::quantity(estimate.asphalt_tons, "tons"), "2\" surface course at 145 lb/cu ft")
        .primary("Estimated Asphalt Cost", format::currency(estimate.asphalt_cost), "At $100 per ton");

    out.info("Accessible spaces go on the shortest route to the building entrance.");
    if estimate.spaces > 0 && input.parking == ParkingType::Compact {
        out.tip("Many codes cap compact stalls at 30-40% of the total; check local zoning.");
    }
    if estimate.paved_area_sqft > 20_000.0 {
        out.warning("Lots this size usually need a stormwater management plan.");
    }
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Parking Lot Calculator".to_string(),
        description: "Parking space count, ADA accessible spaces and asphalt for a new lot.".to_string(),
        category: Category::Specialty,
        time_estimate: "2 min".to_string(),
        fields: vec![
            FieldDescriptor::number("lotLength", "Lot Length", 200.0).unit("ft"),
            FieldDescriptor::number("lotWidth", "Lot Width", 100.0).unit("ft"),
            FieldDescriptor::select("parkingType", "Space Size", ParkingType::Standard),
            FieldDescriptor::checkbox("includeLandscaping", "Include landscaping islands", false),
        ],
        formula: Some("spaces = floor(area × 0.7 ÷ area per space)".to_string()),
        related_calculators: vec![
            crate::calculators::asphalt::tonnage::ID.to_string(),
            crate::calculators::cost::paving::ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;

    #[test]
    fn test_standard_lot() {
        // 200 × 100 × 0.7 / 350 = 40 spaces
        let estimate = calculate(&ParkingLotInput::from_inputs(&input_map! {
            "lotLength" => 200,
            "lotWidth" => 100,
        }));
        assert_eq!(estimate.spaces, 40);
        assert_eq!(estimate.accessible_spaces, 2);
        assert_eq!(estimate.van_spaces, 1);
        // 20,000 sq ft × 2/12 ft × 145 / 2000
        assert!((estimate.asphalt_tons - 241.6667).abs() < 1e-3);
    }

    #[test]
    fn test_landscaping_reduces_area_and_spaces() {
        let estimate = calculate(&ParkingLotInput::from_inputs(&input_map! {
            "lotLength" => 200,
            "lotWidth" => 100,
            "includeLandscaping" => true,
        }));
        assert!((estimate.paved_area_sqft - 18_400.0).abs() < 1e-9);
        assert_eq!(estimate.spaces, 36);
    }

    #[test]
    fn test_ada_table() {
        assert_eq!(required_accessible(0), 0);
        assert_eq!(required_accessible(25), 1);
        assert_eq!(required_accessible(26), 2);
        assert_eq!(required_accessible(150), 5);
        assert_eq!(required_accessible(500), 9);
        assert_eq!(required_accessible(501), 11);
        assert_eq!(required_accessible(1000), 20);
        assert_eq!(required_accessible(1001), 21);
        assert_eq!(required_accessible(1250), 23);
    }

    #[test]
    fn test_empty_lot() {
        let out = compute(&InputMap::new());
        assert_eq!(out.value_of("Parking Spaces"), Some("0 spaces"));
        assert_eq!(out.value_of("Accessible Spaces"), Some("0 spaces"));
    }
}
