//! # Asphalt Thickness Estimator
//!
//! Rule-of-thumb pavement section from traffic, subgrade and climate.
//!
//! ## Method
//!
//! 1. Base thickness by traffic load: light 2.0", medium 3.0", heavy 4.0"
//! 2. Subgrade adjustment: poor +0.5", fair 0", good −0.5"
//! 3. Climate adjustment: cold +0.5", moderate 0", hot +0.25"
//! 4. Floor at 1.5", then round up to the next 0.25"
//!
//! The aggregate base course follows traffic (4/6/8") with 2" more on poor
//! subgrade; a 6" subbase is added for heavy traffic or poor subgrade.

use serde::{Deserialize, Serialize};

use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;

pub const ID: &str = "asphalt-thickness";

/// Thinnest asphalt surface worth placing
pub const MIN_THICKNESS_IN: f64 = 1.5;

/// Recommendations are rounded up to this increment
pub const THICKNESS_INCREMENT_IN: f64 = 0.25;

pub const SUBBASE_THICKNESS_IN: f64 = 6.0;

/// Extra aggregate base over poor subgrade
pub const POOR_SUBGRADE_BASE_ADDON_IN: f64 = 2.0;

field_choice! {
    /// Expected traffic on the finished pavement
    pub enum TrafficLoad {
        Light => ("light", "Light (cars, residential driveways)"),
        Medium => ("medium", "Medium (light trucks, small lots)"),
        Heavy => ("heavy", "Heavy (trucks, buses, commercial)"),
    }
}

impl TrafficLoad {
    pub fn base_thickness_in(self) -> f64 {
        match self {
            TrafficLoad::Light => 2.0,
            TrafficLoad::Medium => 3.0,
            TrafficLoad::Heavy => 4.0,
        }
    }

    pub fn base_course_in(self) -> f64 {
        match self {
            TrafficLoad::Light => 4.0,
            TrafficLoad::Medium => 6.0,
            TrafficLoad::Heavy => 8.0,
        }
    }
}

field_choice! {
    /// Native soil the pavement rests on
    pub enum SubgradeType {
        Poor => ("poor", "Poor (clay, high moisture)"),
        Fair => ("fair", "Fair (mixed soils)"),
        Good => ("good", "Good (compacted gravel, sandy soil)"),
    }
}

impl SubgradeType {
    pub fn adjustment_in(self) -> f64 {
        match self {
            SubgradeType::Poor => 0.5,
            SubgradeType::Fair => 0.0,
            SubgradeType::Good => -0.5,
        }
    }
}

field_choice! {
    /// Regional climate
    pub enum Climate {
        Cold => ("cold", "Cold (freeze-thaw cycles)"),
        Moderate => ("moderate", "Moderate"),
        Hot => ("hot", "Hot (long, hot summers)"),
    }
}

impl Climate {
    pub fn adjustment_in(self) -> f64 {
        match self {
            Climate::Cold => 0.5,
            Climate::Moderate => 0.0,
            Climate::Hot => 0.25,
        }
    }
}

/// Thickness estimator inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsphaltThicknessInput {
    pub traffic: TrafficLoad,
    pub subgrade: SubgradeType,
    pub climate: Climate,
}

impl AsphaltThicknessInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        AsphaltThicknessInput {
            traffic: inputs.choice_or("trafficLoad", TrafficLoad::Medium),
            subgrade: inputs.choice_or("subgradeType", SubgradeType::Fair),
            climate: inputs.choice_or("climate", Climate::Moderate),
        }
    }
}

/// Recommended pavement section, all thicknesses in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltThicknessEstimate {
    pub recommended_thickness_in: f64,
    pub base_course_in: f64,
    pub needs_subbase: bool,
    /// Zero when no subbase is needed
    pub subbase_in: f64,
    pub total_section_in: f64,
}

pub fn calculate(input: &AsphaltThicknessInput) -> AsphaltThicknessEstimate {
    let raw = input.traffic.base_thickness_in() + input.subgrade.adjustment_in() + input.climate.adjustment_in();
    let floored = raw.max(MIN_THICKNESS_IN);
    let recommended = (floored / THICKNESS_INCREMENT_IN).ceil() * THICKNESS_INCREMENT_IN;

    let poor_subgrade = input.subgrade == SubgradeType::Poor;
    let base_course = input.traffic.base_course_in() + if poor_subgrade { POOR_SUBGRADE_BASE_ADDON_IN } else { 0.0 };
    let needs_subbase = input.traffic == TrafficLoad::Heavy || poor_subgrade;
    let subbase = if needs_subbase { SUBBASE_THICKNESS_IN } else { 0.0 };

    AsphaltThicknessEstimate {
        recommended_thickness_in: recommended,
        base_course_in: base_course,
        needs_subbase,
        subbase_in: subbase,
        total_section_in: recommended + base_course + subbase,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = AsphaltThicknessInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.primary(
        "Recommended Asphalt Thickness",
        format::quantity(estimate.recommended_thickness_in, "in"),
        "Compacted hot mix, rounded up to the nearest 1/4 inch",
    )
    .entry(
        "Aggregate Base Course",
        format::quantity(estimate.base_course_in, "in"),
        "Compacted crushed stone under the asphalt",
    );
    if estimate.needs_subbase {
        out.entry(
            "Subbase",
            format::quantity(estimate.subbase_in, "in"),
            "Granular subbase below the base course",
        );
    } else {
        out.entry("Subbase", "Not required", "Traffic and subgrade do not call for a subbase");
    }
    out.entry(
        "Total Pavement Section",
        format::quantity(estimate.total_section_in, "in"),
        "Excavation depth below finished grade",
    );

    out.info(format!(
        "For {} traffic, lay {} inches of asphalt over {} inches of compacted base.",
        input.traffic.key(),
        format::fixed(estimate.recommended_thickness_in, 2),
        format::fixed(estimate.base_course_in, 0),
    ));
    if input.subgrade == SubgradeType::Poor {
        out.warning("Poor subgrade: proof-roll and consider geotextile fabric before placing base.");
    }
    if input.traffic == TrafficLoad::Heavy {
        out.warning("Heavy-traffic pavements should be confirmed by a pavement or geotechnical engineer.");
    }
    match input.climate {
        Climate::Cold => {
            out.tip("In freeze-thaw climates, crown the surface at least 2% and keep the base drained.");
        }
        Climate::Hot => {
            out.tip("Specify a stiffer binder grade to resist rutting in sustained heat.");
        }
        Climate::Moderate => {}
    }
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Asphalt Thickness Estimator".to_string(),
        description: "Recommend asphalt, base and subbase thickness from traffic, soil and climate.".to_string(),
        category: Category::Asphalt,
        time_estimate: "1 min".to_string(),
        fields: vec![
            FieldDescriptor::radio("trafficLoad", "Traffic Load", TrafficLoad::Medium),
            FieldDescriptor::select("subgradeType", "Subgrade Soil", SubgradeType::Fair)
                .help("Poor soils are soft when wet or drain slowly"),
            FieldDescriptor::select("climate", "Climate", Climate::Moderate),
        ],
        formula: Some("thickness = ceil¼(max(1.5, traffic + subgrade + climate))".to_string()),
        related_calculators: vec![
            super::tonnage::ID.to_string(),
            crate::calculators::cost::paving::ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;

    fn estimate(traffic: &str, subgrade: &str, climate: &str) -> AsphaltThicknessEstimate {
        calculate(&AsphaltThicknessInput::from_inputs(&input_map! {
            "trafficLoad" => traffic,
            "subgradeType" => subgrade,
            "climate" => climate,
        }))
    }

    #[test]
    fn test_heavy_poor_cold() {
        let e = estimate("heavy", "poor", "cold");
        assert_eq!(e.recommended_thickness_in, 5.0);
        assert!(e.needs_subbase);
        assert_eq!(e.subbase_in, 6.0);
        assert_eq!(e.base_course_in, 10.0);
        assert_eq!(e.total_section_in, 21.0);
    }

    #[test]
    fn test_rounds_up_to_quarter_inch() {
        // 2.0 - 0.5 + 0.25 = 1.75
        assert_eq!(estimate("light", "good", "hot").recommended_thickness_in, 1.75);
        // 3.0 + 0 + 0.25 = 3.25
        assert_eq!(estimate("medium", "fair", "hot").recommended_thickness_in, 3.25);
    }

    #[test]
    fn test_floor_at_minimum() {
        // 2.0 - 0.5 + 0 = 1.5, exactly the floor
        let e = estimate("light", "good", "moderate");
        assert_eq!(e.recommended_thickness_in, MIN_THICKNESS_IN);
        assert!(!e.needs_subbase);
        assert_eq!(e.subbase_in, 0.0);
    }

    #[test]
    fn test_defaults() {
        let e = calculate(&AsphaltThicknessInput::from_inputs(&InputMap::new()));
        assert_eq!(e.recommended_thickness_in, 3.0);
        assert_eq!(e.base_course_in, 6.0);
    }

    #[test]
    fn test_rendered_rows() {
        let out = compute(&input_map! { "trafficLoad" => "heavy", "subgradeType" => "poor", "climate" => "cold" });
        assert_eq!(out.value_of("Recommended Asphalt Thickness"), Some("5.00 in"));
        assert_eq!(out.value_of("Subbase"), Some("6.00 in"));
        let light = compute(&input_map! { "trafficLoad" => "light" });
        assert_eq!(light.value_of("Subbase"), Some("Not required"));
    }
}
