//! # Material Conversion
//!
//! Converts quantities of bulk material between weight and volume units.
//!
//! Units of the same family (weight or volume) convert through a base unit,
//! pounds or cubic feet. Crossing families goes through the material's
//! density: `tons = cu ft × density ÷ 2000` and back.
//!
//! A unit string nobody recognizes leaves the value unchanged, with a
//! warning, rather than guessing.

use serde::{Deserialize, Serialize};

use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;
use crate::units::{CubicFeet, Pounds, Tons, CUBIC_FEET_PER_METER, CUBIC_FEET_PER_YARD, POUNDS_PER_TON, POUNDS_PER_TONNE};

pub const ID: &str = "material-conversion";

field_choice! {
    pub enum ConversionMaterial {
        Asphalt => ("asphalt", "Asphalt (hot mix)"),
        Concrete => ("concrete", "Concrete"),
        Gravel => ("gravel", "Gravel"),
        Sand => ("sand", "Sand"),
        Topsoil => ("topsoil", "Topsoil"),
        CrushedStone => ("crushed-stone", "Crushed stone"),
    }
}

impl ConversionMaterial {
    /// Typical in-place density, lb/ft³
    pub fn density_pcf(self) -> f64 {
        match self {
            ConversionMaterial::Asphalt => 145.0,
            ConversionMaterial::Concrete => 150.0,
            ConversionMaterial::Gravel => 105.0,
            ConversionMaterial::Sand => 100.0,
            ConversionMaterial::Topsoil => 80.0,
            ConversionMaterial::CrushedStone => 100.0,
        }
    }
}

field_choice! {
    pub enum ConversionUnit {
        Tons => ("tons", "Tons (US)"),
        Pounds => ("pounds", "Pounds"),
        Tonnes => ("tonnes", "Metric tonnes"),
        CubicYards => ("cubic-yards", "Cubic yards"),
        CubicFeet => ("cubic-feet", "Cubic feet"),
        CubicMeters => ("cubic-meters", "Cubic meters"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitFamily {
    Weight,
    Volume,
}

impl ConversionUnit {
    pub fn family(self) -> UnitFamily {
        match self {
            ConversionUnit::Tons | ConversionUnit::Pounds | ConversionUnit::Tonnes => UnitFamily::Weight,
            ConversionUnit::CubicYards | ConversionUnit::CubicFeet | ConversionUnit::CubicMeters => UnitFamily::Volume,
        }
    }

    /// Size of one unit in its family's base unit (pounds or cubic feet)
    pub fn base_factor(self) -> f64 {
        match self {
            ConversionUnit::Pounds => 1.0,
            ConversionUnit::Tons => POUNDS_PER_TON,
            ConversionUnit::Tonnes => POUNDS_PER_TONNE,
            ConversionUnit::CubicFeet => 1.0,
            ConversionUnit::CubicYards => CUBIC_FEET_PER_YARD,
            ConversionUnit::CubicMeters => CUBIC_FEET_PER_METER,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            ConversionUnit::Tons => "tons",
            ConversionUnit::Pounds => "lb",
            ConversionUnit::Tonnes => "t",
            ConversionUnit::CubicYards => "cu yd",
            ConversionUnit::CubicFeet => "cu ft",
            ConversionUnit::CubicMeters => "m³",
        }
    }
}

/// How a conversion was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionMethod {
    SameUnit,
    /// Fixed factor within one family
    Factor,
    /// Weight ↔ volume through the material density
    Density,
    /// A unit was not recognized; the value is returned as entered
    PassThrough,
}

/// Material conversion inputs.
///
/// A unit is `None` when the form sent a value that isn't a known unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionInput {
    pub material: ConversionMaterial,
    pub value: f64,
    pub from_unit: Option<ConversionUnit>,
    pub to_unit: Option<ConversionUnit>,
}

fn read_unit(inputs: &InputMap, key: &str, default: ConversionUnit) -> Option<ConversionUnit> {
    match inputs.get(key) {
        None => Some(default),
        Some(_) => inputs.text(key).and_then(ConversionUnit::from_key),
    }
}

impl ConversionInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        ConversionInput {
            material: inputs.choice_or("material", ConversionMaterial::Gravel),
            value: inputs.number("value"),
            from_unit: read_unit(inputs, "fromUnit", ConversionUnit::Tons),
            to_unit: read_unit(inputs, "toUnit", ConversionUnit::CubicYards),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionEstimate {
    pub result: f64,
    pub method: ConversionMethod,
    pub density_pcf: f64,
}

/// Convert `value` between two known units of `material`.
pub fn convert(value: f64, from: ConversionUnit, to: ConversionUnit, material: ConversionMaterial) -> (f64, ConversionMethod) {
    if from == to {
        return (value, ConversionMethod::SameUnit);
    }
    let base = value * from.base_factor();
    let density = material.density_pcf();
    match (from.family(), to.family()) {
        (a, b) if a == b => (base / to.base_factor(), ConversionMethod::Factor),
        (UnitFamily::Weight, _) => {
            let volume = Tons::from(Pounds(base)).to_volume(density);
            (volume.value() / to.base_factor(), ConversionMethod::Density)
        }
        (UnitFamily::Volume, _) => {
            let weight = Pounds::from(Tons::from_volume(CubicFeet(base), density));
            (weight.value() / to.base_factor(), ConversionMethod::Density)
        }
    }
}

pub fn calculate(input: &ConversionInput) -> ConversionEstimate {
    let density_pcf = input.material.density_pcf();
    let (result, method) = match (input.from_unit, input.to_unit) {
        (Some(from), Some(to)) => convert(input.value, from, to, input.material),
        _ => (input.value, ConversionMethod::PassThrough),
    };
    ConversionEstimate {
        result,
        method,
        density_pcf,
    }
}

fn unit_text(unit: Option<ConversionUnit>, inputs: &InputMap, key: &str) -> String {
    match unit {
        Some(u) => u.abbreviation().to_string(),
        None => inputs.get(key).map(|v| v.to_string()).unwrap_or_default(),
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = ConversionInput::from_inputs(inputs);
    let estimate = calculate(&input);
    let from_text = unit_text(input.from_unit, inputs, "fromUnit");
    let to_text = unit_text(input.to_unit, inputs, "toUnit");

    let method = match estimate.method {
        ConversionMethod::SameUnit => "Same unit, no conversion needed",
        ConversionMethod::Factor => "Standard unit factor",
        ConversionMethod::Density => "Weight ↔ volume through material density",
        ConversionMethod::PassThrough => "Unrecognized unit, value unchanged",
    };

    let mut out = CalculatorResults::new();
    out.entry("Original Value", format::quantity(input.value, &from_text), input.material.label())
        .primary("Converted Value", format::quantity(estimate.result, &to_text), method)
        .entry(
            "Material Density",
            format::quantity(estimate.density_pcf, "lb/cu ft"),
            format!("{} lb per cu yd", format::fixed(estimate.density_pcf * CUBIC_FEET_PER_YARD, 0)),
        );

    match estimate.method {
        ConversionMethod::PassThrough => {
            out.warning("One of the units was not recognized, so the value was passed through unchanged.");
        }
        ConversionMethod::Density => {
            out.info("Densities are typical values; moisture and compaction can shift real weights by 10% or more.");
        }
        ConversionMethod::SameUnit | ConversionMethod::Factor => {
            out.info("Unit factors are exact; no material density was involved.");
        }
    }
    if input.material == ConversionMaterial::Topsoil {
        out.tip("Wet topsoil can weigh half again as much as dry; ask the supplier how it is sold.");
    }
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Material Conversion Calculator".to_string(),
        description: "Convert tons, pounds and tonnes to cubic yards, feet or meters for common bulk materials.".to_string(),
        category: Category::Measurement,
        time_estimate: "1 min".to_string(),
        fields: vec![
            FieldDescriptor::select("material", "Material", ConversionMaterial::Gravel),
            FieldDescriptor::number("value", "Quantity", 10.0).step(0.01),
            FieldDescriptor::select("fromUnit", "From", ConversionUnit::Tons),
            FieldDescriptor::select("toUnit", "To", ConversionUnit::CubicYards),
        ],
        formula: Some("cu ft = tons × 2000 ÷ density; tons = cu ft × density ÷ 2000".to_string()),
        related_calculators: vec![
            crate::calculators::asphalt::tonnage::ID.to_string(),
            crate::calculators::earthwork::excavation::ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;

    #[test]
    fn test_gravel_tons_to_cubic_yards() {
        // 10 tons × 2000 / 105 = 190.48 cu ft = 7.05 cu yd
        let out = compute(&input_map! {
            "material" => "gravel",
            "value" => 10,
            "fromUnit" => "tons",
            "toUnit" => "cubic-yards",
        });
        assert_eq!(out.value_of("Converted Value"), Some("7.05 cu yd"));
    }

    #[test]
    fn test_factor_within_family() {
        let (yards, method) = convert(54.0, ConversionUnit::CubicFeet, ConversionUnit::CubicYards, ConversionMaterial::Sand);
        assert!((yards - 2.0).abs() < 1e-9);
        assert_eq!(method, ConversionMethod::Factor);

        let (tonnes, _) = convert(1.0, ConversionUnit::Tonnes, ConversionUnit::Pounds, ConversionMaterial::Sand);
        assert!((tonnes - 2204.62).abs() < 1e-9);
    }

    #[test]
    fn test_volume_to_weight_uses_density() {
        // 1 cu yd of concrete = 27 × 150 = 4050 lb
        let (pounds, method) = convert(1.0, ConversionUnit::CubicYards, ConversionUnit::Pounds, ConversionMaterial::Concrete);
        assert!((pounds - 4050.0).abs() < 1e-9);
        assert_eq!(method, ConversionMethod::Density);
    }

    #[test]
    fn test_round_trip_through_density() {
        let (m3, _) = convert(3.0, ConversionUnit::Tons, ConversionUnit::CubicMeters, ConversionMaterial::Asphalt);
        let (tons, _) = convert(m3, ConversionUnit::CubicMeters, ConversionUnit::Tons, ConversionMaterial::Asphalt);
        assert!((tons - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        let out = compute(&input_map! { "value" => 12, "fromUnit" => "bushels", "toUnit" => "tons" });
        assert_eq!(out.value_of("Converted Value"), Some("12.00 tons"));
        assert!(out.has_kind(crate::results::RecommendationKind::Warning));
    }

    #[test]
    fn test_same_unit() {
        let estimate = calculate(&ConversionInput::from_inputs(&input_map! {
            "value" => 4.5,
            "fromUnit" => "pounds",
            "toUnit" => "pounds",
        }));
        assert_eq!(estimate.result, 4.5);
        assert_eq!(estimate.method, ConversionMethod::SameUnit);
    }
}
