//! # Earthwork Excavation
//!
//! Bank, loose and compacted volumes for a rectangular excavation, with
//! hauling estimated from the loose (swelled) volume.
//!
//! ## Soil Factors
//!
//! | Soil    | Swell | Shrink | Compaction | Bank density (lb/yd³) |
//! |---------|-------|--------|------------|-----------------------|
//! | Sand    | 1.12  | 0.95   | 95%        | 2700                  |
//! | Clay    | 1.30  | 0.90   | 90%        | 3000                  |
//! | Loam    | 1.25  | 0.90   | 92%        | 2800                  |
//! | Gravel  | 1.15  | 0.97   | 97%        | 3000                  |
//! | Rock    | 1.50  | 1.30   | 85%        | 4000                  |
//! | Topsoil | 1.35  | 0.85   | 88%        | 2300                  |
//!
//! Blasted rock never compacts back to its bank volume, hence a shrink
//! factor above 1.

use serde::{Deserialize, Serialize};

use crate::calculators::ceil_count;
use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;
use crate::units::{CubicFeet, CubicYards, Feet, Pounds, Tons};

pub const ID: &str = "excavation";

/// Loose cubic yards per dump truck load
pub const TRUCK_CAPACITY_CY: f64 = 10.0;

pub const HAUL_COST_PER_LOAD: f64 = 150.0;

/// OSHA requires protective systems for trenches this deep or deeper
pub const TRENCH_PROTECTION_DEPTH_FT: f64 = 5.0;

field_choice! {
    pub enum SoilType {
        Sand => ("sand", "Sand"),
        Clay => ("clay", "Clay"),
        Loam => ("loam", "Loam / common earth"),
        Gravel => ("gravel", "Gravel"),
        Rock => ("rock", "Rock (blasted)"),
        Topsoil => ("topsoil", "Topsoil"),
    }
}

/// Volume-change and weight properties of a soil.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    /// Loose volume ÷ bank volume
    pub swell: f64,
    /// Compacted volume ÷ bank volume
    pub shrink: f64,
    /// Achievable compaction, percent of standard Proctor
    pub compaction_pct: f64,
    /// Bank density, lb/yd³
    pub density_lb_per_cy: f64,
}

impl SoilType {
    pub fn properties(self) -> SoilProperties {
        let (swell, shrink, compaction_pct, density_lb_per_cy) = match self {
            SoilType::Sand => (1.12, 0.95, 95.0, 2700.0),
            SoilType::Clay => (1.30, 0.90, 90.0, 3000.0),
            SoilType::Loam => (1.25, 0.90, 92.0, 2800.0),
            SoilType::Gravel => (1.15, 0.97, 97.0, 3000.0),
            SoilType::Rock => (1.50, 1.30, 85.0, 4000.0),
            SoilType::Topsoil => (1.35, 0.85, 88.0, 2300.0),
        };
        SoilProperties {
            swell,
            shrink,
            compaction_pct,
            density_lb_per_cy,
        }
    }
}

/// Excavation inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcavationInput {
    pub length_ft: f64,
    pub width_ft: f64,
    pub depth_ft: f64,
    pub soil: SoilType,
    /// Soil table value unless overridden
    pub swell_factor: f64,
    /// Soil table value unless overridden
    pub shrink_factor: f64,
    pub apply_swell: bool,
    /// Compact the swelled volume instead of the bank volume
    pub compact_from_loose: bool,
}

impl ExcavationInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        let soil = inputs.choice_or("soilType", SoilType::Loam);
        let props = soil.properties();
        ExcavationInput {
            length_ft: inputs.number("length"),
            width_ft: inputs.number("width"),
            depth_ft: inputs.number("depth"),
            soil,
            swell_factor: inputs.number_or("swellFactor", props.swell),
            shrink_factor: inputs.number_or("shrinkFactor", props.shrink),
            apply_swell: inputs.flag_or("applySwell", true),
            compact_from_loose: inputs.flag_or("compactFromLoose", false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcavationEstimate {
    pub bank_cubic_yards: f64,
    pub loose_cubic_yards: f64,
    pub compacted_cubic_yards: f64,
    pub weight_tons: f64,
    pub truck_loads: u64,
    pub hauling_cost: f64,
}

pub fn calculate(input: &ExcavationInput) -> ExcavationEstimate {
    let bank: CubicYards = CubicFeet::block(Feet(input.length_ft), Feet(input.width_ft), Feet(input.depth_ft)).into();
    let loose = if input.apply_swell { bank * input.swell_factor } else { bank };
    let compacted = if input.compact_from_loose && input.apply_swell {
        loose * input.shrink_factor
    } else {
        bank * input.shrink_factor
    };
    let weight: Tons = Pounds(bank.value() * input.soil.properties().density_lb_per_cy).into();
    let truck_loads = ceil_count(loose.value() / TRUCK_CAPACITY_CY);

    ExcavationEstimate {
        bank_cubic_yards: bank.value(),
        loose_cubic_yards: loose.value(),
        compacted_cubic_yards: compacted.value(),
        weight_tons: weight.value(),
        truck_loads,
        hauling_cost: truck_loads as f64 * HAUL_COST_PER_LOAD,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = ExcavationInput::from_inputs(inputs);
    let estimate = calculate(&input);
    let props = input.soil.properties();

    let mut out = CalculatorResults::new();
    out.primary(
        "Bank Volume",
        format::quantity(estimate.bank_cubic_yards, "cu yd"),
        "In-place volume before digging",
    )
    .entry(
        "Loose Volume",
        format::quantity(estimate.loose_cubic_yards, "cu yd"),
        if input.apply_swell {
            format!("Swell factor {}", format::fixed(input.swell_factor, 2))
        } else {
            "Swell not applied".to_string()
        },
    )
    .entry(
        "Compacted Volume",
        format::quantity(estimate.compacted_cubic_yards, "cu yd"),
        format!("Shrink factor {}", format::fixed(input.shrink_factor, 2)),
    )
    .entry("Material Weight", format::quantity(estimate.weight_tons, "tons"), format!("{} lb per bank cu yd", format::fixed(props.density_lb_per_cy, 0)))
    .primary(
        "Truck Loads",
        format::count(estimate.truck_loads, "loads"),
        format!("{} cu yd loose per truck", format::fixed(TRUCK_CAPACITY_CY, 0)),
    )
    .entry(
        "Hauling Cost",
        format::currency(estimate.hauling_cost),
        format!("{} per load", format::currency(HAUL_COST_PER_LOAD)),
    );

    out.info(format!(
        "{} typically compacts to about {}% of standard Proctor density.",
        input.soil.label(),
        format::fixed(props.compaction_pct, 0)
    ));
    if input.depth_ft >= TRENCH_PROTECTION_DEPTH_FT {
        out.warning("Excavations 5 feet or deeper need shoring, sloping or a trench box under OSHA rules.");
    }
    match input.soil {
        SoilType::Rock => {
            out.warning("Rock excavation needs a breaker or blasting; get a specialist quote.");
        }
        SoilType::Clay => {
            out.tip("Clay is sticky when wet and hard when dry; schedule digging around the weather.");
        }
        _ => {}
    }
    out.tip("Call 811 before digging to have buried utilities marked.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Excavation Calculator".to_string(),
        description: "Bank, loose and compacted soil volumes with truck loads and hauling cost.".to_string(),
        category: Category::Earthwork,
        time_estimate: "2 min".to_string(),
        fields: vec![
            FieldDescriptor::number("length", "Length", 30.0).unit("ft"),
            FieldDescriptor::number("width", "Width", 20.0).unit("ft"),
            FieldDescriptor::number("depth", "Depth", 3.0).unit("ft").step(0.5),
            FieldDescriptor::select("soilType", "Soil Type", SoilType::Loam),
            FieldDescriptor::number("swellFactor", "Swell Factor", 0.0)
                .step(0.01)
                .optional()
                .help("Leave blank to use the soil's typical swell"),
            FieldDescriptor::number("shrinkFactor", "Shrink Factor", 0.0)
                .step(0.01)
                .optional()
                .help("Leave blank to use the soil's typical shrink"),
            FieldDescriptor::checkbox("applySwell", "Apply swell to hauling volume", true),
            FieldDescriptor::checkbox("compactFromLoose", "Compact from loose volume", false),
        ],
        formula: Some("bank cu yd = L × W × D ÷ 27; loose = bank × swell; loads = ceil(loose ÷ 10)".to_string()),
        related_calculators: vec![
            crate::calculators::concrete::retaining_wall::ID.to_string(),
            crate::calculators::measurement::conversion::ID.to_string(),
        ],
    }
}
