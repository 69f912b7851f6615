//! # Retaining Wall
//!
//! Segmental block count plus the aggregate that goes with it: a leveling
//! base, an optional free-draining backfill zone and an optional drain pipe.
//!
//! ```text
//! blocks    = ceil(height_in / block_height) × ceil(length_in / block_width)
//! base_tons = length × 2 ft × (base_depth_in / 12) × 105 lb/ft³ ÷ 2000
//! backfill  = length × height × 1 ft ÷ 27   (cu yd)
//! drainage  = length                       (ft of perforated pipe)
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::ceil_count;
use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;
use crate::units::{CubicFeet, CubicYards, Feet, Inches, Tons};

pub const ID: &str = "retaining-wall";

pub const DEFAULT_BASE_DEPTH_IN: f64 = 6.0;
pub const BASE_TRENCH_WIDTH_FT: f64 = 2.0;
pub const AGGREGATE_DENSITY_PCF: f64 = 105.0;
pub const AGGREGATE_COST_PER_TON: f64 = 35.0;
/// Depth of the drainage gravel zone behind the wall
pub const BACKFILL_ZONE_FT: f64 = 1.0;
pub const BACKFILL_COST_PER_CY: f64 = 45.0;
pub const DRAIN_PIPE_COST_PER_FT: f64 = 2.5;

field_choice! {
    /// Wall unit style
    pub enum BlockType {
        Standard => ("standard", "Standard block (16\" × 6\")"),
        Large => ("large", "Large block (18\" × 8\")"),
        NaturalStone => ("natural-stone", "Natural stone (24\" × 12\")"),
    }
}

/// Face dimensions and price of one wall unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub unit_cost: f64,
}

impl BlockType {
    pub fn spec(self) -> BlockSpec {
        match self {
            BlockType::Standard => BlockSpec {
                width_in: 16.0,
                height_in: 6.0,
                unit_cost: 4.5,
            },
            BlockType::Large => BlockSpec {
                width_in: 18.0,
                height_in: 8.0,
                unit_cost: 7.25,
            },
            BlockType::NaturalStone => BlockSpec {
                width_in: 24.0,
                height_in: 12.0,
                unit_cost: 18.0,
            },
        }
    }
}

/// Retaining wall inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetainingWallInput {
    pub length_ft: f64,
    pub height_ft: f64,
    pub block: BlockType,
    pub base_depth_in: f64,
    pub include_backfill: bool,
    pub include_drainage: bool,
}

impl RetainingWallInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        RetainingWallInput {
            length_ft: inputs.number("wallLength"),
            height_ft: inputs.number("wallHeight"),
            block: inputs.choice_or("blockType", BlockType::Standard),
            base_depth_in: inputs.number_or("baseDepth", DEFAULT_BASE_DEPTH_IN),
            include_backfill: inputs.flag_or("includeBackfill", true),
            include_drainage: inputs.flag_or("includeDrainage", true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetainingWallEstimate {
    pub face_area_sqft: f64,
    pub courses: u64,
    pub blocks_per_course: u64,
    pub blocks: u64,
    pub block_cost: f64,
    pub base_tons: f64,
    pub base_cost: f64,
    /// Zero when backfill is excluded
    pub backfill_cubic_yards: f64,
    pub backfill_cost: f64,
    /// Zero when drainage is excluded
    pub drain_pipe_ft: f64,
    pub drainage_cost: f64,
    pub total_cost: f64,
}

pub fn calculate(input: &RetainingWallInput) -> RetainingWallEstimate {
    let spec = input.block.spec();
    let height_in: Inches = Feet(input.height_ft).into();
    let length_in: Inches = Feet(input.length_ft).into();

    let courses = ceil_count(height_in.value() / spec.height_in);
    let blocks_per_course = ceil_count(length_in.value() / spec.width_in);
    let blocks = courses.saturating_mul(blocks_per_course);
    let block_cost = blocks as f64 * spec.unit_cost;

    let base_depth: Feet = Inches(input.base_depth_in).into();
    let base_volume = CubicFeet::block(Feet(input.length_ft), Feet(BASE_TRENCH_WIDTH_FT), base_depth);
    let base_tons = Tons::from_volume(base_volume, AGGREGATE_DENSITY_PCF).value();
    let base_cost = base_tons * AGGREGATE_COST_PER_TON;

    let (backfill_cubic_yards, backfill_cost) = if input.include_backfill {
        let zone = CubicFeet::block(Feet(input.length_ft), Feet(input.height_ft), Feet(BACKFILL_ZONE_FT));
        let yards: CubicYards = zone.into();
        (yards.value(), yards.value() * BACKFILL_COST_PER_CY)
    } else {
        (0.0, 0.0)
    };

    let (drain_pipe_ft, drainage_cost) = if input.include_drainage {
        (input.length_ft, input.length_ft * DRAIN_PIPE_COST_PER_FT)
    } else {
        (0.0, 0.0)
    };

    RetainingWallEstimate {
        face_area_sqft: input.length_ft * input.height_ft,
        courses,
        blocks_per_course,
        blocks,
        block_cost,
        base_tons,
        base_cost,
        backfill_cubic_yards,
        backfill_cost,
        drain_pipe_ft,
        drainage_cost,
        total_cost: block_cost + base_cost + backfill_cost + drainage_cost,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = RetainingWallInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.entry("Wall Face Area", format::quantity(estimate.face_area_sqft, "sq ft"), "Length × height")
        .primary(
            "Blocks Needed",
            format::count(estimate.blocks, "blocks"),
            format!(
                "{} courses of {} {}",
                estimate.courses,
                estimate.blocks_per_course,
                input.block.label().to_lowercase()
            ),
        )
        .entry("Block Cost", format::currency(estimate.block_cost), format!("At {} per block", format::currency(input.block.spec().unit_cost)))
        .entry(
            "Base Gravel",
            format::quantity(estimate.base_tons, "tons"),
            format!("{}\" compacted leveling pad, 2 ft wide", format::fixed(input.base_depth_in, 0)),
        );
    if input.include_backfill {
        out.entry(
            "Drainage Backfill",
            format::quantity(estimate.backfill_cubic_yards, "cu yd"),
            "Clean gravel 12\" behind the wall",
        );
    }
    if input.include_drainage {
        out.entry("Perforated Drain Pipe", format::quantity(estimate.drain_pipe_ft, "ft"), "4\" pipe along the base of the wall");
    }
    out.primary("Total Material Cost", format::currency(estimate.total_cost), "Blocks, base, backfill and drainage");

    if input.height_ft > 4.0 {
        out.warning("Walls taller than 4 feet usually require an engineered design and a building permit.");
    } else if input.height_ft > 3.0 {
        out.tip("Add geogrid reinforcement every other course on walls over 3 feet.");
    }
    if !input.include_drainage {
        out.warning("Without a drain pipe, trapped water pressure is the most common cause of wall failure.");
    }
    out.info("Bury the first course about 1 inch for every 8 inches of exposed wall height.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Retaining Wall Calculator".to_string(),
        description: "Block count, base gravel, backfill and drainage for segmental retaining walls.".to_string(),
        category: Category::Concrete,
        time_estimate: "2 min".to_string(),
        fields: vec![
            FieldDescriptor::number("wallLength", "Wall Length", 40.0).unit("ft"),
            FieldDescriptor::number("wallHeight", "Wall Height", 3.0).unit("ft").step(0.5),
            FieldDescriptor::select("blockType", "Block Type", BlockType::Standard),
            FieldDescriptor::number("baseDepth", "Base Depth", DEFAULT_BASE_DEPTH_IN)
                .unit("in")
                .optional()
                .help("Compacted gravel leveling pad"),
            FieldDescriptor::checkbox("includeBackfill", "Include drainage backfill", true),
            FieldDescriptor::checkbox("includeDrainage", "Include drain pipe", true),
        ],
        formula: Some("blocks = ceil(height ÷ block height) × ceil(length ÷ block width)".to_string()),
        related_calculators: vec![
            super::volume::ID.to_string(),
            crate::calculators::earthwork::excavation::ID.to_string(),
        ],
    }
}
