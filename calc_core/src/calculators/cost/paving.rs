//! # Paving Cost
//!
//! Installed cost of a paved surface.
//!
//! ## Method
//!
//! - Material: `area × rate(type) × thickness / standard_thickness(type)`
//! - Add-ons: site prep $1.00/sq ft, drainage $0.75/sq ft, edging
//!   `sqrt(area) × 4` ft at $5/ft (perimeter of an equivalent square)
//! - Labor: 50% of material
//! - Equipment: 15% of material + labor
//! - Timeline by area: < 1,000 sq ft "1-2 days", < 5,000 "3-5 days",
//!   otherwise "1-2 weeks"

use serde::{Deserialize, Serialize};

use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;

pub const ID: &str = "paving-cost";

pub const PREP_COST_PER_SQFT: f64 = 1.0;
pub const DRAINAGE_COST_PER_SQFT: f64 = 0.75;
pub const EDGING_COST_PER_FT: f64 = 5.0;
pub const LABOR_SHARE_OF_MATERIAL: f64 = 0.5;
pub const EQUIPMENT_SHARE: f64 = 0.15;

field_choice! {
    /// Surface material
    pub enum PavingType {
        Asphalt => ("asphalt", "Asphalt"),
        Concrete => ("concrete", "Concrete"),
        Pavers => ("pavers", "Interlocking pavers"),
        Gravel => ("gravel", "Gravel"),
    }
}

impl PavingType {
    /// Material cost per square foot at the standard thickness
    pub fn rate_per_sqft(self) -> f64 {
        match self {
            PavingType::Asphalt => 3.5,
            PavingType::Concrete => 6.0,
            PavingType::Pavers => 10.0,
            PavingType::Gravel => 1.5,
        }
    }

    /// Thickness the rate is quoted for, inches
    pub fn standard_thickness_in(self) -> f64 {
        match self {
            PavingType::Asphalt => 3.0,
            PavingType::Concrete => 4.0,
            PavingType::Pavers => 2.5,
            PavingType::Gravel => 4.0,
        }
    }

    fn maintenance_note(self) -> &'static str {
        match self {
            PavingType::Asphalt => "Seal-coat asphalt every 2-3 years to keep it from drying out and raveling.",
            PavingType::Concrete => "Saw-cut control joints within 24 hours, spaced no more than 2-3 times the slab depth in feet.",
            PavingType::Pavers => "Sweep polymeric sand into the joints to lock pavers and block weeds.",
            PavingType::Gravel => "Expect to top up gravel every few years as it migrates and compacts.",
        }
    }
}

/// Rough schedule for a given area.
pub fn timeline_for_area(area_sqft: f64) -> &'static str {
    if area_sqft < 1000.0 {
        "1-2 days"
    } else if area_sqft < 5000.0 {
        "3-5 days"
    } else {
        "1-2 weeks"
    }
}

/// Paving cost inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PavingCostInput {
    pub area_sqft: f64,
    pub paving: PavingType,
    pub thickness_in: f64,
    pub include_prep: bool,
    pub include_drainage: bool,
    pub include_edging: bool,
}

impl PavingCostInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        let paving = inputs.choice_or("pavingType", PavingType::Asphalt);
        PavingCostInput {
            area_sqft: inputs.number("area"),
            paving,
            thickness_in: inputs.number_or("thickness", paving.standard_thickness_in()),
            include_prep: inputs.flag_or("includePrep", true),
            include_drainage: inputs.flag_or("includeDrainage", false),
            include_edging: inputs.flag_or("includeEdging", false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavingCostEstimate {
    pub material_cost: f64,
    pub prep_cost: f64,
    pub drainage_cost: f64,
    pub edging_ft: f64,
    pub edging_cost: f64,
    pub labor_cost: f64,
    pub equipment_cost: f64,
    pub total_cost: f64,
    /// Zero when the area is zero
    pub cost_per_sqft: f64,
    pub timeline: String,
}

pub fn calculate(input: &PavingCostInput) -> PavingCostEstimate {
    let area = input.area_sqft;
    let thickness_ratio = input.thickness_in / input.paving.standard_thickness_in();
    let material_cost = area * input.paving.rate_per_sqft() * thickness_ratio;

    let prep_cost = if input.include_prep { area * PREP_COST_PER_SQFT } else { 0.0 };
    let drainage_cost = if input.include_drainage { area * DRAINAGE_COST_PER_SQFT } else { 0.0 };
    let edging_ft = if input.include_edging { area.max(0.0).sqrt() * 4.0 } else { 0.0 };
    let edging_cost = edging_ft * EDGING_COST_PER_FT;

    let labor_cost = material_cost * LABOR_SHARE_OF_MATERIAL;
    let equipment_cost = (material_cost + labor_cost) * EQUIPMENT_SHARE;
    let total_cost = material_cost + labor_cost + equipment_cost + prep_cost + drainage_cost + edging_cost;

    PavingCostEstimate {
        material_cost,
        prep_cost,
        drainage_cost,
        edging_ft,
        edging_cost,
        labor_cost,
        equipment_cost,
        total_cost,
        cost_per_sqft: if area > 0.0 { total_cost / area } else { 0.0 },
        timeline: timeline_for_area(area).to_string(),
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = PavingCostInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.entry(
        "Materials",
        format::currency(estimate.material_cost),
        format!(
            "{} at {} per sq ft, {}\" thick",
            input.paving.label(),
            format::currency(input.paving.rate_per_sqft()),
            format::fixed(input.thickness_in, 2)
        ),
    )
    .entry("Labor", format::currency(estimate.labor_cost), "50% of materials")
    .entry("Equipment", format::currency(estimate.equipment_cost), "15% of materials and labor");
    if input.include_prep {
        out.entry("Site Preparation", format::currency(estimate.prep_cost), "Grading and compaction");
    }
    if input.include_drainage {
        out.entry("Drainage", format::currency(estimate.drainage_cost), "Sub-surface drainage allowance");
    }
    if input.include_edging {
        out.entry(
            "Edging",
            format::currency(estimate.edging_cost),
            format!("About {} ft of edge restraint", format::fixed(estimate.edging_ft, 0)),
        );
    }
    out.primary("Total Project Cost", format::currency(estimate.total_cost), "Materials, labor, equipment and add-ons")
        .entry("Cost per Square Foot", format::currency(estimate.cost_per_sqft), "Total ÷ area")
        .entry("Estimated Timeline", estimate.timeline.clone(), "Working days on site, weather permitting");

    out.info(input.paving.maintenance_note());
    if input.thickness_in < input.paving.standard_thickness_in() {
        out.warning(format!(
            "{}\" is thinner than the usual {}\" for {}; expect a shorter service life.",
            format::fixed(input.thickness_in, 2),
            format::fixed(input.paving.standard_thickness_in(), 2),
            input.paving.key()
        ));
    }
    if !input.include_prep {
        out.tip("Most paving failures trace back to poor base preparation; budget for it.");
    }
    out.tip("Get at least three written quotes; regional prices vary by 20% or more.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Paving Cost Estimator".to_string(),
        description: "Installed cost for asphalt, concrete, paver and gravel surfaces.".to_string(),
        category: Category::Cost,
        time_estimate: "2 min".to_string(),
        fields: vec![
            FieldDescriptor::number("area", "Area", 1000.0).unit("sq ft").step(10.0),
            FieldDescriptor::select("pavingType", "Paving Type", PavingType::Asphalt),
            FieldDescriptor::number("thickness", "Thickness", PavingType::Asphalt.standard_thickness_in())
                .unit("in")
                .step(0.5)
                .optional()
                .help("Leave blank for the standard thickness of the chosen surface"),
            FieldDescriptor::checkbox("includePrep", "Include site preparation", true),
            FieldDescriptor::checkbox("includeDrainage", "Include drainage", false),
            FieldDescriptor::checkbox("includeEdging", "Include edging", false),
        ],
        formula: Some("total = material × 1.5 × 1.15 + add-ons".to_string()),
        related_calculators: vec![
            super::waste::ID.to_string(),
            crate::calculators::asphalt::tonnage::ID.to_string(),
            crate::calculators::specialty::timeline::ID.to_string(),
        ],
    }
}
