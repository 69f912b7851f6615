//! # Material Waste
//!
//! Waste allowance as a sum of adjustments on a per-material base rate,
//! floored at 2%:
//!
//! ```text
//! waste% = max(2, base(material) + size + complexity + experience)
//! ```

use serde::{Deserialize, Serialize};

use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;

pub const ID: &str = "material-waste";

/// Lowest waste allowance ever suggested
pub const MIN_WASTE_PCT: f64 = 2.0;

field_choice! {
    /// Material being ordered
    pub enum WasteMaterial {
        Asphalt => ("asphalt", "Asphalt"),
        Concrete => ("concrete", "Concrete"),
        Gravel => ("gravel", "Gravel"),
        Sand => ("sand", "Sand"),
        Pavers => ("pavers", "Pavers"),
        Soil => ("soil", "Soil / fill"),
    }
}

impl WasteMaterial {
    pub fn base_pct(self) -> f64 {
        match self {
            WasteMaterial::Asphalt => 5.0,
            WasteMaterial::Concrete => 7.0,
            WasteMaterial::Gravel => 10.0,
            WasteMaterial::Sand => 12.0,
            WasteMaterial::Pavers => 8.0,
            WasteMaterial::Soil => 15.0,
        }
    }
}

field_choice! {
    pub enum ProjectSize {
        Small => ("small", "Small (under 500 sq ft)"),
        Medium => ("medium", "Medium"),
        Large => ("large", "Large (over 5,000 sq ft)"),
    }
}

impl ProjectSize {
    pub fn adjustment_pct(self) -> f64 {
        match self {
            ProjectSize::Small => 2.0,
            ProjectSize::Medium => 0.0,
            ProjectSize::Large => -1.0,
        }
    }
}

field_choice! {
    /// How much cutting and fitting the layout needs
    pub enum CutComplexity {
        Simple => ("simple", "Simple (rectangular)"),
        Moderate => ("moderate", "Moderate (some curves)"),
        Complex => ("complex", "Complex (curves, patterns, obstacles)"),
    }
}

impl CutComplexity {
    pub fn adjustment_pct(self) -> f64 {
        match self {
            CutComplexity::Simple => 0.0,
            CutComplexity::Moderate => 3.0,
            CutComplexity::Complex => 7.0,
        }
    }
}

field_choice! {
    pub enum WorkerExperience {
        Novice => ("novice", "Novice / DIY"),
        Intermediate => ("intermediate", "Intermediate"),
        Expert => ("expert", "Professional crew"),
    }
}

impl WorkerExperience {
    pub fn adjustment_pct(self) -> f64 {
        match self {
            WorkerExperience::Novice => 5.0,
            WorkerExperience::Intermediate => 2.0,
            WorkerExperience::Expert => 0.0,
        }
    }
}

/// Material waste inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialWasteInput {
    pub material: WasteMaterial,
    pub quantity: f64,
    /// Free-text unit echoed in the output (e.g., "tons")
    pub unit: String,
    pub project_size: ProjectSize,
    pub cut_complexity: CutComplexity,
    pub experience: WorkerExperience,
    /// Zero when not entered
    pub cost_per_unit: f64,
}

impl MaterialWasteInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        MaterialWasteInput {
            material: inputs.choice_or("materialType", WasteMaterial::Gravel),
            quantity: inputs.number("quantity"),
            unit: inputs
                .text("unit")
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .unwrap_or("units")
                .to_string(),
            project_size: inputs.choice_or("projectType", ProjectSize::Medium),
            cut_complexity: inputs.choice_or("cutComplexity", CutComplexity::Simple),
            experience: inputs.choice_or("workerExperience", WorkerExperience::Intermediate),
            cost_per_unit: inputs.number("costPerUnit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialWasteEstimate {
    pub waste_pct: f64,
    pub waste_amount: f64,
    pub total_needed: f64,
    pub waste_cost: f64,
    pub total_cost: f64,
}

/// Clamp a summed allowance to [`MIN_WASTE_PCT`].
pub fn floored_pct(sum: f64) -> f64 {
    sum.max(MIN_WASTE_PCT)
}

pub fn waste_pct(input: &MaterialWasteInput) -> f64 {
    floored_pct(
        input.material.base_pct()
            + input.project_size.adjustment_pct()
            + input.cut_complexity.adjustment_pct()
            + input.experience.adjustment_pct(),
    )
}

pub fn calculate(input: &MaterialWasteInput) -> MaterialWasteEstimate {
    let pct = waste_pct(input);
    let waste_amount = input.quantity * pct / 100.0;
    let total_needed = input.quantity + waste_amount;

    MaterialWasteEstimate {
        waste_pct: pct,
        waste_amount,
        total_needed,
        waste_cost: waste_amount * input.cost_per_unit,
        total_cost: total_needed * input.cost_per_unit,
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = MaterialWasteInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.primary(
        "Waste Factor",
        format::percent(estimate.waste_pct),
        format!("{} base rate with project adjustments", input.material.label()),
    )
    .entry("Waste Amount", format::quantity(estimate.waste_amount, &input.unit), "Expected loss")
    .primary("Total to Order", format::quantity(estimate.total_needed, &input.unit), "Quantity plus waste");
    if input.cost_per_unit > 0.0 {
        out.entry("Cost of Waste", format::currency(estimate.waste_cost), "Waste amount × unit cost")
            .entry("Total Material Cost", format::currency(estimate.total_cost), "Total to order × unit cost");
    }

    if estimate.waste_pct > 20.0 {
        out.warning("Waste above 20% is high; simplifying the layout or using an experienced crew pays for itself.");
    }
    if input.cut_complexity == CutComplexity::Complex {
        out.tip("Dry-lay or mark complex cuts before committing material.");
    }
    out.info("Order waste allowance in the same lot or batch so color and gradation match.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Material Waste Calculator".to_string(),
        description: "How much extra material to order for cutting, spillage and compaction losses.".to_string(),
        category: Category::Cost,
        time_estimate: "1 min".to_string(),
        fields: vec![
            FieldDescriptor::select("materialType", "Material", WasteMaterial::Gravel),
            FieldDescriptor::number("quantity", "Quantity Needed", 100.0),
            FieldDescriptor::text_select(
                "unit",
                "Unit",
                &[("tons", "Tons"), ("cu yd", "Cubic yards"), ("sq ft", "Square feet")],
                "tons",
            )
            .help("Shown next to quantities"),
            FieldDescriptor::radio("projectType", "Project Size", ProjectSize::Medium),
            FieldDescriptor::select("cutComplexity", "Cut Complexity", CutComplexity::Simple),
            FieldDescriptor::select("workerExperience", "Crew Experience", WorkerExperience::Intermediate),
            FieldDescriptor::number("costPerUnit", "Cost per Unit", 0.0).unit("$").optional(),
        ],
        formula: Some("waste % = max(2, base + size + complexity + experience)".to_string()),
        related_calculators: vec![
            super::paving::ID.to_string(),
            crate::calculators::concrete::volume::ID.to_string(),
        ],
    }
}
