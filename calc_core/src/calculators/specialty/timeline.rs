//! # Project Timeline
//!
//! Working and calendar days for a site project from crew productivity.
//!
//! ```text
//! daily     = base_rate(type) × crew × equipment × season × complexity
//! work_days = ceil(size ÷ daily × 1.1)
//! calendar  = work_days + 2 × floor(work_days ÷ 5)
//! ```
//!
//! The 1.1 covers mobilization and small delays. Work days are split into
//! phases by fixed shares, each rounded up, so phases can sum to a little
//! more than the total.

use serde::{Deserialize, Serialize};

use crate::calculators::ceil_count;
use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::{FieldChoice, InputMap};
use crate::results::CalculatorResults;

pub const ID: &str = "project-timeline";

pub const CONTINGENCY_FACTOR: f64 = 1.1;
pub const WORK_DAYS_PER_WEEK: u64 = 5;
pub const WEEKEND_DAYS: u64 = 2;

/// Phase names and their share of work days
pub const PHASES: [(&str, f64); 4] = [
    ("Site Preparation", 0.20),
    ("Main Work", 0.60),
    ("Finishing", 0.15),
    ("Inspection & Cleanup", 0.05),
];

field_choice! {
    pub enum ProjectType {
        Paving => ("paving", "Paving"),
        Concrete => ("concrete", "Concrete flatwork"),
        Excavation => ("excavation", "Excavation"),
        Landscaping => ("landscaping", "Landscaping"),
    }
}

impl ProjectType {
    /// Output of one worker per day, in the project's size unit
    pub fn base_rate(self) -> f64 {
        match self {
            ProjectType::Paving => 500.0,
            ProjectType::Concrete => 200.0,
            ProjectType::Excavation => 300.0,
            ProjectType::Landscaping => 250.0,
        }
    }

    pub fn size_unit(self) -> &'static str {
        match self {
            ProjectType::Excavation => "cu yd",
            ProjectType::Paving | ProjectType::Concrete | ProjectType::Landscaping => "sq ft",
        }
    }
}

field_choice! {
    pub enum EquipmentLevel {
        Basic => ("basic", "Basic (hand tools, small equipment)"),
        Standard => ("standard", "Standard"),
        Advanced => ("advanced", "Advanced (full machine fleet)"),
    }
}

impl EquipmentLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            EquipmentLevel::Basic => 0.8,
            EquipmentLevel::Standard => 1.0,
            EquipmentLevel::Advanced => 1.3,
        }
    }
}

field_choice! {
    pub enum Season {
        Spring => ("spring", "Spring"),
        Summer => ("summer", "Summer"),
        Fall => ("fall", "Fall"),
        Winter => ("winter", "Winter"),
    }
}

impl Season {
    pub fn multiplier(self) -> f64 {
        match self {
            Season::Spring => 0.9,
            Season::Summer => 1.0,
            Season::Fall => 0.95,
            Season::Winter => 0.6,
        }
    }
}

field_choice! {
    pub enum Complexity {
        Simple => ("simple", "Simple"),
        Moderate => ("moderate", "Moderate"),
        Complex => ("complex", "Complex"),
    }
}

impl Complexity {
    pub fn multiplier(self) -> f64 {
        match self {
            Complexity::Simple => 1.1,
            Complexity::Moderate => 1.0,
            Complexity::Complex => 0.75,
        }
    }
}

/// Project timeline inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineInput {
    pub project: ProjectType,
    pub size: f64,
    /// At least one worker is assumed
    pub crew_size: f64,
    pub equipment: EquipmentLevel,
    pub season: Season,
    pub complexity: Complexity,
}

impl TimelineInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        TimelineInput {
            project: inputs.choice_or("projectType", ProjectType::Paving),
            size: inputs.number("projectSize"),
            crew_size: inputs.number_or("crewSize", 1.0),
            equipment: inputs.choice_or("equipmentLevel", EquipmentLevel::Standard),
            season: inputs.choice_or("season", Season::Summer),
            complexity: inputs.choice_or("complexity", Complexity::Moderate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDuration {
    pub name: String,
    pub days: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEstimate {
    pub daily_productivity: f64,
    pub work_days: u64,
    pub calendar_days: u64,
    pub phases: Vec<PhaseDuration>,
}

pub fn daily_productivity(input: &TimelineInput) -> f64 {
    input.project.base_rate()
        * input.crew_size
        * input.equipment.multiplier()
        * input.season.multiplier()
        * input.complexity.multiplier()
}

pub fn calculate(input: &TimelineInput) -> TimelineEstimate {
    let daily = daily_productivity(input);
    let work_days = if daily > 0.0 {
        ceil_count(input.size / daily * CONTINGENCY_FACTOR)
    } else {
        0
    };
    let phases = PHASES
        .iter()
        .map(|(name, share)| PhaseDuration {
            name: name.to_string(),
            days: ceil_count(work_days as f64 * share),
        })
        .collect();

    TimelineEstimate {
        daily_productivity: daily,
        work_days,
        calendar_days: work_days.saturating_add(WEEKEND_DAYS * (work_days / WORK_DAYS_PER_WEEK)),
        phases,
    }
}

fn days(n: u64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format::count(n, "days")
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = TimelineInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.entry(
        "Daily Productivity",
        format::quantity(estimate.daily_productivity, &format!("{}/day", input.project.size_unit())),
        format!("{} crew at {}", format::fixed(input.crew_size, 0), input.season.key()),
    )
    .primary("Working Days", days(estimate.work_days), "Includes a 10% contingency")
    .primary("Calendar Days", days(estimate.calendar_days), "Working days plus weekends");
    for phase in &estimate.phases {
        out.entry(phase.name.clone(), days(phase.days), "Share of working days, rounded up");
    }

    if input.season == Season::Winter {
        out.warning("Asphalt and concrete placement is limited below 40°F; winter schedules slip.");
    }
    if input.crew_size < 2.0 {
        out.tip("A second worker roughly halves the schedule for most site work.");
    }
    out.info("Add time for permits, inspections and material lead times not shown here.");
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Project Timeline Estimator".to_string(),
        description: "Working and calendar days for paving, concrete, excavation and landscaping jobs.".to_string(),
        category: Category::Specialty,
        time_estimate: "2 min".to_string(),
        fields: vec![
            FieldDescriptor::select("projectType", "Project Type", ProjectType::Paving),
            FieldDescriptor::number("projectSize", "Project Size", 5000.0)
                .unit("sq ft / cu yd")
                .help("Square feet, or cubic yards for excavation"),
            FieldDescriptor::number("crewSize", "Crew Size", 4.0).min(Some(1.0)).step(1.0),
            FieldDescriptor::radio("equipmentLevel", "Equipment", EquipmentLevel::Standard),
            FieldDescriptor::select("season", "Season", Season::Summer),
            FieldDescriptor::radio("complexity", "Complexity", Complexity::Moderate),
        ],
        formula: Some("work days = ceil(size ÷ daily productivity × 1.1)".to_string()),
        related_calculators: vec![
            crate::calculators::cost::paving::ID.to_string(),
            crate::calculators::earthwork::excavation::ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;

    #[test]
    fn test_paving_summer() {
        // 500 × 4 = 2000/day; 10,000 / 2000 × 1.1 = 5.5 -> 6 work days
        let estimate = calculate(&TimelineInput::from_inputs(&input_map! {
            "projectType" => "paving",
            "projectSize" => 10000,
            "crewSize" => 4,
        }));
        assert_eq!(estimate.daily_productivity, 2000.0);
        assert_eq!(estimate.work_days, 6);
        assert_eq!(estimate.calendar_days, 8);
        let phase_days: Vec<u64> = estimate.phases.iter().map(|p| p.days).collect();
        assert_eq!(phase_days, vec![2, 4, 1, 1]);
    }

    #[test]
    fn test_crew_falls_back_to_one() {
        let input = TimelineInput::from_inputs(&input_map! { "projectSize" => 500, "crewSize" => "" });
        assert_eq!(input.crew_size, 1.0);
        // 500 / 500 × 1.1 = 1.1 -> 2
        assert_eq!(calculate(&input).work_days, 2);
    }

    #[test]
    fn test_multipliers_compound() {
        let input = TimelineInput::from_inputs(&input_map! {
            "projectType" => "concrete",
            "crewSize" => 2,
            "equipmentLevel" => "advanced",
            "season" => "winter",
            "complexity" => "complex",
        });
        // 200 × 2 × 1.3 × 0.6 × 0.75
        assert!((daily_productivity(&input) - 234.0).abs() < 1e-9);
    }

    #[test]
    fn test_calendar_adds_weekends() {
        let estimate = calculate(&TimelineInput::from_inputs(&input_map! {
            "projectType" => "paving",
            "projectSize" => 4500,
        }));
        // 4500 / 500 × 1.1 = 9.9 -> 10 work days, 2 weekends
        assert_eq!(estimate.work_days, 10);
        assert_eq!(estimate.calendar_days, 14);
    }

    #[test]
    fn test_zero_size() {
        let out = compute(&InputMap::new());
        assert_eq!(out.value_of("Working Days"), Some("0 days"));
    }
}
