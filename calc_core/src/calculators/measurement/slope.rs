//! # Slope and Grade
//!
//! A slope can be entered three ways: rise over run, an angle in degrees, or
//! a percent grade. Whichever is given, the other two are derived along with
//! the slope length and a reduced `rise:run` ratio.
//!
//! ```text
//! percent = rise / run × 100
//! angle   = atan(rise / run)
//! length  = sqrt(rise² + run²)
//! ```
//!
//! In the angle and percent modes the grade is taken as entered and the
//! other representation follows from it. The run comes from
//! `horizontalDistance` and only the rise, slope length and ratio depend on
//! it; with no distance the ratio is reduced from the grade itself.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculators::measurement::slope::{calculate, SlopeInput};
//! use calc_core::input_map;
//!
//! let estimate = calculate(&SlopeInput::from_inputs(&input_map! { "rise" => 1, "run" => 12 }));
//! assert!((estimate.percent - 8.3333).abs() < 1e-3);
//! assert_eq!(estimate.ratio, "1:12");
//! ```

use serde::{Deserialize, Serialize};

use crate::field_choice;
use crate::fields::{CalculatorDescriptor, Category, FieldDescriptor};
use crate::format;
use crate::inputs::InputMap;
use crate::results::CalculatorResults;

pub const ID: &str = "slope-grade";

pub const ADA_RAMP_MAX_PCT: f64 = 8.33;
pub const DRIVEWAY_MAX_PCT: f64 = 15.0;
pub const DRAINAGE_MIN_PCT: f64 = 1.0;
pub const DRAINAGE_PREFERRED_PCT: f64 = 2.0;
pub const ROAD_MAX_PCT: f64 = 12.0;
/// Steepest lawn a ride-on mower handles safely (3:1)
pub const LAWN_MAX_PCT: f64 = 33.0;

field_choice! {
    pub enum SlopeInputMode {
        RiseRun => ("rise-run", "Rise and run"),
        Angle => ("angle", "Angle (degrees)"),
        Percent => ("percent", "Percent grade"),
    }
}

field_choice! {
    /// What the slope is for, which decides the advisory limits
    pub enum SlopeApplication {
        General => ("general", "General"),
        AdaRamp => ("ada-ramp", "ADA ramp"),
        Driveway => ("driveway", "Driveway"),
        Drainage => ("drainage", "Drainage / paved surface"),
        Road => ("road", "Road"),
        Lawn => ("lawn", "Lawn / landscaping"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeClass {
    Flat,
    Gentle,
    Moderate,
    Steep,
    VerySteep,
}

impl SlopeClass {
    pub fn for_percent(percent: f64) -> Self {
        let p = percent.abs();
        if p < 3.0 {
            SlopeClass::Flat
        } else if p < 8.0 {
            SlopeClass::Gentle
        } else if p < 15.0 {
            SlopeClass::Moderate
        } else if p < 30.0 {
            SlopeClass::Steep
        } else {
            SlopeClass::VerySteep
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlopeClass::Flat => "Flat",
            SlopeClass::Gentle => "Gentle",
            SlopeClass::Moderate => "Moderate",
            SlopeClass::Steep => "Steep",
            SlopeClass::VerySteep => "Very Steep",
        }
    }
}

/// Slope inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeInput {
    pub mode: SlopeInputMode,
    pub rise: f64,
    pub run: f64,
    pub angle_deg: f64,
    pub percent: f64,
    /// Run used by the angle and percent modes
    pub horizontal_distance: f64,
    pub application: SlopeApplication,
}

impl SlopeInput {
    pub fn from_inputs(inputs: &InputMap) -> Self {
        SlopeInput {
            mode: inputs.choice_or("inputMode", SlopeInputMode::RiseRun),
            rise: inputs.number("rise"),
            run: inputs.number("run"),
            angle_deg: inputs.number("angle"),
            percent: inputs.number("percent"),
            horizontal_distance: inputs.number("horizontalDistance"),
            application: inputs.choice_or("application", SlopeApplication::General),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeEstimate {
    pub rise: f64,
    pub run: f64,
    pub percent: f64,
    pub angle_deg: f64,
    pub slope_length: f64,
    /// `rise:run` reduced to lowest terms at hundredth precision
    pub ratio: String,
    pub class: SlopeClass,
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn hundredths(value: f64) -> u64 {
    let scaled = (value.abs() * 100.0).round();
    if scaled.is_finite() {
        scaled as u64
    } else {
        0
    }
}

/// `rise:run` in lowest terms, e.g. `1:12`
pub fn reduced_ratio(rise: f64, run: f64) -> String {
    let r = hundredths(rise);
    let h = hundredths(run);
    match gcd(r, h) {
        0 => "0:0".to_string(),
        g => format!("{}:{}", r / g, h / g),
    }
}

pub fn calculate(input: &SlopeInput) -> SlopeEstimate {
    let (rise, run, percent, angle_deg) = match input.mode {
        SlopeInputMode::RiseRun => {
            let (rise, run) = (input.rise, input.run);
            if run == 0.0 {
                (rise, run, 0.0, 0.0)
            } else {
                (rise, run, rise / run * 100.0, (rise / run).atan().to_degrees())
            }
        }
        SlopeInputMode::Angle => {
            let grade = input.angle_deg.to_radians().tan();
            let run = input.horizontal_distance;
            (run * grade, run, grade * 100.0, input.angle_deg)
        }
        SlopeInputMode::Percent => {
            let grade = input.percent / 100.0;
            let run = input.horizontal_distance;
            (run * grade, run, input.percent, grade.atan().to_degrees())
        }
    };

    let ratio = if run == 0.0 && input.mode != SlopeInputMode::RiseRun {
        reduced_ratio(percent, 100.0)
    } else {
        reduced_ratio(rise, run)
    };

    SlopeEstimate {
        rise,
        run,
        percent,
        angle_deg,
        slope_length: rise.hypot(run),
        ratio,
        class: SlopeClass::for_percent(percent),
    }
}

fn advise(out: &mut CalculatorResults, application: SlopeApplication, percent: f64) {
    // Limits are judged on the grade as displayed, so 1:12 reads as 8.33%
    let p = (percent.abs() * 100.0).round() / 100.0;
    match application {
        SlopeApplication::General => {
            out.info("Pick an application to check this slope against common design limits.");
        }
        SlopeApplication::AdaRamp => {
            if p > ADA_RAMP_MAX_PCT {
                out.warning("Exceeds the ADA maximum ramp slope of 8.33% (1:12).");
            } else {
                out.tip("Within the ADA ramp limit; add a level landing every 30 inches of rise.");
            }
        }
        SlopeApplication::Driveway => {
            if p > DRIVEWAY_MAX_PCT {
                out.warning("Driveways steeper than 15% are hard to climb in winter and may scrape vehicles.");
            } else {
                out.tip("Driveway grade is within the usual 15% maximum.");
            }
        }
        SlopeApplication::Drainage => {
            if p < DRAINAGE_MIN_PCT {
                out.warning("Below 1% water will pond; paved surfaces need at least 1% fall.");
            } else if p < DRAINAGE_PREFERRED_PCT {
                out.tip("Drains, but 2% gives a margin for settlement and construction tolerance.");
            } else {
                out.info("Enough fall for surface drainage.");
            }
        }
        SlopeApplication::Road => {
            if p > ROAD_MAX_PCT {
                out.warning("Grades above 12% exceed typical road design limits.");
            } else {
                out.info("Within typical road grade limits.");
            }
        }
        SlopeApplication::Lawn => {
            if p > LAWN_MAX_PCT {
                out.warning("Slopes steeper than 33% (3:1) are unsafe to mow; consider ground cover or terracing.");
            } else {
                out.tip("Mowable slope; keep it above 1% so the lawn drains.");
            }
        }
    }
}

pub fn compute(inputs: &InputMap) -> CalculatorResults {
    let input = SlopeInput::from_inputs(inputs);
    let estimate = calculate(&input);

    let mut out = CalculatorResults::new();
    out.primary("Percent Grade", format::percent(estimate.percent), "Rise ÷ run × 100")
        .primary("Angle", format!("{}°", format::fixed(estimate.angle_deg, 2)), "Degrees above horizontal")
        .entry("Ratio (Rise:Run)", estimate.ratio.clone(), "Reduced to lowest terms")
        .entry("Rise", format::quantity(estimate.rise, "ft"), "Vertical change")
        .entry("Run", format::quantity(estimate.run, "ft"), "Horizontal distance")
        .entry("Slope Length", format::quantity(estimate.slope_length, "ft"), "Distance along the surface")
        .entry("Classification", estimate.class.label(), "By percent grade");

    advise(&mut out, input.application, estimate.percent);
    if estimate.run == 0.0 {
        match input.mode {
            SlopeInputMode::RiseRun => out.tip("Enter a run to get a grade."),
            SlopeInputMode::Angle | SlopeInputMode::Percent => {
                out.tip("Enter a horizontal distance to get the rise and slope length.")
            }
        };
    }
    out
}

pub fn descriptor() -> CalculatorDescriptor {
    CalculatorDescriptor {
        id: ID.to_string(),
        title: "Slope & Grade Calculator".to_string(),
        description: "Convert between rise/run, degrees and percent grade, with ADA and drainage checks.".to_string(),
        category: Category::Measurement,
        time_estimate: "1 min".to_string(),
        fields: vec![
            FieldDescriptor::radio("inputMode", "Input Mode", SlopeInputMode::RiseRun),
            FieldDescriptor::number("rise", "Rise", 1.0).unit("ft").step(0.01).min(None),
            FieldDescriptor::number("run", "Run", 12.0).unit("ft").step(0.01),
            FieldDescriptor::number("angle", "Angle", 0.0)
                .unit("°")
                .step(0.1)
                .min(Some(-89.9))
                .max(89.9)
                .optional(),
            FieldDescriptor::number("percent", "Percent Grade", 0.0)
                .unit("%")
                .step(0.1)
                .min(None)
                .optional(),
            FieldDescriptor::number("horizontalDistance", "Horizontal Distance", 0.0)
                .unit("ft")
                .optional()
                .help("Run used with the angle and percent modes"),
            FieldDescriptor::select("application", "Application", SlopeApplication::General),
        ],
        formula: Some("percent = rise ÷ run × 100; angle = atan(rise ÷ run)".to_string()),
        related_calculators: vec![
            crate::calculators::earthwork::excavation::ID.to_string(),
            super::conversion::ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;
    use crate::results::RecommendationKind;

    #[test]
    fn test_rise_run() {
        let estimate = calculate(&SlopeInput::from_inputs(&input_map! { "rise" => 1, "run" => 12 }));
        assert!((estimate.percent - 8.3333).abs() < 1e-3);
        assert!((estimate.angle_deg - 4.7636).abs() < 1e-3);
        assert_eq!(estimate.ratio, "1:12");
        assert_eq!(estimate.class, SlopeClass::Moderate);
    }

    #[test]
    fn test_percent_mode_reproduces_rise() {
        let estimate = calculate(&SlopeInput::from_inputs(&input_map! {
            "inputMode" => "percent",
            "percent" => 100.0 / 12.0,
            "horizontalDistance" => 12,
        }));
        assert!((estimate.rise - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_mode() {
        let estimate = calculate(&SlopeInput::from_inputs(&input_map! {
            "inputMode" => "angle",
            "angle" => 45,
            "horizontalDistance" => 10,
        }));
        assert!((estimate.rise - 10.0).abs() < 1e-9);
        assert!((estimate.percent - 100.0).abs() < 1e-9);
        assert_eq!(estimate.ratio, "1:1");
        assert_eq!(estimate.class, SlopeClass::VerySteep);
    }

    #[test]
    fn test_zero_run() {
        let estimate = calculate(&SlopeInput::from_inputs(&input_map! { "rise" => 3 }));
        assert_eq!(estimate.percent, 0.0);
        assert_eq!(estimate.angle_deg, 0.0);
        assert_eq!(estimate.ratio, "1:0");
    }

    #[test]
    fn test_reduced_ratio() {
        assert_eq!(reduced_ratio(0.5, 10.0), "1:20");
        assert_eq!(reduced_ratio(2.5, 7.5), "1:3");
        assert_eq!(reduced_ratio(0.0, 0.0), "0:0");
        assert_eq!(reduced_ratio(f64::MAX, 1.0), "0:1");
    }

    #[test]
    fn test_class_bands() {
        assert_eq!(SlopeClass::for_percent(2.99), SlopeClass::Flat);
        assert_eq!(SlopeClass::for_percent(3.0), SlopeClass::Gentle);
        assert_eq!(SlopeClass::for_percent(14.9), SlopeClass::Moderate);
        assert_eq!(SlopeClass::for_percent(29.9), SlopeClass::Steep);
        assert_eq!(SlopeClass::for_percent(30.0), SlopeClass::VerySteep);
    }

    #[test]
    fn test_percent_mode_without_distance() {
        let estimate = calculate(&SlopeInput::from_inputs(&input_map! {
            "inputMode" => "percent",
            "percent" => 10,
        }));
        assert_eq!(estimate.percent, 10.0);
        assert!((estimate.angle_deg - 5.7106).abs() < 1e-3);
        assert_eq!(estimate.class, SlopeClass::Moderate);
        assert_eq!(estimate.rise, 0.0);
        assert_eq!(estimate.ratio, "1:10");
    }

    #[test]
    fn test_angle_mode_without_distance() {
        let out = compute(&input_map! { "inputMode" => "angle", "angle" => 30 });
        assert_eq!(out.value_of("Percent Grade"), Some("57.74%"));
        assert_eq!(out.value_of("Angle"), Some("30.00°"));
        assert_eq!(out.value_of("Classification"), Some("Very Steep"));
    }

    #[test]
    fn test_steep_lawn_from_form_warns() {
        let descriptor = descriptor();
        let inputs = descriptor.parse_form([("inputMode", "percent"), ("percent", "40"), ("application", "lawn")]);
        let out = compute(&inputs);
        assert_eq!(out.value_of("Percent Grade"), Some("40%"));
        assert!(out.has_kind(RecommendationKind::Warning));
    }

    #[test]
    fn test_one_in_twelve_ramp_is_compliant() {
        let out = compute(&input_map! { "rise" => 1, "run" => 12, "application" => "ada-ramp" });
        assert!(!out.has_kind(RecommendationKind::Warning));
        assert!(out.has_kind(RecommendationKind::Tip));
        assert!(out.recommendations.iter().any(|r| r.text.contains("Within the ADA ramp limit")));
    }

    #[test]
    fn test_ada_advisory() {
        let out = compute(&input_map! { "rise" => 1, "run" => 10, "application" => "ada-ramp" });
        assert!(out.recommendations.iter().any(|r| r.text.contains("8.33%")));
    }
}
