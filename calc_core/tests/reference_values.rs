//! Worked examples checked against hand calculations.

use calc_core::calculators::cost::waste::{self, MaterialWasteInput};
use calc_core::calculators::measurement::slope::{self, SlopeInput};
use calc_core::input_map;
use calc_core::registry::compute;

#[test]
fn asphalt_tonnage_driveway() {
    let out = compute(
        "asphalt-tonnage",
        &input_map! {
            "length" => 100,
            "width" => 20,
            "thickness" => 2,
            "density" => 145,
            "costPerTon" => 100,
        },
    );
    assert_eq!(out.value_of("Volume"), Some("333.33 cu ft"));
    assert_eq!(out.value_of("Asphalt Required"), Some("24.17 tons"));
    // 24.1667 tons × $100, rounded once at display
    assert_eq!(out.value_of("Estimated Material Cost"), Some("$2,416.67"));
}

#[test]
fn asphalt_tonnage_defaults_density_and_price() {
    let explicit = compute(
        "asphalt-tonnage",
        &input_map! { "length" => 50, "width" => 12, "thickness" => 3, "density" => 145, "costPerTon" => 100 },
    );
    let defaulted = compute(
        "asphalt-tonnage",
        &input_map! { "length" => 50, "width" => 12, "thickness" => 3, "density" => "", "costPerTon" => 0 },
    );
    assert_eq!(explicit, defaulted);
}

#[test]
fn concrete_slab_with_waste() {
    let out = compute(
        "concrete-volume",
        &input_map! { "length" => 10, "width" => 10, "depth" => 4, "wasteFactor" => 5 },
    );
    assert_eq!(out.value_of("Volume (Cubic Feet)"), Some("33.33 cu ft"));
    assert_eq!(out.value_of("Volume (Cubic Yards)"), Some("1.23 cu yd"));
    assert_eq!(out.value_of("Total Concrete Needed"), Some("1.30 cu yd"));
    assert_eq!(out.value_of("Estimated Cost"), Some("$155.56"));
}

#[test]
fn asphalt_thickness_heavy_poor_cold() {
    let out = compute(
        "asphalt-thickness",
        &input_map! { "trafficLoad" => "heavy", "subgradeType" => "poor", "climate" => "cold" },
    );
    assert_eq!(out.value_of("Recommended Asphalt Thickness"), Some("5.00 in"));
    assert_eq!(out.value_of("Subbase"), Some("6.00 in"));
}

#[test]
fn slope_percent_mode_reproduces_rise() {
    let first = slope::calculate(&SlopeInput::from_inputs(&input_map! { "rise" => 1, "run" => 12 }));
    assert!((first.percent - 8.33).abs() < 0.01);
    assert!((first.angle_deg - 4.76).abs() < 0.01);

    let back = slope::calculate(&SlopeInput::from_inputs(&input_map! {
        "inputMode" => "percent",
        "percent" => first.percent,
        "horizontalDistance" => first.run,
    }));
    assert!((back.rise - 1.0).abs() < 1e-9);

    let via_angle = slope::calculate(&SlopeInput::from_inputs(&input_map! {
        "inputMode" => "angle",
        "angle" => first.angle_deg,
        "horizontalDistance" => first.run,
    }));
    assert!((via_angle.rise - 1.0).abs() < 1e-9);
    assert_eq!(via_angle.ratio, "1:12");
}

#[test]
fn slope_output_strings() {
    let out = compute("slope-grade", &input_map! { "rise" => 1, "run" => 12 });
    assert_eq!(out.value_of("Percent Grade"), Some("8.33%"));
    assert_eq!(out.value_of("Angle"), Some("4.76°"));
    assert_eq!(out.value_of("Ratio (Rise:Run)"), Some("1:12"));
}

#[test]
fn material_waste_worst_case_gravel() {
    let inputs = input_map! {
        "materialType" => "gravel",
        "quantity" => 100,
        "projectType" => "small",
        "cutComplexity" => "complex",
        "workerExperience" => "novice",
    };
    let estimate = waste::calculate(&MaterialWasteInput::from_inputs(&inputs));
    assert_eq!(estimate.waste_pct, 24.0);
    assert!((estimate.waste_amount - 24.0).abs() < 1e-9);
    assert!((estimate.total_needed - 124.0).abs() < 1e-9);

    let out = compute("material-waste", &inputs);
    assert_eq!(out.value_of("Waste Factor"), Some("24%"));
    assert_eq!(out.value_of("Total to Order"), Some("124.00 units"));
}

#[test]
fn excavation_clay_hauling() {
    let out = compute(
        "excavation",
        &input_map! { "length" => 27, "width" => 10, "depth" => 2, "soilType" => "clay" },
    );
    assert_eq!(out.value_of("Bank Volume"), Some("20.00 cu yd"));
    assert_eq!(out.value_of("Loose Volume"), Some("26.00 cu yd"));
    assert_eq!(out.value_of("Truck Loads"), Some("3 loads"));
    assert_eq!(out.value_of("Hauling Cost"), Some("$450.00"));
}

#[test]
fn parking_lot_spaces_and_ada() {
    let out = compute("parking-lot", &input_map! { "lotLength" => 300, "lotWidth" => 200 });
    // 60,000 × 0.7 / 350 = 120 spaces -> 5 accessible, 1 van
    assert_eq!(out.value_of("Parking Spaces"), Some("120 spaces"));
    assert_eq!(out.value_of("Accessible Spaces"), Some("5 spaces"));
    assert_eq!(out.value_of("Van-Accessible Spaces"), Some("1 spaces"));
}

#[test]
fn roofing_shingle_bundles() {
    let out = compute(
        "roofing-material",
        &input_map! { "roofLength" => 40, "roofWidth" => 30, "pitch" => 6, "hasValleys" => true },
    );
    // 1500 sq ft × 1.12 = 16.8 squares × 3 = 50.4 -> 51 bundles
    assert_eq!(out.value_of("Material Needed"), Some("51 bundles"));
    assert_eq!(out.value_of("Underlayment"), Some("5 rolls"));
}

#[test]
fn timeline_phases() {
    let out = compute(
        "project-timeline",
        &input_map! { "projectType" => "paving", "projectSize" => 10000, "crewSize" => 4 },
    );
    assert_eq!(out.value_of("Working Days"), Some("6 days"));
    assert_eq!(out.value_of("Calendar Days"), Some("8 days"));
    assert_eq!(out.value_of("Main Work"), Some("4 days"));
    assert_eq!(out.value_of("Finishing"), Some("1 day"));
}

#[test]
fn conversion_concrete_yards_to_tons() {
    // 2 cu yd × 27 × 150 / 2000 = 4.05 tons
    let out = compute(
        "material-conversion",
        &input_map! { "material" => "concrete", "value" => 2, "fromUnit" => "cubic-yards", "toUnit" => "tons" },
    );
    assert_eq!(out.value_of("Converted Value"), Some("4.05 tons"));
}
