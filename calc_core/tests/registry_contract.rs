//! Every registered calculator must render something for any input.

use calc_core::inputs::{FieldChoice, InputMap, InputValue};
use calc_core::registry::{self, CalculatorKind};
use calc_core::results::RecommendationKind;
use calc_core::{input_map, Catalog, FieldType};

#[test]
fn empty_input_yields_results_and_recommendations() {
    for kind in CalculatorKind::ALL {
        let out = registry::compute(kind.id(), &InputMap::new());
        assert!(!out.results.is_empty(), "{kind} returned no results");
        assert!(!out.recommendations.is_empty(), "{kind} returned no recommendations");
        assert!(out.highlighted().count() >= 1, "{kind} highlighted nothing");
    }
}

#[test]
fn default_inputs_yield_highlighted_results() {
    for descriptor in &Catalog::builtin().calculators {
        let out = registry::compute(&descriptor.id, &descriptor.default_inputs());
        assert!(out.highlighted().count() >= 1, "{} highlighted nothing", descriptor.id);
        assert!(
            !out.has_kind(RecommendationKind::Error),
            "{} reported an error for its own defaults",
            descriptor.id
        );
    }
}

#[test]
fn garbage_input_degrades_to_defaults() {
    let junk: InputMap = Catalog::builtin()
        .calculators
        .iter()
        .flat_map(|d| d.fields.iter().map(|f| (f.id.clone(), InputValue::Text("??".to_string()))))
        .collect();
    for kind in CalculatorKind::ALL {
        let with_junk = registry::compute(kind.id(), &junk);
        assert!(!with_junk.results.is_empty(), "{kind} returned no results for junk");
    }
}

#[test]
fn unknown_id_echoes_every_input() {
    let inputs = input_map! {
        "alpha" => 1,
        "beta" => "two",
        "gamma" => false,
        "delta" => 0.25,
    };
    let out = registry::compute("pergola-stain", &inputs);
    assert_eq!(out.results.len(), inputs.len());
    for (key, value) in &inputs {
        assert_eq!(out.value_of(key), Some(value.to_string().as_str()));
    }
    assert!(out.has_kind(RecommendationKind::Info));
}

#[test]
fn catalog_select_options_round_trip() {
    use calc_core::calculators::asphalt::{Climate, SubgradeType, TrafficLoad};

    let descriptor = Catalog::builtin().require("asphalt-thickness").unwrap();
    let traffic = descriptor.field("trafficLoad").unwrap();
    assert_eq!(traffic.field_type, FieldType::Radio);
    for option in &traffic.options {
        let parsed = TrafficLoad::from_key(&option.value).unwrap();
        assert_eq!(parsed.key(), option.value);
        assert_eq!(parsed.label(), option.label);
    }
    assert_eq!(descriptor.field("subgradeType").unwrap().options.len(), SubgradeType::ALL.len());
    assert_eq!(descriptor.field("climate").unwrap().options.len(), Climate::ALL.len());
}

#[test]
fn every_select_default_is_an_option() {
    for descriptor in &Catalog::builtin().calculators {
        for field in &descriptor.fields {
            if matches!(field.field_type, FieldType::Select | FieldType::Radio) {
                let default = field.default_value.to_string();
                assert!(
                    field.options.iter().any(|o| o.value == default),
                    "{}.{} default {default} is not an option",
                    descriptor.id,
                    field.id
                );
            }
        }
    }
}

#[test]
fn related_calculators_resolve() {
    let catalog = Catalog::builtin();
    for descriptor in &catalog.calculators {
        assert_eq!(catalog.related(&descriptor.id).len(), descriptor.related_calculators.len());
        for related in &descriptor.related_calculators {
            assert!(CalculatorKind::from_id(related).is_some(), "{related} is not registered");
        }
    }
}
