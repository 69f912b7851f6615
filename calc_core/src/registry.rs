//! # Calculator Registry
//!
//! Maps a calculator id to its compute function. Lookup is exact; an id
//! nobody registered resolves to [`echo_inputs`] instead of an error, so a
//! stale link still renders something.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input_map;
//! use calc_core::registry;
//!
//! let results = registry::compute("concrete-volume", &input_map! {
//!     "length" => 10,
//!     "width" => 10,
//!     "depth" => 4,
//! });
//! assert!(results.highlighted().count() > 0);
//!
//! let echoed = registry::compute("no-such-calculator", &input_map! { "length" => 10 });
//! assert_eq!(echoed.value_of("length"), Some("10"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculators::{asphalt, concrete, cost, earthwork, measurement, specialty};
use crate::fields::CalculatorDescriptor;
use crate::inputs::InputMap;
use crate::results::CalculatorResults;

/// Signature every calculator exposes to the registry.
pub type ComputeFn = fn(&InputMap) -> CalculatorResults;

/// Every calculator the engine ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    AsphaltTonnage,
    AsphaltThickness,
    ConcreteVolume,
    RetainingWall,
    PavingCost,
    MaterialWaste,
    Excavation,
    MaterialConversion,
    SlopeGrade,
    ParkingLot,
    ProjectTimeline,
    RoofingMaterial,
}

impl CalculatorKind {
    /// Catalog order
    pub const ALL: [CalculatorKind; 12] = [
        CalculatorKind::AsphaltTonnage,
        CalculatorKind::AsphaltThickness,
        CalculatorKind::ConcreteVolume,
        CalculatorKind::RetainingWall,
        CalculatorKind::PavingCost,
        CalculatorKind::MaterialWaste,
        CalculatorKind::Excavation,
        CalculatorKind::MaterialConversion,
        CalculatorKind::SlopeGrade,
        CalculatorKind::ParkingLot,
        CalculatorKind::ProjectTimeline,
        CalculatorKind::RoofingMaterial,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CalculatorKind::AsphaltTonnage => asphalt::tonnage::ID,
            CalculatorKind::AsphaltThickness => asphalt::thickness::ID,
            CalculatorKind::ConcreteVolume => concrete::volume::ID,
            CalculatorKind::RetainingWall => concrete::retaining_wall::ID,
            CalculatorKind::PavingCost => cost::paving::ID,
            CalculatorKind::MaterialWaste => cost::waste::ID,
            CalculatorKind::Excavation => earthwork::excavation::ID,
            CalculatorKind::MaterialConversion => measurement::conversion::ID,
            CalculatorKind::SlopeGrade => measurement::slope::ID,
            CalculatorKind::ParkingLot => specialty::parking_lot::ID,
            CalculatorKind::ProjectTimeline => specialty::timeline::ID,
            CalculatorKind::RoofingMaterial => specialty::roofing::ID,
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn compute_fn(self) -> ComputeFn {
        match self {
            CalculatorKind::AsphaltTonnage => asphalt::tonnage::compute,
            CalculatorKind::AsphaltThickness => asphalt::thickness::compute,
            CalculatorKind::ConcreteVolume => concrete::volume::compute,
            CalculatorKind::RetainingWall => concrete::retaining_wall::compute,
            CalculatorKind::PavingCost => cost::paving::compute,
            CalculatorKind::MaterialWaste => cost::waste::compute,
            CalculatorKind::Excavation => earthwork::excavation::compute,
            CalculatorKind::MaterialConversion => measurement::conversion::compute,
            CalculatorKind::SlopeGrade => measurement::slope::compute,
            CalculatorKind::ParkingLot => specialty::parking_lot::compute,
            CalculatorKind::ProjectTimeline => specialty::timeline::compute,
            CalculatorKind::RoofingMaterial => specialty::roofing::compute,
        }
    }

    pub fn descriptor(self) -> CalculatorDescriptor {
        match self {
            CalculatorKind::AsphaltTonnage => asphalt::tonnage::descriptor(),
            CalculatorKind::AsphaltThickness => asphalt::thickness::descriptor(),
            CalculatorKind::ConcreteVolume => concrete::volume::descriptor(),
            CalculatorKind::RetainingWall => concrete::retaining_wall::descriptor(),
            CalculatorKind::PavingCost => cost::paving::descriptor(),
            CalculatorKind::MaterialWaste => cost::waste::descriptor(),
            CalculatorKind::Excavation => earthwork::excavation::descriptor(),
            CalculatorKind::MaterialConversion => measurement::conversion::descriptor(),
            CalculatorKind::SlopeGrade => measurement::slope::descriptor(),
            CalculatorKind::ParkingLot => specialty::parking_lot::descriptor(),
            CalculatorKind::ProjectTimeline => specialty::timeline::descriptor(),
            CalculatorKind::RoofingMaterial => specialty::roofing::descriptor(),
        }
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Compute function for `id`, or [`echo_inputs`] when no calculator has that id.
pub fn resolve(id: &str) -> ComputeFn {
    match CalculatorKind::from_id(id) {
        Some(kind) => kind.compute_fn(),
        None => {
            debug!(calculator = id, "unknown calculator id, echoing inputs");
            echo_inputs
        }
    }
}

/// Resolve `id` and run it.
pub fn compute(id: &str, inputs: &InputMap) -> CalculatorResults {
    resolve(id)(inputs)
}

/// Fallback for unknown ids: one row per input, in key order.
pub fn echo_inputs(inputs: &InputMap) -> CalculatorResults {
    let mut out = CalculatorResults::new();
    for (key, value) in inputs {
        out.entry(key.as_str(), value.to_string(), "");
    }
    out.info("This calculator is not available yet; your inputs are shown as entered.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_map;
    use crate::results::RecommendationKind;

    #[test]
    fn test_ids_round_trip() {
        for kind in CalculatorKind::ALL {
            assert_eq!(CalculatorKind::from_id(kind.id()), Some(kind));
            assert_eq!(kind.descriptor().id, kind.id());
        }
    }

    #[test]
    fn test_serde_name_matches_id() {
        for kind in CalculatorKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.id());
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(CalculatorKind::from_id("Asphalt-Tonnage"), None);
        assert_eq!(CalculatorKind::from_id(" asphalt-tonnage"), None);
    }

    #[test]
    fn test_unknown_id_echoes() {
        let out = compute("deck-stain", &input_map! { "width" => 2.5, "coats" => "two", "sealed" => true });
        assert_eq!(out.results.len(), 3);
        assert_eq!(out.value_of("width"), Some("2.5"));
        assert_eq!(out.value_of("coats"), Some("two"));
        assert_eq!(out.value_of("sealed"), Some("true"));
        assert!(out.has_kind(RecommendationKind::Info));
    }

    #[test]
    fn test_resolve_known() {
        let direct = asphalt::tonnage::compute(&input_map! { "length" => 100, "width" => 20 });
        let routed = compute("asphalt-tonnage", &input_map! { "length" => 100, "width" => 20 });
        assert_eq!(direct, routed);
    }
}
