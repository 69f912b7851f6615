//! Specialty calculators: parking lot layout, project timeline, roofing.

pub mod parking_lot;
pub mod roofing;
pub mod timeline;

pub use parking_lot::{ParkingLotEstimate, ParkingLotInput, ParkingType};
pub use roofing::{RoofingEstimate, RoofingInput, RoofingType};
pub use timeline::{
    Complexity, EquipmentLevel, PhaseDuration, ProjectType, Season, TimelineEstimate, TimelineInput,
};
