//! Concrete calculators: slab volume and segmental retaining walls.

pub mod retaining_wall;
pub mod volume;

pub use retaining_wall::{BlockType, RetainingWallEstimate, RetainingWallInput};
pub use volume::{ConcreteVolumeEstimate, ConcreteVolumeInput};
