//! Cost calculators: installed paving cost and material waste allowances.

pub mod paving;
pub mod waste;

pub use paving::{PavingCostEstimate, PavingCostInput, PavingType};
pub use waste::{CutComplexity, MaterialWasteEstimate, MaterialWasteInput, ProjectSize, WasteMaterial, WorkerExperience};
