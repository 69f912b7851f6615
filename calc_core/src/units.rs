//! # Unit Types
//!
//! Type-safe wrappers for the quantities estimators work in. They are plain
//! `f64` newtypes so JSON stays clean (just numbers) while formulas can't mix
//! up inches and feet or cubic feet and cubic yards.
//!
//! ## US Customary Units (Primary)
//!
//! - Length: feet (ft), inches (in)
//! - Area: square feet (sq ft)
//! - Volume: cubic feet (cu ft), cubic yards (cu yd)
//! - Weight: pounds (lb), short tons (2000 lb)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{CubicFeet, CubicYards, Feet, Inches, SqFt};
//!
//! let area = SqFt::rectangle(Feet(10.0), Feet(27.0));
//! let volume = CubicFeet::slab(area, Inches(12.0));
//! let yards: CubicYards = volume.into();
//! assert!((yards.0 - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Cubic feet in one cubic yard
pub const CUBIC_FEET_PER_YARD: f64 = 27.0;

/// Cubic feet in one cubic meter
pub const CUBIC_FEET_PER_METER: f64 = 35.3147;

/// Pounds in one short ton
pub const POUNDS_PER_TON: f64 = 2000.0;

/// Pounds in one metric tonne
pub const POUNDS_PER_TONNE: f64 = 2204.62;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl SqFt {
    /// Plan area of a rectangle
    pub fn rectangle(length: Feet, width: Feet) -> Self {
        SqFt(length.0 * width.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

impl CubicFeet {
    /// Volume of a flat layer: plan area times a thickness given in inches
    pub fn slab(area: SqFt, depth: Inches) -> Self {
        let depth_ft: Feet = depth.into();
        CubicFeet(area.0 * depth_ft.0)
    }

    /// Volume of a box measured entirely in feet
    pub fn block(length: Feet, width: Feet, depth: Feet) -> Self {
        CubicFeet(length.0 * width.0 * depth.0)
    }
}

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / CUBIC_FEET_PER_YARD)
    }
}

impl From<CubicYards> for CubicFeet {
    fn from(cy: CubicYards) -> Self {
        CubicFeet(cy.0 * CUBIC_FEET_PER_YARD)
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in short tons (2000 lb)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tons(pub f64);

impl Tons {
    /// Weight of a volume of material with the given density in lb/ft³
    pub fn from_volume(volume: CubicFeet, density_pcf: f64) -> Self {
        Pounds(volume.0 * density_pcf).into()
    }

    /// Volume occupied by this weight of material with density in lb/ft³
    pub fn to_volume(self, density_pcf: f64) -> CubicFeet {
        if density_pcf <= 0.0 {
            return CubicFeet(0.0);
        }
        let lb: Pounds = self.into();
        CubicFeet(lb.0 / density_pcf)
    }
}

impl From<Pounds> for Tons {
    fn from(lb: Pounds) -> Self {
        Tons(lb.0 / POUNDS_PER_TON)
    }
}

impl From<Tons> for Pounds {
    fn from(t: Tons) -> Self {
        Pounds(t.0 * POUNDS_PER_TON)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqFt);
impl_arithmetic!(CubicFeet);
impl_arithmetic!(CubicYards);
impl_arithmetic!(Pounds);
impl_arithmetic!(Tons);
