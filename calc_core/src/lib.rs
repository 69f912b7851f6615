//! # calc_core - Paving & Earthwork Estimating Engine
//!
//! `calc_core` is the computational heart of Groundwork's calculator site:
//! a registry of estimating calculators (asphalt, concrete, cost, earthwork,
//! measurement, specialty) plus the field metadata the web forms are built
//! from. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from an input map to formatted results
//! - **Never fails**: Missing or bad inputs fall back to zero or a default
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **One source of truth**: Select options and formula branches come from the same enums
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{input_map, registry};
//!
//! let results = registry::compute("asphalt-tonnage", &input_map! {
//!     "length" => 100,
//!     "width" => 20,
//!     "thickness" => 2,
//! });
//! assert_eq!(results.value_of("Asphalt Required"), Some("24.17 tons"));
//!
//! // Serialize to JSON for the web client
//! let json = serde_json::to_string_pretty(&results).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - Calculator id → compute function dispatch
//! - [`calculators`] - All estimating formulas
//! - [`catalog`] - Calculator descriptors for the site index and forms
//! - [`fields`] - Form field metadata
//! - [`inputs`] - Input map and parse-or-default accessors
//! - [`results`] - Result rows and recommendations
//! - [`units`] - Type-safe unit wrappers
//! - [`format`] - Display formatting for result values
//! - [`cache`] - Load-on-demand catalog cache
//! - [`errors`] - Structured error types
//! - [`file_io`] - Catalog files with atomic saves

pub mod cache;
pub mod calculators;
pub mod catalog;
pub mod errors;
pub mod fields;
pub mod file_io;
pub mod format;
pub mod inputs;
pub mod registry;
pub mod results;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, CatalogMetadata, CATALOG_SCHEMA_VERSION};
pub use errors::{CalcError, CalcResult};
pub use fields::{CalculatorDescriptor, Category, FieldDescriptor, FieldType};
pub use file_io::{load_catalog, save_catalog};
pub use inputs::{FieldChoice, InputMap, InputValue};
pub use registry::{compute, resolve, CalculatorKind, ComputeFn};
pub use results::{CalculatorResults, Recommendation, RecommendationKind, ResultEntry};
