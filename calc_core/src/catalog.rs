//! # Calculator Catalog
//!
//! The list of calculator descriptors the site renders its index and forms
//! from, with a small header recording where it came from.
//!
//! ## Structure
//!
//! ```text
//! Catalog
//! ├── meta: CatalogMetadata (schema version, source, generated timestamp)
//! └── calculators: Vec<CalculatorDescriptor> (catalog order)
//! ```
//!
//! The builtin catalog is assembled once from the registry. A catalog read
//! from a file (see [`crate::file_io`]) can reorder or reword entries, but
//! compute dispatch always goes through the registry by id.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::catalog::Catalog;
//! use calc_core::fields::Category;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 12);
//! assert_eq!(catalog.by_category(Category::Asphalt).len(), 2);
//! assert!(catalog.validate().is_ok());
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::fields::{CalculatorDescriptor, Category, FieldType};
use crate::inputs::InputValue;
use crate::registry::CalculatorKind;

/// Current schema version for catalog files
pub const CATALOG_SCHEMA_VERSION: &str = "1.0.0";

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::from_registry);

/// Catalog header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Schema version (for compatibility checks on load)
    pub version: String,

    /// Where the catalog came from (e.g., "builtin" or a file path)
    pub source: String,

    /// When the catalog was assembled
    pub generated: DateTime<Utc>,
}

/// Ordered set of calculator descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub meta: CatalogMetadata,
    pub calculators: Vec<CalculatorDescriptor>,
}

impl Catalog {
    pub fn new(source: impl Into<String>, calculators: Vec<CalculatorDescriptor>) -> Self {
        Catalog {
            meta: CatalogMetadata {
                version: CATALOG_SCHEMA_VERSION.to_string(),
                source: source.into(),
                generated: Utc::now(),
            },
            calculators,
        }
    }

    /// Descriptors of every registered calculator, in registry order
    pub fn from_registry() -> Self {
        Catalog::new("builtin", CalculatorKind::ALL.iter().map(|kind| kind.descriptor()).collect())
    }

    /// Process-wide builtin catalog, built on first use
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CalculatorDescriptor> {
        self.calculators.iter().find(|c| c.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error
    pub fn require(&self, id: &str) -> CalcResult<&CalculatorDescriptor> {
        self.get(id).ok_or_else(|| CalcError::unknown_calculator(id))
    }

    pub fn by_category(&self, category: Category) -> Vec<&CalculatorDescriptor> {
        self.calculators.iter().filter(|c| c.category == category).collect()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.calculators.iter().map(|c| c.id.as_str()).collect()
    }

    /// Related calculators of `id` that exist in this catalog
    pub fn related(&self, id: &str) -> Vec<&CalculatorDescriptor> {
        match self.get(id) {
            Some(descriptor) => descriptor
                .related_calculators
                .iter()
                .filter_map(|related| self.get(related))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check catalog consistency.
    ///
    /// Rejects duplicate ids, related ids that point nowhere, duplicate field
    /// ids within a calculator, and select/radio defaults that are not one of
    /// their options.
    pub fn validate(&self) -> CalcResult<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(source = %self.meta.source, error = %err, "catalog failed validation");
        }
        result
    }

    fn check(&self) -> CalcResult<()> {
        let mut seen = HashSet::new();
        for descriptor in &self.calculators {
            if !seen.insert(descriptor.id.as_str()) {
                return Err(CalcError::duplicate_calculator(&descriptor.id));
            }
        }

        for descriptor in &self.calculators {
            for related in &descriptor.related_calculators {
                if !seen.contains(related.as_str()) {
                    return Err(CalcError::invalid_input(
                        format!("{}.relatedCalculators", descriptor.id),
                        related,
                        "no calculator with this id in the catalog",
                    ));
                }
            }

            let mut field_ids = HashSet::new();
            for field in &descriptor.fields {
                if !field_ids.insert(field.id.as_str()) {
                    return Err(CalcError::invalid_input(
                        format!("{}.fields", descriptor.id),
                        &field.id,
                        "field id appears more than once",
                    ));
                }
                if matches!(field.field_type, FieldType::Select | FieldType::Radio) {
                    let default = match &field.default_value {
                        InputValue::Text(text) => text.as_str(),
                        _ => "",
                    };
                    if !field.options.iter().any(|o| o.value == default) {
                        return Err(CalcError::invalid_input(
                            format!("{}.{}", descriptor.id, field.id),
                            field.default_value.to_string(),
                            "default is not one of the options",
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::from_registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldDescriptor;

    fn descriptor(id: &str, related: &[&str]) -> CalculatorDescriptor {
        CalculatorDescriptor {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: Category::Specialty,
            time_estimate: "1 min".to_string(),
            fields: vec![FieldDescriptor::number("length", "Length", 1.0)],
            formula: None,
            related_calculators: related.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.meta.version, CATALOG_SCHEMA_VERSION);
        assert_eq!(catalog.ids().len(), CalculatorKind::ALL.len());
    }

    #[test]
    fn test_require_unknown() {
        let err = Catalog::builtin().require("gazebo").unwrap_err();
        assert_eq!(err, CalcError::unknown_calculator("gazebo"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let catalog = Catalog::new("test", vec![descriptor("a", &[]), descriptor("a", &[])]);
        assert_eq!(catalog.validate().unwrap_err().error_code(), "DUPLICATE_CALCULATOR");
    }

    #[test]
    fn test_dangling_related_rejected() {
        let catalog = Catalog::new("test", vec![descriptor("a", &["b"])]);
        assert_eq!(catalog.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_related_skips_missing() {
        let catalog = Catalog::new("test", vec![descriptor("a", &["b", "c"]), descriptor("b", &[])]);
        let related: Vec<&str> = catalog.related("a").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(related, vec!["b"]);
        assert!(catalog.related("zzz").is_empty());
    }

    #[test]
    fn test_by_category_covers_all() {
        let catalog = Catalog::builtin();
        let total: usize = Category::ALL.iter().map(|c| catalog.by_category(*c).len()).sum();
        assert_eq!(total, catalog.len());
    }
}
