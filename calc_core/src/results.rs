//! # Calculator Results
//!
//! The single output shape every calculator produces: labeled result rows
//! plus typed advisories. Values are pre-formatted strings so the web client
//! renders them verbatim.
//!
//! ```json
//! {
//!   "results": [
//!     { "label": "Asphalt Required", "value": "24.17 tons", "description": "...", "highlight": true }
//!   ],
//!   "recommendations": [
//!     { "text": "Use a Standard Hot Mix ...", "type": "info" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One line of calculator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub label: String,
    pub value: String,
    pub description: String,
    /// Marks the primary answer(s) to surface prominently
    pub highlight: bool,
}

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Info,
    Tip,
    Warning,
    Error,
}

/// Advisory text tied to the computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
}

/// Output of every compute function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResults {
    pub results: Vec<ResultEntry>,
    pub recommendations: Vec<Recommendation>,
}

impl CalculatorResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a secondary result row
    pub fn entry(&mut self, label: impl Into<String>, value: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.push_row(label.into(), value.into(), description.into(), false)
    }

    /// Append a highlighted (primary) result row
    pub fn primary(&mut self, label: impl Into<String>, value: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.push_row(label.into(), value.into(), description.into(), true)
    }

    pub fn recommend(&mut self, kind: RecommendationKind, text: impl Into<String>) -> &mut Self {
        self.recommendations.push(Recommendation {
            text: text.into(),
            kind,
        });
        self
    }

    pub fn info(&mut self, text: impl Into<String>) -> &mut Self {
        self.recommend(RecommendationKind::Info, text)
    }

    pub fn tip(&mut self, text: impl Into<String>) -> &mut Self {
        self.recommend(RecommendationKind::Tip, text)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> &mut Self {
        self.recommend(RecommendationKind::Warning, text)
    }

    /// First row with the given label
    pub fn find(&self, label: &str) -> Option<&ResultEntry> {
        self.results.iter().find(|r| r.label == label)
    }

    /// Value string of the first row with the given label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.find(label).map(|r| r.value.as_str())
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &ResultEntry> {
        self.results.iter().filter(|r| r.highlight)
    }

    pub fn has_kind(&self, kind: RecommendationKind) -> bool {
        self.recommendations.iter().any(|r| r.kind == kind)
    }

    fn push_row(&mut self, label: String, value: String, description: String, highlight: bool) -> &mut Self {
        self.results.push(ResultEntry {
            label,
            value,
            description,
            highlight,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut out = CalculatorResults::new();
        out.primary("Total", "$10.00", "Everything")
            .entry("Part", "$4.00", "")
            .warning("Check it")
            .tip("Order extra");

        assert_eq!(out.results.len(), 2);
        assert_eq!(out.highlighted().count(), 1);
        assert_eq!(out.value_of("Part"), Some("$4.00"));
        assert!(out.has_kind(RecommendationKind::Warning));
        assert!(!out.has_kind(RecommendationKind::Error));
    }

    #[test]
    fn test_recommendation_json_uses_type_key() {
        let rec = Recommendation {
            text: "Heads up".to_string(),
            kind: RecommendationKind::Warning,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"text":"Heads up","type":"warning"}"#);
    }
}
