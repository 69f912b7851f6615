//! # Field Metadata
//!
//! Descriptors the web client renders calculator forms from. They are purely
//! descriptive: `required`, `min`, `max` and `step` are hints for the form
//! layer, never enforced here.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "id": "thickness",
//!   "label": "Thickness",
//!   "type": "number",
//!   "defaultValue": 2,
//!   "required": true,
//!   "unit": "in",
//!   "min": 0.5,
//!   "step": 0.25,
//!   "helperText": "Compacted mat thickness"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::inputs::{FieldChoice, InputMap, InputValue};

/// Kind of form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Select,
    Radio,
    Checkbox,
}

/// One entry of a select or radio field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Describes one calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub default_value: InputValue,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

impl FieldDescriptor {
    /// Required numeric field with a default and a lower bound of zero
    pub fn number(id: &str, label: &str, default: f64) -> Self {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            field_type: FieldType::Number,
            default_value: InputValue::Number(default),
            required: true,
            unit: None,
            min: Some(0.0),
            max: None,
            step: None,
            options: Vec::new(),
            helper_text: None,
        }
    }

    /// Dropdown whose options come from a [`FieldChoice`] enum
    pub fn select<T: FieldChoice>(id: &str, label: &str, default: T) -> Self {
        Self::choice(id, label, FieldType::Select, default)
    }

    /// Radio group whose options come from a [`FieldChoice`] enum
    pub fn radio<T: FieldChoice>(id: &str, label: &str, default: T) -> Self {
        Self::choice(id, label, FieldType::Radio, default)
    }

    /// Dropdown with fixed `(value, label)` options that no formula matches on
    pub fn text_select(id: &str, label: &str, options: &[(&str, &str)], default: &str) -> Self {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            field_type: FieldType::Select,
            default_value: InputValue::Text(default.to_string()),
            required: false,
            unit: None,
            min: None,
            max: None,
            step: None,
            options: options
                .iter()
                .map(|(value, label)| SelectOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
            helper_text: None,
        }
    }

    pub fn checkbox(id: &str, label: &str, default: bool) -> Self {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            field_type: FieldType::Checkbox,
            default_value: InputValue::Bool(default),
            required: false,
            unit: None,
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
            helper_text: None,
        }
    }

    fn choice<T: FieldChoice>(id: &str, label: &str, field_type: FieldType, default: T) -> Self {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            default_value: InputValue::Text(default.key().to_string()),
            required: true,
            unit: None,
            min: None,
            max: None,
            step: None,
            options: T::ALL
                .iter()
                .map(|c| SelectOption {
                    value: c.key().to_string(),
                    label: c.label().to_string(),
                })
                .collect(),
            helper_text: None,
        }
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Replace the lower bound (`None` allows negatives)
    pub fn min(mut self, min: Option<f64>) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.helper_text = Some(text.to_string());
        self
    }

    /// Interpret raw form text for this field.
    ///
    /// Numbers parse to [`InputValue::Number`] (unparsable text is kept as
    /// text, which calculators then read as zero), checkboxes to
    /// [`InputValue::Bool`], and select/radio values stay text.
    pub fn parse_value(&self, raw: &str) -> InputValue {
        match self.field_type {
            FieldType::Number => match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => InputValue::Number(n),
                _ => InputValue::Text(raw.to_string()),
            },
            FieldType::Checkbox => {
                let fallback = matches!(self.default_value, InputValue::Bool(true));
                InputValue::Bool(InputValue::Text(raw.to_string()).to_flag().unwrap_or(fallback))
            }
            FieldType::Select | FieldType::Radio => InputValue::Text(raw.trim().to_string()),
        }
    }
}

/// Interpret raw text for a field nobody described: number, then flag, then text.
pub fn parse_loose(raw: &str) -> InputValue {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => InputValue::Number(n),
        _ => match trimmed {
            "true" => InputValue::Bool(true),
            "false" => InputValue::Bool(false),
            _ => InputValue::Text(raw.to_string()),
        },
    }
}

/// Calculator family, used for grouping on the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Asphalt,
    Concrete,
    Cost,
    Earthwork,
    Measurement,
    Specialty,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Asphalt,
        Category::Concrete,
        Category::Cost,
        Category::Earthwork,
        Category::Measurement,
        Category::Specialty,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Asphalt => "asphalt",
            Category::Concrete => "concrete",
            Category::Cost => "cost",
            Category::Earthwork => "earthwork",
            Category::Measurement => "measurement",
            Category::Specialty => "specialty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Asphalt => "Asphalt",
            Category::Concrete => "Concrete",
            Category::Cost => "Cost Estimation",
            Category::Earthwork => "Earthwork",
            Category::Measurement => "Measurement & Conversion",
            Category::Specialty => "Specialty",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the site knows about one calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Human estimate of how long filling the form takes (e.g., "2 min")
    pub time_estimate: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_calculators: Vec<String>,
}

impl CalculatorDescriptor {
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Every field at its default value
    pub fn default_inputs(&self) -> InputMap {
        self.fields
            .iter()
            .map(|f| (f.id.clone(), f.default_value.clone()))
            .collect()
    }

    /// Build calculator inputs from raw form text, defaults filling the gaps.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::catalog::Catalog;
    /// use calc_core::inputs::InputValue;
    ///
    /// let descriptor = Catalog::builtin().require("concrete-volume").unwrap();
    /// let inputs = descriptor.parse_form([("length", "12"), ("width", "10")]);
    /// assert_eq!(inputs.get("length"), Some(&InputValue::Number(12.0)));
    /// assert!(inputs.contains_key("wasteFactor"));
    /// ```
    pub fn parse_form<I, K, V>(&self, pairs: I) -> InputMap
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut inputs = self.default_inputs();
        for (key, raw) in pairs {
            let key = key.as_ref();
            let value = match self.field(key) {
                Some(field) => field.parse_value(raw.as_ref()),
                None => parse_loose(raw.as_ref()),
            };
            inputs.insert(key, value);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Mix {
        Fine,
        Coarse,
    }

    impl FieldChoice for Mix {
        const ALL: &'static [Self] = &[Mix::Fine, Mix::Coarse];

        fn key(self) -> &'static str {
            match self {
                Mix::Fine => "fine",
                Mix::Coarse => "coarse",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Mix::Fine => "Fine",
                Mix::Coarse => "Coarse",
            }
        }
    }

    #[test]
    fn test_select_options_follow_enum() {
        let field = FieldDescriptor::select("mix", "Mix", Mix::Coarse);
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.options[0].value, "fine");
        assert_eq!(field.default_value, InputValue::Text("coarse".to_string()));
    }

    #[test]
    fn test_parse_value() {
        let number = FieldDescriptor::number("length", "Length", 10.0);
        assert_eq!(number.parse_value(" 12.5 "), InputValue::Number(12.5));
        assert_eq!(number.parse_value("abc"), InputValue::Text("abc".to_string()));

        let flag = FieldDescriptor::checkbox("edging", "Edging", true);
        assert_eq!(flag.parse_value("off"), InputValue::Bool(false));
        assert_eq!(flag.parse_value("??"), InputValue::Bool(true));

        let select = FieldDescriptor::select("mix", "Mix", Mix::Fine);
        assert_eq!(select.parse_value(" coarse "), InputValue::Text("coarse".to_string()));
    }

    #[test]
    fn test_parse_loose() {
        assert_eq!(parse_loose("3"), InputValue::Number(3.0));
        assert_eq!(parse_loose("true"), InputValue::Bool(true));
        assert_eq!(parse_loose("clay"), InputValue::Text("clay".to_string()));
    }

    #[test]
    fn test_field_json_shape() {
        let field = FieldDescriptor::number("thickness", "Thickness", 2.0)
            .unit("in")
            .step(0.25)
            .help("Compacted mat thickness");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["defaultValue"], 2.0);
        assert_eq!(json["helperText"], "Compacted mat thickness");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_category_keys() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("bogus"), None);
    }
}
