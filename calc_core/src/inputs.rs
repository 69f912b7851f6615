//! # Calculator Inputs
//!
//! The flat field-id → value map the form layer hands to a calculator, and
//! the parse-or-default accessors every calculator reads it through.
//!
//! ## Coercion Policy
//!
//! Calculators never fail on bad input. Each accessor substitutes a default
//! instead:
//!
//! | value                                   | `number`  | `number_or(k, f)` |
//! |-----------------------------------------|-----------|-------------------|
//! | absent                                  | `0`       | `f`               |
//! | `0`, `""`, `false`, `"abc"`, NaN, ±inf  | `0`       | `f`               |
//! | `true`                                  | `1`       | `1`               |
//! | `"12.5"` / `12.5`                       | `12.5`    | `12.5`            |
//!
//! Zero deliberately collapses to the fallback: a density of `0` means
//! "not entered", not "weightless".
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input_map;
//!
//! let inputs = input_map! {
//!     "length" => 100.0,
//!     "density" => "",
//!     "trafficLoad" => "heavy",
//! };
//! assert_eq!(inputs.number("length"), 100.0);
//! assert_eq!(inputs.number_or("density", 145.0), 145.0);
//! assert_eq!(inputs.text("trafficLoad"), Some("heavy"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One user-entered value.
///
/// Deserializes from plain JSON scalars (`true`, `12.5`, `"heavy"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl InputValue {
    /// Numeric reading of the value, `None` when it is not a finite number.
    ///
    /// Empty text reads as zero and booleans as `1`/`0`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            InputValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            InputValue::Number(n) => n.is_finite().then_some(*n),
            InputValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Boolean reading of the value, `None` when text is not a recognized flag word.
    pub fn to_flag(&self) -> Option<bool> {
        match self {
            InputValue::Bool(b) => Some(*b),
            InputValue::Number(n) => Some(*n != 0.0 && !n.is_nan()),
            InputValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" | "" => Some(false),
                _ => None,
            },
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Bool(b) => write!(f, "{}", b),
            InputValue::Number(n) => write!(f, "{}", n),
            InputValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<i32> for InputValue {
    fn from(n: i32) -> Self {
        InputValue::Number(f64::from(n))
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Bool(b)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

/// A closed set of options a select or radio field offers.
///
/// The same enum drives both the form options in the catalog and the
/// formula's `match`, so an option can't exist in one place only.
pub trait FieldChoice: Copy + Sized + 'static {
    /// Every option in display order
    const ALL: &'static [Self];

    /// Value submitted by the form (e.g., "heavy")
    fn key(self) -> &'static str;

    /// Label shown to the user (e.g., "Heavy (trucks, buses)")
    fn label(self) -> &'static str;

    /// Look up an option by its form value, ignoring case and outer whitespace
    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.iter().copied().find(|c| c.key().eq_ignore_ascii_case(key))
    }
}

/// Field id → value, as assembled by the form layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputMap(BTreeMap<String, InputValue>);

impl InputMap {
    pub fn new() -> Self {
        InputMap(BTreeMap::new())
    }

    /// Set a field value, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<InputValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`InputMap::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&InputValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &InputValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric field, `0` when absent or not a usable number
    pub fn number(&self, key: &str) -> f64 {
        self.number_or(key, 0.0)
    }

    /// Numeric field, `fallback` when absent, zero, or not a usable number
    pub fn number_or(&self, key: &str, fallback: f64) -> f64 {
        match self.get(key).and_then(InputValue::to_number) {
            Some(n) if n != 0.0 => n,
            _ => fallback,
        }
    }

    /// Text field, `None` when absent or not text
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(InputValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Select/radio field, `default` when absent or not one of the options
    pub fn choice_or<T: FieldChoice>(&self, key: &str, default: T) -> T {
        self.text(key).and_then(T::from_key).unwrap_or(default)
    }

    /// Checkbox field, `default` when absent or unrecognized
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(InputValue::to_flag).unwrap_or(default)
    }
}

impl<K: Into<String>, V: Into<InputValue>> FromIterator<(K, V)> for InputMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        InputMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a InputMap {
    type Item = (&'a String, &'a InputValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, InputValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build an [`InputMap`] from `"key" => value` pairs of mixed types.
#[macro_export]
macro_rules! input_map {
    () => { $crate::inputs::InputMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::inputs::InputMap::new();
        $( map.insert($key, $value); )+
        map
    }};
}

/// Declare a [`FieldChoice`] enum from `Variant => ("key", "Label")` rows.
///
/// ```rust
/// use calc_core::field_choice;
/// use calc_core::inputs::FieldChoice;
///
/// field_choice! {
///     /// Surface finish
///     pub enum Finish {
///         Broom => ("broom", "Broom finish"),
///         Trowel => ("trowel", "Smooth trowel"),
///     }
/// }
///
/// assert_eq!(Finish::from_key("TROWEL"), Some(Finish::Trowel));
/// assert_eq!(Finish::Broom.label(), "Broom finish");
/// ```
#[macro_export]
macro_rules! field_choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::inputs::FieldChoice for $name {
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => $key ),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Size {
        Small,
        Large,
    }

    impl FieldChoice for Size {
        const ALL: &'static [Self] = &[Size::Small, Size::Large];

        fn key(self) -> &'static str {
            match self {
                Size::Small => "small",
                Size::Large => "large",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Size::Small => "Small",
                Size::Large => "Large",
            }
        }
    }

    #[test]
    fn test_number_coercion() {
        let inputs = input_map! {
            "a" => 12.5,
            "b" => " 7 ",
            "c" => "abc",
            "d" => "",
            "e" => true,
            "f" => false,
            "g" => f64::NAN,
        };
        assert_eq!(inputs.number("a"), 12.5);
        assert_eq!(inputs.number("b"), 7.0);
        assert_eq!(inputs.number("c"), 0.0);
        assert_eq!(inputs.number("d"), 0.0);
        assert_eq!(inputs.number("e"), 1.0);
        assert_eq!(inputs.number("f"), 0.0);
        assert_eq!(inputs.number("g"), 0.0);
        assert_eq!(inputs.number("missing"), 0.0);
    }

    #[test]
    fn test_zero_collapses_to_fallback() {
        let inputs = input_map! { "density" => 0.0, "cost" => "0" };
        assert_eq!(inputs.number_or("density", 145.0), 145.0);
        assert_eq!(inputs.number_or("cost", 100.0), 100.0);
        assert_eq!(inputs.number_or("absent", 100.0), 100.0);
    }

    #[test]
    fn test_negative_numbers_pass_through() {
        let inputs = input_map! { "x" => -3.0 };
        assert_eq!(inputs.number_or("x", 10.0), -3.0);
    }

    #[test]
    fn test_choice() {
        let inputs = input_map! { "size" => "LARGE", "other" => "huge", "num" => 3.0 };
        assert_eq!(inputs.choice_or("size", Size::Small), Size::Large);
        assert_eq!(inputs.choice_or("other", Size::Small), Size::Small);
        assert_eq!(inputs.choice_or("num", Size::Small), Size::Small);
        assert_eq!(inputs.choice_or("missing", Size::Large), Size::Large);
    }

    #[test]
    fn test_flags() {
        let inputs = input_map! {
            "a" => true,
            "b" => "no",
            "c" => 1.0,
            "d" => "maybe",
        };
        assert!(inputs.flag_or("a", false));
        assert!(!inputs.flag_or("b", true));
        assert!(inputs.flag_or("c", false));
        assert!(inputs.flag_or("d", true));
        assert!(!inputs.flag_or("missing", false));
    }

    #[test]
    fn test_display_matches_form_echo() {
        assert_eq!(InputValue::from(5.0).to_string(), "5");
        assert_eq!(InputValue::from(2.5).to_string(), "2.5");
        assert_eq!(InputValue::from(true).to_string(), "true");
        assert_eq!(InputValue::from("gravel").to_string(), "gravel");
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"length": 100, "soilType": "clay", "applySwell": true}"#;
        let inputs: InputMap = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.get("length"), Some(&InputValue::Number(100.0)));
        assert_eq!(inputs.text("soilType"), Some("clay"));
        assert!(inputs.flag_or("applySwell", false));
    }
}
