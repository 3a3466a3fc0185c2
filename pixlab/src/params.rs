//! Operation parameters
//!
//! An [`Operation`] is what the UI hands over: an id plus a loosely typed
//! parameter map. [`ParamDefaults`] holds the value used for each
//! parameter the operation does not supply as a number.
//!
//! Both types deserialize from the JSON the playground produces:
//!
//! ```
//! use pixlab::Operation;
//!
//! let op: Operation =
//!     serde_json::from_str(r#"{"id": "contrast", "parameters": {"factor": 2.0}}"#).unwrap();
//! assert_eq!(op.number("factor"), Some(2.0));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameter names understood by the dispatcher.
pub mod keys {
    /// Contrast stretch factor
    pub const FACTOR: &str = "factor";
    /// Border width for the padding operations
    pub const PADDING_SIZE: &str = "paddingSize";
    /// Packed `0xRRGGBB` fill color for custom padding
    pub const CUSTOM_VALUE: &str = "customValue";
    /// Binarization cutoff
    pub const THRESHOLD: &str = "threshold";
    /// Gaussian blur radius for noise removal
    pub const RADIUS: &str = "radius";
}

/// A single parameter value.
///
/// Untagged, so plain JSON numbers, strings and booleans map directly.
/// Anything else (`null`, arrays, objects) is kept as [`ParamValue::Other`]
/// and reads as non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

impl ParamValue {
    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Number(v as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

/// An operation request: which transform to run and with what parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Operation id, e.g. `"contrast"` or `"wrap-padding"`
    pub id: String,
    /// Parameters by name; missing or non-numeric entries use defaults
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
}

impl Operation {
    /// Create an operation with no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Operation {
            id: id.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Builder-style parameter setter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// The parameter `name` if it is present and numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).and_then(ParamValue::as_number)
    }
}

/// Values used for parameters an operation does not supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamDefaults {
    /// Contrast stretch factor
    pub factor: f64,
    /// Border width for the padding operations
    pub padding_size: u32,
    /// Packed `0xRRGGBB` fill color for custom padding
    pub custom_value: u32,
    /// Binarization cutoff
    pub threshold: f64,
    /// Gaussian blur radius for noise removal
    pub radius: u32,
}

impl Default for ParamDefaults {
    fn default() -> Self {
        ParamDefaults {
            factor: 1.5,
            padding_size: 10,
            custom_value: 0x80_80_80,
            threshold: 128.0,
            radius: 1,
        }
    }
}
