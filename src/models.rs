//! Wire types exchanged with the 1RM calculation service.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Request body: `{"weight": <number>, "reps": <number>}`.
///
/// Both fields hold whatever the number inputs currently read, including NaN
/// for an empty field. The service is the authority on what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubmitData {
    pub weight: f64,
    #[serde(serialize_with = "serialize_count")]
    pub reps: f64,
}

/// Whole repetition counts go out as JSON integers.
fn serialize_count<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

/// One row of the percentage table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageWeight {
    pub percentage: f64,
    pub weight: f64,
}

/// Body of a 2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessData {
    pub one_rep_max: f64,
    pub weights: Vec<PercentageWeight>,
}

/// Element of an error's `loc` path: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocItem {
    Index(i64),
    Field(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub ctx: Map<String, Value>,
}

/// `detail` is a list for validation errors and a bare string for other
/// HTTP errors raised by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Items(Vec<ErrorDetail>),
    Message(String),
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorData {
    pub detail: Detail,
}

impl ErrorData {
    /// The message shown to the user: the first detail entry's `msg`.
    pub fn first_message(&self) -> Option<&str> {
        match &self.detail {
            Detail::Items(items) => items.first().map(|d| d.msg.as_str()),
            Detail::Message(msg) => Some(msg.as_str()),
        }
    }
}
