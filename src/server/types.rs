use crate::{Error, Result, inference::{Prediction, is_truthy}};
use serde::Serialize;
use serde_json::Value;

pub const STATUS_MESSAGE: &str = "Proxy server running";

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    /// Normally a string; any other truthy JSON value is forwarded untouched.
    pub sequence: Value,
}

impl PredictionRequest {
    /// Reads `sequence` from a raw JSON body. Absent or falsy values become `""`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;

        let sequence = match value {
            Value::Null => {
                return Err(Error::invalid_request("cannot read `sequence` from a null body"));
            }
            Value::Object(mut map) => map.remove("sequence").filter(is_truthy),
            _ => None,
        };

        Ok(Self {
            sequence: sequence.unwrap_or_else(|| Value::String(String::new())),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub sequence: Value,
    pub predictions: Vec<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    pub fn success(sequence: Value, predictions: Vec<Prediction>) -> Self {
        Self {
            sequence,
            predictions,
            error: None,
        }
    }

    pub fn failure(error: &Error) -> Self {
        Self {
            sequence: Value::String(String::new()),
            predictions: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}
