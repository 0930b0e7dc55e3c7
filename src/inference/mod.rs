mod client;
mod types;

pub use client::{HttpInferenceClient, InferenceClient};
pub use types::{
    ExternalResult, Prediction, is_truthy, normalize, parse_float, parse_float_str,
};
