use async_trait::async_trait;
use peptide_proxy::{Error, Result, inference::InferenceClient};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock inference client for testing
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub response: Option<Value>,
    pub error: Option<String>,
    pub sequences: Arc<Mutex<Vec<Value>>>,
}

impl MockInferenceClient {
    pub fn returning(response: Value) -> Self {
        Self {
            response: Some(response),
            error: None,
            sequences: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            response: None,
            error: Some(error.to_string()),
            sequences: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_sequences(&self) -> Vec<Value> {
        self.sequences.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn predict(&self, sequence: &Value) -> Result<Value> {
        self.sequences.lock().unwrap().push(sequence.clone());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        self.response
            .clone()
            .ok_or_else(|| Error::inference("No mock response configured"))
    }
}
