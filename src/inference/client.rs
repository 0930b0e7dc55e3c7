use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends one sequence upstream and returns the undecoded JSON answer.
    /// The sequence is forwarded as received, normally a string.
    async fn predict(&self, sequence: &Value) -> Result<Value>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInferenceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build inference HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn predict(&self, sequence: &Value) -> Result<Value> {
        debug!("Forwarding sequence to {}", self.endpoint);

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "sequence": sequence }))
            .send()
            .await?;

        debug!("Inference endpoint answered with status {}", response.status());

        // The body is decoded whatever the status; error pages that are not JSON fail here.
        let bytes = response.bytes().await?;
        let result: Value = serde_json::from_slice(&bytes)?;

        Ok(result)
    }
}
