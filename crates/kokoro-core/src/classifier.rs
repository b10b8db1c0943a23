use crate::classifier::config::ClassifierConfig;
use crate::classifier::error::ClassifierError;
use async_trait::async_trait;
use kokoro_model::mood::Mood;
use serde::Deserialize;
use serde_json::json;
use std::error::Error;
use tracing::instrument;

pub mod buckets;
pub mod config;
pub mod error;

/// One fine grained emotion label with its confidence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f64,
}

#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Raw per label distribution for `text`.
    async fn distribution(&self, text: &str) -> Result<Vec<LabelScore>, ClassifierError>;

    /// Distribution summed into the five mood buckets, in [`Mood`] order.
    async fn bucket_scores(&self, text: &str) -> Result<[f64; Mood::COUNT], ClassifierError> {
        let distribution = self.distribution(text).await?;
        Ok(buckets::sum_into_buckets(&distribution))
    }
}

// Hosted inference endpoints wrap the result in one batch per input.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifierResponse {
    Flat(Vec<LabelScore>),
    Batched(Vec<Vec<LabelScore>>),
}

impl From<ClassifierResponse> for Vec<LabelScore> {
    fn from(response: ClassifierResponse) -> Self {
        match response {
            ClassifierResponse::Flat(scores) => scores,
            ClassifierResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
        }
    }
}

/// Client for a Hugging Face style text classification endpoint.
#[derive(Debug, Clone)]
pub struct HuggingFaceClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl HuggingFaceClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl EmotionClassifier for HuggingFaceClassifier {
    #[instrument(skip_all, fields(url = %self.config.url))]
    async fn distribution(&self, text: &str) -> Result<Vec<LabelScore>, ClassifierError> {
        let mut request = self.client.post(self.config.url.clone()).json(&json!({ "inputs": text }));
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::warn!(error = error as &dyn Error, "classifier request failed"))?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, "classifier answered with an error status");
            return Err(ClassifierError::Status { status, body });
        }

        let response: ClassifierResponse = serde_json::from_str(&body)?;
        let distribution: Vec<LabelScore> = response.into();
        tracing::debug!(labels = distribution.len(), "received classifier distribution");
        Ok(distribution)
    }
}
