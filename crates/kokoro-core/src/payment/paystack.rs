use crate::payment::config::PaymentConfig;
use crate::payment::error::PaymentError;
use crate::payment::{InitializeRequest, PaymentGateway, PaymentMetadata};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use tracing::instrument;
use url::Url;

const INITIALIZE_FAILED: &str = "Payment initialization failed";

#[derive(Debug, Deserialize)]
struct GatewayResponse<T> {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    status: String,
    #[serde(default)]
    metadata: Value,
}

/// Client for a Paystack compatible transaction api.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    client: reqwest::Client,
    config: PaymentConfig,
}

impl PaystackClient {
    #[must_use]
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PaymentConfig {
        &self.config
    }

    fn secret_key(&self) -> Result<&str, PaymentError> {
        self.config.secret_key.as_deref().ok_or(PaymentError::NotConfigured)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, PaymentError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PaymentError::InvalidUrl)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // The gateway answers with a json envelope on errors too, so the body is read
    // regardless of the status code.
    async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<GatewayResponse<T>, PaymentError> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "payment gateway response");
        serde_json::from_str(&body)
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %status, "unreadable gateway response"))
            .map_err(Into::into)
    }
}

#[async_trait]
impl PaymentGateway for PaystackClient {
    #[instrument(skip_all, fields(amount = request.amount, currency = %request.currency))]
    async fn initialize(&self, request: &InitializeRequest) -> Result<Value, PaymentError> {
        let response = self
            .client
            .post(self.endpoint(&["transaction", "initialize"])?)
            .bearer_auth(self.secret_key()?)
            .json(request)
            .send()
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "payment initialization failed"))?;

        let response: GatewayResponse<Value> = Self::read_response(response).await?;
        if !response.status {
            let message = response.message.unwrap_or_else(|| INITIALIZE_FAILED.to_owned());
            tracing::warn!(%message, "gateway rejected payment");
            return Err(PaymentError::Rejected(message));
        }
        Ok(response.data.unwrap_or(Value::Null))
    }

    #[instrument(skip(self))]
    async fn verify(&self, reference: &str) -> Result<PaymentMetadata, PaymentError> {
        let response = self
            .client
            .get(self.endpoint(&["transaction", "verify", reference])?)
            .bearer_auth(self.secret_key()?)
            .send()
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "payment verification failed"))?;

        let response: GatewayResponse<VerifyData> = Self::read_response(response).await?;
        let data = match response.data {
            Some(data) if response.status && data.status == "success" => data,
            data => {
                tracing::info!(status = ?data.map(|data| data.status), "payment not successful");
                return Err(PaymentError::VerificationFailed);
            }
        };

        // Some integrations send the metadata as a serialized json string.
        let metadata = match data.metadata {
            Value::String(text) => serde_json::from_str(&text)?,
            value => serde_json::from_value(value)?,
        };
        Ok(metadata)
    }
}
