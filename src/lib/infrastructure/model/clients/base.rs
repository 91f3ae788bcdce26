//! Base HTTP client with shared logic

use crate::infrastructure::model::types::ModelError;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub endpoint: String,
    api_key: String,
    pub http: Client,
}

impl HttpClientBase {
    /// Build the client; fails when the key is blank or reqwest cannot initialise.
    pub fn new(id: String, endpoint: String, api_key: Option<String>) -> Result<Self, ModelError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ModelError::missing_api_key(&id))?;
        let http = Client::builder()
            .build()
            .map_err(|e| ModelError::client_build(&id, e))?;

        Ok(Self {
            id,
            endpoint,
            api_key,
            http,
        })
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with the key in the `x-goog-api-key` header
    pub async fn post_with_key_header<Req, Res>(
        &self,
        url: &str,
        body: &Req,
    ) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::from_reqwest(&self.id, e))?;

        let response = self.check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ModelError::from_reqwest(&self.id, e))
    }

    async fn check_status(&self, response: Response) -> Result<Response, ModelError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!(
                    provider = self.id.as_str(),
                    error = %err.without_url(),
                    "Failed to read error body"
                );
                String::new()
            }
        };
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        warn!(provider = self.id.as_str(), %status, "Provider returned an error status");
        Err(ModelError::api(&self.id, status, message))
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
