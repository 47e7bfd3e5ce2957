//! Google Gemini REST client.
//!
//! [`GeminiClient`] posts to `v1beta/models/<model>:generateContent`, waits on
//! a client-side rate limiter before every attempt and retries transient
//! failures with an error-specific exponential backoff.
//!
//! # Example
//!
//! ```no_run
//! use memory_lane_core::{GenerateRequest, Input, Message, Role};
//! use memory_lane_interface::GenerativeDriver;
//! use memory_lane_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::new(Role::User, vec![Input::Text("Hello".into())])])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

use super::config::GeminiConfig;
use super::conversion::{from_gemini_response, to_gemini_request};
use super::dto::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use memory_lane_core::{GenerateRequest, GenerateResponse};
use memory_lane_error::{MemoryLaneResult, ServiceError, ServiceErrorKind};
use memory_lane_interface::GenerativeDriver;
use serde::Deserialize;
use std::env;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.name)
            .field("base_url", &self.config.base_url)
            .field("rpm", &self.config.rpm)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    /// Create a client with default settings and the key from `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> MemoryLaneResult<Self> {
        Self::from_config(GeminiConfig::default())
    }

    /// Create a client from configuration, reading the key from `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_from_config", skip(config), fields(model = %config.name))]
    pub fn from_config(config: GeminiConfig) -> MemoryLaneResult<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ServiceError::new(ServiceErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, config: GeminiConfig) -> MemoryLaneResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::new(ServiceErrorKind::ClientCreation(e.to_string())))?;

        let limiter = config
            .rpm
            .and_then(NonZeroU32::new)
            .map(|rpm| Arc::new(RateLimiter::direct(Quota::per_minute(rpm))));

        debug!(model = %config.name, rpm = ?config.rpm, "Created Gemini client");

        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
            limiter,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// One rate-limited POST, classified into a [`ServiceError`] on failure.
    async fn send_once(
        &self,
        url: &str,
        body: &GeminiRequest,
    ) -> Result<GeminiResponse, ServiceError> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::new(ServiceErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            return Err(ServiceError::new(ServiceErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ServiceError::new(ServiceErrorKind::Transport(e.to_string())))
    }

    /// POST with error-specific retry.
    async fn send_with_retry(
        &self,
        url: &str,
        body: &GeminiRequest,
    ) -> Result<GeminiResponse, ServiceError> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        let first = self.send_once(url, body).await;
        let err = match first {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if self.config.no_retry || !err.kind.is_retryable() {
            warn!(error = %err, "Gemini request failed, not retrying");
            return Err(err);
        }

        let (mut initial_ms, mut max_retries, max_delay_secs) = err.kind.retry_strategy_params();
        if let Some(backoff) = self.config.retry_backoff_ms {
            initial_ms = backoff;
        }
        if let Some(retries) = self.config.max_retries {
            max_retries = retries;
        }
        if max_retries == 0 {
            return Err(err);
        }

        info!(
            error = %err,
            initial_backoff_ms = initial_ms,
            max_retries,
            max_delay_secs,
            "Gemini request failed, will retry with configured strategy"
        );

        let strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries.saturating_sub(1));

        // Retry::spawn makes its own first attempt, which counts as the first retry.
        Retry::spawn(strategy, || async move {
            match self.send_once(url, body).await {
                Ok(response) => Ok(response),
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "Gemini request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent Gemini error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}

#[async_trait]
impl GenerativeDriver for GeminiClient {
    #[instrument(
        name = "gemini_generate",
        skip(self, req),
        fields(
            model = req.model().as_deref().unwrap_or(&self.config.name),
            messages = req.messages().len(),
            structured = req.response_schema().is_some(),
        )
    )]
    async fn generate(&self, req: &GenerateRequest) -> MemoryLaneResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.config.name);
        let body = to_gemini_request(req, self.config.temperature, self.config.max_tokens);
        let url = self.endpoint(model);

        let response = self.send_with_retry(&url, &body).await?;
        from_gemini_response(&response, req.response_schema().is_some())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.name
    }
}
