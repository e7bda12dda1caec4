//! AI search-query suggestions for the product detail page.
//!
//! Asks the Anthropic Messages API for four search queries related to a
//! product title. The widget this feeds is decorative, so the public surface
//! never fails: with no API key configured, or on any request, parse or API
//! error, callers get a canned list instead.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::RecommendationConfig;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 256;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Served when the API is disabled or anything goes wrong.
const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Bohemian Style Sandals",
    "Wide Brim Sun Hat",
    "Lightweight Summer Cardigan",
    "Beaded Ankle Bracelet",
];

/// Errors that can occur when requesting suggestions.
///
/// These never reach a handler; [`RecommendationClient::suggestions_for`]
/// absorbs them into the fallback list.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error.
    #[error("API error ({error_type}): {message}")]
    Api {
        /// Error type from the API.
        error_type: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The response could not be read as a list of suggestions.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the Anthropic Messages API, specialized to one job.
#[derive(Clone)]
pub struct RecommendationClient {
    inner: Arc<RecommendationClientInner>,
}

struct RecommendationClientInner {
    /// `None` when no API key is configured; every call then serves the
    /// fallback list.
    client: Option<reqwest::Client>,
    model: String,
}

impl RecommendationClient {
    /// Build the client from configuration.
    #[must_use]
    pub fn new(config: &RecommendationConfig) -> Self {
        let client = config.api_key.as_ref().and_then(build_http_client);
        if client.is_none() {
            tracing::info!("recommendations running without an API key; serving canned suggestions");
        }
        Self {
            inner: Arc::new(RecommendationClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Search queries related to a product title, always exactly usable:
    /// either fresh from the model or the canned fallback.
    #[instrument(skip(self), fields(model = %self.inner.model))]
    pub async fn suggestions_for(&self, product_title: &str) -> Vec<String> {
        let Some(client) = &self.inner.client else {
            return fallback();
        };

        match self.request_suggestions(client, product_title).await {
            Ok(suggestions) => suggestions,
            Err(error) => {
                tracing::warn!(%error, product_title, "recommendation request failed; serving canned suggestions");
                fallback()
            }
        }
    }

    async fn request_suggestions(
        &self,
        client: &reqwest::Client,
        product_title: &str,
    ) -> Result<Vec<String>, RecommendationError> {
        let prompt = format!(
            "Given the product title '{product_title}', generate a JSON array of 4 unique \
             and creative search queries for similar or complementary products on an \
             e-commerce site. The output must be a valid JSON array of strings with no \
             other text."
        );

        let request = MessagesRequest {
            model: &self.inner.model,
            max_tokens: MAX_TOKENS,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = client.post(ANTHROPIC_API_URL).json(&request).send().await?;
        let response = handle_response(response).await?;
        parse_suggestions(&response)
    }
}

fn build_http_client(api_key: &SecretString) -> Option<reqwest::Client> {
    let Ok(key_value) = HeaderValue::from_str(api_key.expose_secret()) else {
        tracing::warn!("API key contains characters invalid in a header; recommendations disabled");
        return None;
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("x-api-key", key_value);
    headers.insert(
        "anthropic-version",
        HeaderValue::from_static(ANTHROPIC_VERSION),
    );

    match reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(client) => Some(client),
        Err(error) => {
            tracing::warn!(%error, "failed to build recommendation HTTP client; recommendations disabled");
            None
        }
    }
}

/// Handle a response, mapping error statuses to [`RecommendationError`].
async fn handle_response(
    response: reqwest::Response,
) -> Result<MessagesResponse, RecommendationError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| RecommendationError::Parse(format!("failed to parse response: {e}")))
    } else {
        Err(handle_error_status(status, response).await)
    }
}

async fn handle_error_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> RecommendationError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return RecommendationError::RateLimited(retry_after);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return RecommendationError::Unauthorized("invalid API key".to_owned());
    }

    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                RecommendationError::Api {
                    error_type: api_error.error.error_type,
                    message: api_error.error.message,
                }
            } else {
                RecommendationError::Api {
                    error_type: "unknown".to_owned(),
                    message: body,
                }
            }
        }
        Err(e) => RecommendationError::Http(e),
    }
}

/// Pull the suggestion list out of the first text block.
///
/// An empty list parses but renders a blank widget, so it is treated as a
/// parse failure.
fn parse_suggestions(response: &MessagesResponse) -> Result<Vec<String>, RecommendationError> {
    let text = response
        .content
        .iter()
        .find_map(|block| match block {
            ResponseContent::Text { text } => Some(text.as_str()),
            ResponseContent::Other => None,
        })
        .ok_or_else(|| RecommendationError::Parse("response carried no text block".to_owned()))?;

    let suggestions: Vec<String> = serde_json::from_str(text.trim()).map_err(|e| {
        RecommendationError::Parse(format!("response is not a JSON string array: {e}"))
    })?;

    if suggestions.is_empty() {
        return Err(RecommendationError::Parse(
            "response array is empty".to_owned(),
        ));
    }

    Ok(suggestions)
}

fn fallback() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|&s| s.to_owned()).collect()
}

/// Request body for the Messages API.
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: String,
}

/// Response body, reduced to the part this client reads.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseContent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ResponseContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// API error envelope.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
}
