//! Transport seams for the chat and company data endpoints
//!
//! Traits keep the engines testable with doubles; the production
//! implementations use a long-lived reqwest::Client for connection pooling.

use crate::config::CompanionConfig;
use crate::error::CompanionError;
use crate::models::{CompanyDetails, Sender, Ticker};
use crate::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

//
// ================= Wire Types =================
//

/// One prior turn carried in the chat request payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryTurn {
    pub sender: Sender,
    pub message: String,
}

/// Request body for the chat endpoint: the new message plus the turns that
/// existed before it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<HistoryTurn>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

/// Extract the reply text from a candidate-shaped response. Any missing
/// layer, or empty text, is a malformed response.
pub fn extract_reply(response: ChatResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(CompanionError::InvalidResponse)?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CompanionError::InvalidResponse);
    }

    Ok(trimmed.to_string())
}

//
// ================= Traits =================
//

#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one turn plus prior history; resolve to the assistant reply text.
    async fn send(&self, message: &str, history: &[HistoryTurn]) -> Result<String>;
}

#[async_trait::async_trait]
pub trait DataTransport: Send + Sync {
    async fn fetch_details(&self, ticker: Ticker) -> Result<CompanyDetails>;
    async fn fetch_artifact(&self, ticker: Ticker) -> Result<Vec<u8>>;
}

//
// ================= HTTP Implementations =================
//

/// Production chat transport (connection-pooled).
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpChatTransport {
    pub fn new(config: &CompanionConfig) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.chat_endpoint.clone(),
            api_key: config.chat_api_key.clone(),
        }
    }

    fn url(&self) -> String {
        if self.api_key.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}?key={}", self.endpoint, self.api_key)
        }
    }
}

#[async_trait::async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str, history: &[HistoryTurn]) -> Result<String> {
        let request = ChatRequest {
            message: message.to_string(),
            history: history.to_vec(),
        };

        info!(history_len = history.len(), "Calling chat endpoint");

        let response = self
            .client
            .post(self.url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Chat request failed: {}", e);
                CompanionError::ChatTransport(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Chat endpoint returned {}: {}", status, error_text);
            return Err(CompanionError::ChatTransport(format!(
                "status {}",
                status.as_u16()
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!("Failed to parse chat response: {}", e);
            CompanionError::InvalidResponse
        })?;

        extract_reply(parsed)
    }
}

/// Production company data transport. Both endpoints live under a common
/// base and are keyed by ticker symbol in the path.
pub struct HttpDataTransport {
    client: Client,
    base_url: String,
}

impl HttpDataTransport {
    pub fn new(config: &CompanionConfig) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.data_base_url.clone(),
        }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Company data request failed for {}: {}", path, e);
            CompanionError::DataTransport(format!("request failed for {}: {}", path, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Company data endpoint returned {} for {}", status, path);
            return Err(CompanionError::DataTransport(format!(
                "status {} for {}",
                status.as_u16(),
                path
            )));
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl DataTransport for HttpDataTransport {
    async fn fetch_details(&self, ticker: Ticker) -> Result<CompanyDetails> {
        let path = format!("/api/v1/company/{}", ticker.as_str());
        let response = self.get(&path).await?;

        response.json::<CompanyDetails>().await.map_err(|e| {
            error!("Failed to parse company details: {}", e);
            CompanionError::DataTransport(format!("invalid details payload: {}", e))
        })
    }

    async fn fetch_artifact(&self, ticker: Ticker) -> Result<Vec<u8>> {
        let path = format!("/api/v1/company/{}/logo", ticker.as_str());
        let response = self.get(&path).await?;

        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read logo bytes: {}", e);
            CompanionError::DataTransport(format!("logo download failed: {}", e))
        })?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            message: "What is AAPL's price?".to_string(),
            history: vec![],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "What is AAPL's price?",
                "history": [],
            })
        );
    }

    #[test]
    fn test_request_serialization_with_history() {
        let request = ChatRequest {
            message: "And its P/E?".to_string(),
            history: vec![
                HistoryTurn {
                    sender: Sender::User,
                    message: "What is AAPL's price?".to_string(),
                },
                HistoryTurn {
                    sender: Sender::Assistant,
                    message: "120.50".to_string(),
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["history"][0]["sender"], "user");
        assert_eq!(json["history"][1]["sender"], "assistant");
        assert_eq!(json["history"][1]["message"], "120.50");
    }

    #[test]
    fn test_extract_reply_valid() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"120.50"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_reply(response).unwrap(), "120.50");
    }

    #[test]
    fn test_extract_reply_trims_whitespace() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  hello \n"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_reply(response).unwrap(), "hello");
    }

    #[test]
    fn test_extract_reply_missing_candidates() {
        let response: ChatResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(CompanionError::InvalidResponse)
        ));
    }

    #[test]
    fn test_extract_reply_missing_parts() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(CompanionError::InvalidResponse)
        ));
    }

    #[test]
    fn test_extract_reply_empty_text() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(CompanionError::InvalidResponse)
        ));
    }
}
