//! Remote classification client.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. Every failure is
//! mapped to a typed [`RemoteError`] so the engine has exactly one fallback
//! handler instead of scattered error-string inspection.

use crate::config::RemoteConfig;
use crate::error::RemoteError;
use crate::models::{Category, ClassificationResult, Priority, Task};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use tokio::time::timeout;

const CATEGORIZE_SYSTEM_PROMPT: &str = "Categorize the following task into 'work', \
    'personal', or 'errands' and assign priority ('low', 'medium', 'high'). \
    Respond with a JSON object: {\"category\": ..., \"priority\": ...}";

const INSIGHT_SYSTEM_PROMPT: &str =
    "You are a productivity assistant analyzing tasks and providing insights.";

/// Abstracts the remote classification service.
///
/// Allows the engine to run against the real HTTP client or a test double.
#[async_trait]
pub trait ClassificationBackend: Send + Sync + 'static {
    /// Requests a category/priority guess for raw task text.
    ///
    /// The second element carries a [`RemoteError::MalformedResponse`] when the
    /// result was completed with per-field defaults, so the engine can report
    /// the kind on its observer side channel without failing the call.
    async fn classify(
        &self,
        text: &str,
    ) -> Result<(ClassificationResult, Option<RemoteError>), RemoteError>;

    /// Requests a free-text productivity insight for a task collection.
    async fn insight(&self, tasks: &[Task]) -> Result<String, RemoteError>;
}

/// HTTP client for the remote classification service.
pub struct RemoteClassifier {
    config: RemoteConfig,
    client: Client,
}

impl RemoteClassifier {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn build_request(&self, payload: &serde_json::Value) -> Result<reqwest::RequestBuilder, RemoteError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", self.config.api_key)
            .parse()
            .map_err(|_| RemoteError::AuthInvalid)?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(self
            .client
            .post(format!("{}/chat/completions", self.config.api_url))
            .headers(headers)
            .json(payload))
    }

    /// Sends one bounded completion request and returns the message content.
    async fn completion(&self, system_prompt: &str, user_content: &str) -> Result<String, RemoteError> {
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_content }
            ]
        });

        let request_future = self.build_request(&payload)?.send();

        let res = timeout(self.config.timeout, request_future)
            .await
            .map_err(|_| RemoteError::Timeout(self.config.timeout.as_secs()))?
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteError::Timeout(self.config.timeout.as_secs())
                } else {
                    RemoteError::Generic(e.to_string())
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => RemoteError::QuotaExceeded,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::AuthInvalid,
                _ => RemoteError::Generic(format!(
                    "completion request failed with status {}: {}",
                    status, body
                )),
            });
        }

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

        Ok(json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string())
    }
}

/// Parses the model's JSON verdict into a classification result.
///
/// A missing or unrecognized field is substituted individually with the
/// `personal`/`medium` default; a valid sibling field is kept. The second
/// element reports whether any substitution happened.
fn parse_verdict(content: &str) -> (ClassificationResult, bool) {
    let fields: serde_json::Value =
        serde_json::from_str(content).unwrap_or(serde_json::Value::Null);

    let category = fields["category"].as_str().and_then(Category::parse);
    let priority = fields["priority"].as_str().and_then(Priority::parse);
    let degraded = category.is_none() || priority.is_none();

    (
        ClassificationResult {
            category: category.unwrap_or(Category::Personal),
            priority: priority.unwrap_or(Priority::Medium),
        },
        degraded,
    )
}

#[async_trait]
impl ClassificationBackend for RemoteClassifier {
    async fn classify(
        &self,
        text: &str,
    ) -> Result<(ClassificationResult, Option<RemoteError>), RemoteError> {
        let content = self.completion(CATEGORIZE_SYSTEM_PROMPT, text).await?;

        // Recovered with per-field defaults; the kind travels with the result
        // so the engine can report it without discarding the valid fields.
        let (result, degraded) = parse_verdict(&content);
        let signal = degraded.then(|| RemoteError::MalformedResponse(content));
        Ok((result, signal))
    }

    async fn insight(&self, tasks: &[Task]) -> Result<String, RemoteError> {
        let tasks_json =
            serde_json::to_string(tasks).map_err(|e| RemoteError::Generic(e.to_string()))?;
        let prompt = format!("Analyze these tasks and provide insights: {}", tasks_json);

        let content = self.completion(INSIGHT_SYSTEM_PROMPT, &prompt).await?;
        if content.is_empty() {
            return Err(RemoteError::MalformedResponse(
                "empty insight content".to_string(),
            ));
        }
        Ok(content)
    }
}
