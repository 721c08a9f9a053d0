//! Gemini implementation of [`MetadataSuggester`].
//!
//! ```rust,ignore
//! use campus_hub::suggestion::GeminiSuggester;
//!
//! let gemini = GeminiSuggester::new("AIza...".into())?
//!     .with_model("gemini-2.5-flash");
//! let suggestion = gemini.suggest("整理了大学物理上册所有章节的习题答案").await?;
//! ```

use super::{ensure_describable, MetadataSuggester, Suggestion, SuggestionError};
use crate::config::SuggestionConfig;
use crate::model::Category;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Gemini-backed suggestion client.
pub struct GeminiSuggester {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiSuggester {
    /// Creates a client with the default model and timeout.
    pub fn new(api_key: SecretString) -> Result<Self, SuggestionError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: SecretString, timeout: Duration) -> Result<Self, SuggestionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Builds a client from configuration. Fails with
    /// [`SuggestionError::NotConfigured`] when no API key is set.
    pub fn from_config(config: &SuggestionConfig) -> Result<Self, SuggestionError> {
        let api_key = config
            .api_key
            .as_ref()
            .map(|key| SecretString::from(key.expose_secret().to_string()))
            .ok_or(SuggestionError::NotConfigured)?;
        Ok(Self::with_timeout(api_key, Duration::from_secs(config.timeout_secs))?
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone()))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl std::fmt::Debug for GeminiSuggester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSuggester")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MetadataSuggester for GeminiSuggester {
    #[instrument(skip(self, description), fields(model = %self.model, chars = description.chars().count()))]
    async fn suggest(&self, description: &str) -> Result<Suggestion, SuggestionError> {
        ensure_describable(description)?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request_body(description))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Suggestion request rejected");
            return Err(SuggestionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(classify)?;
        let suggestion = parse_response(&body)?;
        debug!(title = %suggestion.title, category = %suggestion.category, "Suggestion received");
        Ok(suggestion)
    }
}

fn classify(e: reqwest::Error) -> SuggestionError {
    if e.is_timeout() {
        SuggestionError::Timeout
    } else {
        SuggestionError::Http(e)
    }
}

/// `generateContent` request asking for a JSON object with the four fields.
fn request_body(description: &str) -> serde_json::Value {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    json!({
        "contents": [{
            "parts": [{
                "text": format!(
                    "分析这段教育资源分享帖子的内容并提取元数据，请使用中文返回结果： \"{}\"",
                    description
                )
            }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING", "description": "一个吸引人的论坛帖子标题" },
                    "summary": { "type": "STRING", "description": "一段简短专业的摘要" },
                    "category": {
                        "type": "STRING",
                        "description": format!("最合适的分类：{}", labels.join(", "))
                    },
                    "keywords": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["title", "summary", "category", "keywords"]
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Extracts the JSON answer from the first candidate's text parts.
fn parse_response(body: &str) -> Result<Suggestion, SuggestionError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| SuggestionError::Malformed(e.to_string()))?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| SuggestionError::Malformed("no candidates".into()))?;
    let text: String = candidate.content.parts.into_iter().map(|p| p.text).collect();
    serde_json::from_str(&text).map_err(|e| SuggestionError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_reads_first_candidate() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"title\":\"大学物理习题详解\",\"summary\":\"上册全部章节\",\"category\":\"理化生\",\"keywords\":[\"物理\",\"习题\"]}"
                    }]
                }
            }]
        })
        .to_string();

        let suggestion = parse_response(&body).unwrap();
        assert_eq!(suggestion.title, "大学物理习题详解");
        assert_eq!(suggestion.category(), Some(Category::Science));
        assert_eq!(suggestion.keywords.len(), 2);
    }

    #[test]
    fn test_parse_response_rejects_malformed_answers() {
        assert!(matches!(
            parse_response(r#"{"candidates":[]}"#),
            Err(SuggestionError::Malformed(_))
        ));

        let not_json = json!({
            "candidates": [{ "content": { "parts": [{ "text": "sorry, I can't help" }] } }]
        })
        .to_string();
        assert!(matches!(parse_response(&not_json), Err(SuggestionError::Malformed(_))));
        assert!(matches!(parse_response("<html>"), Err(SuggestionError::Malformed(_))));
    }

    #[test]
    fn test_request_body_lists_every_category_label() {
        let body = request_body("整理了大学物理上册所有章节的习题答案");
        let schema = &body["generationConfig"]["responseSchema"];
        let hint = schema["properties"]["category"]["description"].as_str().unwrap();

        for category in Category::ALL {
            assert!(hint.contains(category.label()));
        }
        assert_eq!(schema["required"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_endpoint_and_debug_hide_the_key() {
        let gemini = GeminiSuggester::new(SecretString::from("AIza-secret".to_string()))
            .unwrap()
            .with_base_url("http://localhost:9000/")
            .with_model("gemini-test");

        assert_eq!(
            gemini.endpoint(),
            "http://localhost:9000/models/gemini-test:generateContent"
        );
        assert!(!format!("{:?}", gemini).contains("AIza-secret"));
    }

    #[tokio::test]
    async fn test_short_description_never_hits_the_network() {
        let gemini = GeminiSuggester::new(SecretString::from("key".to_string()))
            .unwrap()
            .with_base_url("http://127.0.0.1:1");

        let err = gemini.suggest("短").await.unwrap_err();
        assert!(matches!(err, SuggestionError::DescriptionTooShort { .. }));
    }
}
