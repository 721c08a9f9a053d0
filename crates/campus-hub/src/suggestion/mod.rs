//! # Metadata Suggestion
//!
//! One-shot lookup that proposes a title and category for a post from its
//! free-text description. The lookup is advisory: when it fails, the draft
//! the user is editing stays exactly as it was and they keep typing.
//!
//! Providers implement [`MetadataSuggester`]; [`GeminiSuggester`] talks to the
//! Gemini `generateContent` endpoint.

pub mod gemini;

pub use gemini::GeminiSuggester;

use crate::model::{Category, ResourceLink};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Descriptions shorter than this (in characters) are not sent for analysis.
pub const MIN_DESCRIPTION_CHARS: usize = 15;

/// Metadata proposed by the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub summary: String,
    /// Free text; resolve it with [`Suggestion::category`].
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Suggestion {
    /// The first category whose label appears in the service's answer.
    pub fn category(&self) -> Option<Category> {
        Category::find_in(&self.category)
    }
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("description too short: {actual} characters, at least {min} required")]
    DescriptionTooShort { min: usize, actual: usize },

    #[error("suggestion service is not configured")]
    NotConfigured,

    #[error("suggestion service timed out")]
    Timeout,

    #[error("suggestion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed suggestion response: {0}")]
    Malformed(String),

    #[error("suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A provider of [`Suggestion`]s.
#[async_trait]
pub trait MetadataSuggester: Send + Sync {
    /// Analyze `description` and propose metadata for it.
    async fn suggest(&self, description: &str) -> Result<Suggestion, SuggestionError>;
}

/// Checks the minimum description length before any request is made.
pub fn ensure_describable(description: &str) -> Result<(), SuggestionError> {
    let actual = description.chars().count();
    if actual < MIN_DESCRIPTION_CHARS {
        return Err(SuggestionError::DescriptionTooShort {
            min: MIN_DESCRIPTION_CHARS,
            actual,
        });
    }
    Ok(())
}

/// The publish form while it is being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub price: u32,
    pub links: Vec<ResourceLink>,
    pub thumbnail: Option<String>,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: Category::Exams,
            price: 0,
            links: Vec::new(),
            thumbnail: None,
        }
    }
}

impl PostDraft {
    /// Overwrites the title and, if the answer names a known category, the
    /// category. Every other field keeps what the user entered.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        self.title = suggestion.title.clone();
        if let Some(category) = suggestion.category() {
            self.category = category;
        }
    }
}
