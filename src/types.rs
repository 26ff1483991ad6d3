// Data shapes exchanged with the SmartCurator backend. Field names follow
// the backend's JSON exactly; optional request fields are skipped when unset
// so the backend applies its own defaults.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login request payload. Input only, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for `/auth/register`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Expected response from the login endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Url,
    Pdf,
    Text,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Url, ContentType::Pdf, ContentType::Text];

    /// Wire value, as the backend expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Pdf => "pdf",
            ContentType::Text => "text",
        }
    }

    /// Label shown in the type picker.
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Url => "URL",
            ContentType::Pdf => "PDF",
            ContentType::Text => "텍스트",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a quick-add submission to `/contents/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContentSubmission {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    pub content_type: ContentType,
    pub is_public: bool,
}

/// Processing state of a content item. The lifecycle is owned by the
/// backend; this side only reads it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Pending,
    Processing,
    #[serde(alias = "completed")]
    Processed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentStatus::Pending => "pending",
            ContentStatus::Processing => "processing",
            ContentStatus::Processed => "processed",
            ContentStatus::Failed => "failed",
            ContentStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One row of `/contents/my`. Summary, tags and `updated_at` stay null
/// until the backend has processed the item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContentSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub status: ContentStatus,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Paging window for list calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Page { skip: 0, limit: 20 }
    }
}
