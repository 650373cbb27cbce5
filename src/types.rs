use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record identifier. Projects use numbers in the hardcoded arrays and
/// strings when they come from a CMS, so both forms are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            RecordId::Number(n) => raw.trim().parse::<u64>().map_or(false, |r| r == *n),
            RecordId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// Record key: `_id`, with the numeric `id` some records carry beside it.
/// Decoding prefers `_id` and falls back to `id` when `_id` is absent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawRecordKey")]
pub struct RecordKey {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<RecordId>,
}

#[derive(Deserialize)]
struct RawRecordKey {
    #[serde(rename = "_id", default)]
    id: Option<RecordId>,
    #[serde(rename = "id", default)]
    legacy_id: Option<RecordId>,
}

impl TryFrom<RawRecordKey> for RecordKey {
    type Error = &'static str;

    fn try_from(raw: RawRecordKey) -> Result<Self, Self::Error> {
        match (raw.id, raw.legacy_id) {
            (Some(id), legacy_id) => Ok(RecordKey { id, legacy_id }),
            (None, Some(id)) => Ok(RecordKey::new(id)),
            (None, None) => Err("missing field `_id`"),
        }
    }
}

impl RecordKey {
    pub fn new(id: impl Into<RecordId>) -> Self {
        RecordKey {
            id: id.into(),
            legacy_id: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

/// Technology list, either free text ("React, Node.js") or an array.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Technologies {
    List(Vec<String>),
    Text(String),
}

impl Technologies {
    pub fn tags(&self) -> Vec<String> {
        match self {
            Technologies::List(list) => list
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            Technologies::Text(text) => text
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GithubLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub key: RecordKey,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "techStack", skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Technologies>,
    #[serde(default, alias = "link", skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Project {
    pub fn tags(&self) -> Vec<String> {
        self.technologies
            .as_ref()
            .map(Technologies::tags)
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(flatten)]
    pub key: RecordKey,
    #[serde(alias = "name")]
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_image: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

pub const CERTIFICATE_FALLBACK_TEXT: &str = "links yet to be added";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(flatten)]
    pub key: RecordKey,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

fn non_blank(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|url| !url.trim().is_empty())
}

impl Certificate {
    /// Link to show for the certificate; blank URLs count as missing.
    pub fn link(&self) -> Option<&str> {
        non_blank(&self.live_url).or_else(|| non_blank(&self.credential_url))
    }

    pub fn fallback(&self) -> &str {
        self.fallback_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(CERTIFICATE_FALLBACK_TEXT)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(flatten)]
    pub key: RecordKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_email: Option<String>,
}

/// Result envelope for list reads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> QueryResult<T> {
    pub fn empty() -> Self {
        QueryResult {
            items: Vec::new(),
            total_count: 0,
            has_next: false,
            has_prev: false,
            page_size: 0,
            current_page: 0,
            total_pages: 0,
        }
    }

    /// Every item on page zero.
    pub fn single_page(items: Vec<T>) -> Self {
        let total_count = items.len();
        QueryResult {
            items,
            total_count,
            has_next: false,
            has_prev: false,
            page_size: total_count,
            current_page: 0,
            total_pages: if total_count > 0 { 1 } else { 0 },
        }
    }
}
