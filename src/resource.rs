//! Resource records as stored in the catalog, the admin draft shape used to
//! create/update them, and the scored projection handed back to callers.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language every catalog read falls back to.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Kind of learning resource.
/// Serialized lower-case; parsed case-insensitively from catalog files and
/// admin drafts alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Article,
    Book,
    Tool,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Course => "course",
            ResourceType::Article => "article",
            ResourceType::Book => "book",
            ResourceType::Tool => "tool",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource type `{0}` (expected course, article, book or tool)")]
pub struct UnknownResourceType(pub String);

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "course" => Ok(ResourceType::Course),
            "article" => Ok(ResourceType::Article),
            "book" => Ok(ResourceType::Book),
            "tool" => Ok(ResourceType::Tool),
            _ => Err(UnknownResourceType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

fn default_language() -> String {
    FALLBACK_LANGUAGE.to_string()
}

/// A learning resource owned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// True when the resource should be served to a reader of `language`
    /// (exact tag or the English fallback).
    pub fn visible_in(&self, language: &str) -> bool {
        self.language == language || self.language == FALLBACK_LANGUAGE
    }
}

/// Validation failures for admin input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Category, type, and title are required")]
    MissingRequired,
    #[error(transparent)]
    UnknownType(#[from] UnknownResourceType),
}

/// Admin-supplied resource fields, before validation.
///
/// `type` stays a string here so that a bad value surfaces as a validation
/// error rather than an opaque JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDraft {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

fn non_blank(v: Option<&String>) -> Option<String> {
    v.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ResourceDraft {
    /// Validate and turn the draft into a resource with the given id.
    /// Timestamps are set to `now`.
    pub fn into_resource(self, id: String, now: DateTime<Utc>) -> Result<Resource, DraftError> {
        let category = non_blank(self.category.as_ref()).ok_or(DraftError::MissingRequired)?;
        let raw_type = non_blank(self.resource_type.as_ref()).ok_or(DraftError::MissingRequired)?;
        let title = non_blank(self.title.as_ref()).ok_or(DraftError::MissingRequired)?;
        let resource_type = raw_type.parse::<ResourceType>()?;

        Ok(Resource {
            id,
            category,
            resource_type,
            title,
            url: non_blank(self.url.as_ref()),
            description: non_blank(self.description.as_ref()),
            language: non_blank(self.language.as_ref()).unwrap_or_else(default_language),
            is_featured: self.is_featured.unwrap_or(false),
            sort_order: self.sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

/// A resource annotated with a request-scoped score and explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResource {
    #[serde(flatten)]
    pub resource: Resource,
    pub relevance_score: u32,
    pub reason: String,
}

impl ScoredResource {
    pub fn new(resource: Resource, relevance_score: u32, reason: impl Into<String>) -> Self {
        Self {
            resource,
            relevance_score,
            reason: reason.into(),
        }
    }
}

/// Canonical business-function category a resource is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub sort_order: i32,
}
