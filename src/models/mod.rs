//! Data models for the content dashboard service
//!
//! This module defines structures for:
//! - ContentItem: normalized news/movie/social records and their payloads
//! - User: account records with dashboard preferences
//! - UserFavorite: user <-> content favorite relation
//! - UserContentOrder: per-user manual feed ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Content source category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    News,
    Movie,
    Social,
}

/// Author block on a social post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialAuthor {
    pub name: String,
    pub handle: String,
    pub avatar: Option<String>,
}

/// Type-specific payload carried by a content item
///
/// The variants are structurally disjoint, so the wire representation stays
/// untagged: the envelope's `type` field identifies the shape, matching the
/// provider-normalized JSON the dashboard client consumes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ContentPayload {
    #[serde(rename_all = "camelCase")]
    News {
        source: String,
        author: Option<String>,
        url: String,
    },
    #[serde(rename_all = "camelCase")]
    Movie {
        tmdb_id: i64,
        release_date: String,
        rating: f64,
        vote_count: i64,
    },
    #[serde(rename_all = "camelCase")]
    Social {
        author: SocialAuthor,
        text: String,
        likes: i64,
        retweets: i64,
        platform: String,
    },
}

/// A unit of aggregated content
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    pub content: ContentPayload,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// View-level projection of favorite-set membership; the store's source
    /// of truth keeps favorites in a separate relation and leaves this false.
    #[serde(default)]
    pub is_favorite: bool,
    /// Static flag assigned at ingestion; no recomputation happens later.
    #[serde(default)]
    pub is_trending: bool,
}

impl ContentItem {
    /// Timestamp used for recency ordering: `published_at`, falling back to
    /// the ingestion time when absent.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

/// Fields supplied when creating a content item; the store assigns the id
/// and ingestion timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContentItem {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    pub content: ContentPayload,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_trending: bool,
}

/// Notification toggles consumed by the dashboard UI
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NotificationSettings {
    pub breaking: bool,
    pub digest: bool,
}

/// Per-user dashboard preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    /// Category labels the user wants emphasized; order irrelevant,
    /// duplicates disallowed
    pub categories: Vec<String>,
    pub notifications: NotificationSettings,
}

impl UserPreferences {
    /// Drop duplicate category labels, keeping first occurrences.
    pub fn dedup_categories(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.categories.retain(|c| seen.insert(c.clone()));
    }
}

/// An account record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Opaque; never hashed or validated by this service
    pub password: String,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

/// A favorite relation between a user and a content item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserFavorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Per-user manual feed ordering; at most one record per user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserContentOrder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_order: Vec<Uuid>,
    pub updated_at: DateTime<Utc>,
}
