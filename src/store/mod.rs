//! In-memory content store.
//!
//! Sole source of truth for content items, users, favorite relations and
//! per-user content ordering. All state lives behind a single `RwLock` so
//! writers are mutually exclusive and readers always observe a consistent
//! snapshot; nothing here survives a restart.
//!
//! Items are never deleted through this store. The only relation that is ever
//! removed is a favorite, on unfavorite.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    ContentItem, NewContentItem, NewUser, User, UserContentOrder, UserFavorite, UserPreferences,
};

pub mod seed;

#[derive(Default)]
struct StoreState {
    users: HashMap<Uuid, User>,
    content: HashMap<Uuid, ContentItem>,
    /// Content ids in ingestion order; recency sorts are stable over this,
    /// which makes equal-timestamp ordering deterministic.
    content_insertion: Vec<Uuid>,
    favorites: Vec<UserFavorite>,
    content_orders: HashMap<Uuid, UserContentOrder>,
}

pub struct ContentStore {
    state: RwLock<StoreState>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    // ---- users ----

    /// Create a user, rejecting username/email collisions.
    ///
    /// Preferences default to empty categories with all notifications off
    /// when omitted.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let mut state = self.state.write().await;

        if state
            .users
            .values()
            .any(|u| u.username == new_user.username)
        {
            return Err(AppError::Conflict(format!(
                "username '{}' is already taken",
                new_user.username
            )));
        }
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(AppError::Conflict(format!(
                "email '{}' is already registered",
                new_user.email
            )));
        }

        let mut preferences = new_user.preferences.unwrap_or_default();
        preferences.dedup_categories();

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password: new_user.password,
            preferences,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Option<User> {
        self.state.read().await.users.get(&id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let state = self.state.read().await;
        state.users.values().find(|u| u.username == username).cloned()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let state = self.state.read().await;
        state.users.values().find(|u| u.email == email).cloned()
    }

    /// Replace a user's preferences wholesale.
    pub async fn update_user_preferences(
        &self,
        user_id: Uuid,
        mut preferences: UserPreferences,
    ) -> Result<User> {
        preferences.dedup_categories();
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("user {user_id}")))?;
        user.preferences = preferences;
        Ok(user.clone())
    }

    // ---- content ----

    /// Persist a content item, assigning a fresh id and ingestion timestamp.
    /// `published_at` defaults to the ingestion time when omitted.
    pub async fn create_content_item(&self, new_item: NewContentItem) -> ContentItem {
        let mut state = self.state.write().await;
        let created_at = Utc::now();
        let item = ContentItem {
            id: Uuid::new_v4(),
            content_type: new_item.content_type,
            title: new_item.title,
            description: new_item.description,
            content: new_item.content,
            image_url: new_item.image_url,
            source_url: new_item.source_url,
            category: new_item.category,
            published_at: new_item.published_at.or(Some(created_at)),
            created_at,
            is_favorite: false,
            is_trending: new_item.is_trending,
        };
        state.content.insert(item.id, item.clone());
        state.content_insertion.push(item.id);
        item
    }

    pub async fn get_content_item(&self, id: Uuid) -> Option<ContentItem> {
        self.state.read().await.content.get(&id).cloned()
    }

    /// Content items matching an optional exact-match category, sorted by
    /// recency, sliced to the requested 1-based page.
    pub async fn list_content(
        &self,
        page: usize,
        limit: usize,
        category: Option<&str>,
    ) -> Vec<ContentItem> {
        let state = self.state.read().await;
        let mut items = state.content_in_insertion_order();
        if let Some(category) = category {
            items.retain(|item| item.category.as_deref() == Some(category));
        }
        sort_by_recency(&mut items);
        paginate(items, page, limit)
    }

    /// Case-insensitive OR-of-tokens substring search over title, description
    /// and category. A query "cat dog" matches items containing either term.
    pub async fn search_content(
        &self,
        query: &str,
        page: usize,
        limit: usize,
    ) -> Vec<ContentItem> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        let state = self.state.read().await;
        let mut items = state.content_in_insertion_order();
        items.retain(|item| {
            let haystack = format!(
                "{} {} {}",
                item.title,
                item.description,
                item.category.as_deref().unwrap_or_default()
            )
            .to_lowercase();
            terms.iter().any(|term| haystack.contains(term))
        });
        sort_by_recency(&mut items);
        paginate(items, page, limit)
    }

    /// Most recent items, optionally filtered by category, capped at `limit`.
    ///
    /// This is a recency proxy only — no engagement weighting happens here,
    /// despite the "trending" name.
    pub async fn get_trending(&self, category: Option<&str>, limit: usize) -> Vec<ContentItem> {
        let state = self.state.read().await;
        let mut items = state.content_in_insertion_order();
        if let Some(category) = category {
            items.retain(|item| item.category.as_deref() == Some(category));
        }
        sort_by_recency(&mut items);
        items.truncate(limit);
        items
    }

    // ---- favorites ----

    /// Append a favorite relation. Intentionally not idempotent: repeated
    /// calls for the same pair create duplicate relations, preserving the
    /// original design's behavior.
    pub async fn add_to_favorites(&self, user_id: Uuid, content_id: Uuid) -> UserFavorite {
        let mut state = self.state.write().await;
        let favorite = UserFavorite {
            id: Uuid::new_v4(),
            user_id,
            content_id,
            created_at: Utc::now(),
        };
        state.favorites.push(favorite.clone());
        favorite
    }

    /// Remove the first matching relation; returns whether one was removed.
    pub async fn remove_from_favorites(&self, user_id: Uuid, content_id: Uuid) -> bool {
        let mut state = self.state.write().await;
        if let Some(pos) = state
            .favorites
            .iter()
            .position(|f| f.user_id == user_id && f.content_id == content_id)
        {
            state.favorites.remove(pos);
            true
        } else {
            false
        }
    }

    pub async fn is_favorite(&self, user_id: Uuid, content_id: Uuid) -> bool {
        let state = self.state.read().await;
        state
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.content_id == content_id)
    }

    /// The content items a user has favorited, in relation order. Relations
    /// pointing at unknown content ids are skipped.
    pub async fn get_user_favorites(&self, user_id: Uuid) -> Vec<ContentItem> {
        let state = self.state.read().await;
        state
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| state.content.get(&f.content_id))
            .map(|item| {
                let mut item = item.clone();
                item.is_favorite = true;
                item
            })
            .collect()
    }

    /// Favorited content ids for a user, for cheap view-level projection.
    pub async fn favorite_content_ids(&self, user_id: Uuid) -> Vec<Uuid> {
        let state = self.state.read().await;
        state
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.content_id)
            .collect()
    }

    // ---- content order ----

    pub async fn get_user_content_order(&self, user_id: Uuid) -> Option<UserContentOrder> {
        self.state.read().await.content_orders.get(&user_id).cloned()
    }

    /// Upsert-by-user semantics: an existing record keeps its id and has its
    /// ordering and `updated_at` replaced in place.
    pub async fn update_user_content_order(
        &self,
        user_id: Uuid,
        content_order: Vec<Uuid>,
    ) -> UserContentOrder {
        let mut state = self.state.write().await;
        let record = state
            .content_orders
            .entry(user_id)
            .or_insert_with(|| UserContentOrder {
                id: Uuid::new_v4(),
                user_id,
                content_order: Vec::new(),
                updated_at: Utc::now(),
            });
        record.content_order = content_order;
        record.updated_at = Utc::now();
        record.clone()
    }

    /// Number of stored content items; used by ingestion logging and tests.
    pub async fn content_count(&self) -> usize {
        self.state.read().await.content.len()
    }
}

impl StoreState {
    fn content_in_insertion_order(&self) -> Vec<ContentItem> {
        self.content_insertion
            .iter()
            .filter_map(|id| self.content.get(id))
            .cloned()
            .collect()
    }
}

/// Stable descending sort by effective timestamp. Stability over insertion
/// order keeps equal-timestamp results deterministic.
fn sort_by_recency(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.effective_timestamp().cmp(&a.effective_timestamp()));
}

fn paginate(items: Vec<ContentItem>, page: usize, limit: usize) -> Vec<ContentItem> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(limit);
    items.into_iter().skip(start).take(limit).collect()
}
