//! Feed service - read-side views over the content store
//!
//! Pure functions of store state plus query parameters; nothing here mutates.
//! Trending remains a recency proxy (most recent first, capped), not an
//! engagement-weighted rank.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::FeedConfig;
use crate::error::{AppError, Result};
use crate::models::ContentItem;
use crate::store::ContentStore;

pub struct FeedService {
    store: Arc<ContentStore>,
    config: FeedConfig,
}

impl FeedService {
    pub fn new(store: Arc<ContentStore>, config: FeedConfig) -> Self {
        Self { store, config }
    }

    pub fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }

    /// Paginated recency-ordered listing, optionally category-filtered.
    ///
    /// When a user id is supplied, the user's stored manual ordering is
    /// applied over the returned page and favorite membership is projected
    /// onto each item.
    pub async fn list(
        &self,
        page: usize,
        limit: usize,
        category: Option<&str>,
        user_id: Option<Uuid>,
    ) -> Vec<ContentItem> {
        let (page, limit) = self.clamp(page, limit);
        let items = self.store.list_content(page, limit, category).await;

        match user_id {
            Some(user_id) => self.personalize(user_id, items).await,
            None => items,
        }
    }

    /// Substring search; rejects empty/whitespace queries.
    pub async fn search(&self, query: &str, page: usize, limit: usize) -> Result<Vec<ContentItem>> {
        if query.trim().is_empty() {
            return Err(AppError::Validation("search query required".to_string()));
        }
        let (page, limit) = self.clamp(page, limit);
        Ok(self.store.search_content(query, page, limit).await)
    }

    /// Up to `trending_limit` most recent items, optionally per category.
    pub async fn trending(&self, category: Option<&str>) -> Vec<ContentItem> {
        self.store
            .get_trending(category, self.config.trending_limit)
            .await
    }

    /// Apply the user's manual ordering and favorite projection to a feed.
    async fn personalize(&self, user_id: Uuid, items: Vec<ContentItem>) -> Vec<ContentItem> {
        let mut items = match self.store.get_user_content_order(user_id).await {
            Some(record) => apply_content_order(&record.content_order, items),
            None => items,
        };

        let favorite_ids = self.store.favorite_content_ids(user_id).await;
        for item in &mut items {
            item.is_favorite = favorite_ids.contains(&item.id);
        }
        items
    }

    fn clamp(&self, page: usize, limit: usize) -> (usize, usize) {
        let page = page.max(1);
        let limit = limit.clamp(1, self.config.max_page_size);
        (page, limit)
    }
}

/// Reconstruct a feed against a stored permutation: items named by the order
/// come first (in that order), the rest keep their existing relative order.
/// Ids in the order that are not present in `items` are silently dropped.
pub fn apply_content_order(order: &[Uuid], items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut remaining: Vec<Option<ContentItem>> = items.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for id in order {
        if let Some(pos) = remaining
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|item| item.id == *id))
        {
            if let Some(item) = remaining[pos].take() {
                ordered.push(item);
            }
        }
    }
    ordered.extend(remaining.into_iter().flatten());
    ordered
}
