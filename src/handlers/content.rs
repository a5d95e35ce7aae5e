//! Content handlers - HTTP endpoints for feed reads

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::services::FeedService;
use crate::store::ContentStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub category: Option<String>,
    /// When present, the user's manual ordering and favorite flags are
    /// applied to the returned page.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub category: Option<String>,
}

/// List the aggregated content feed
/// GET /api/v1/content
#[utoipa::path(
    get,
    path = "/api/v1/content",
    tag = "content",
    responses((status = 200, description = "Recency-ordered content page", body = [crate::models::ContentItem]))
)]
pub async fn list_content(
    feed: web::Data<Arc<FeedService>>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or_else(|| feed.default_page_size());

    let items = feed
        .list(page, limit, query.category.as_deref(), query.user_id)
        .await;
    Ok(HttpResponse::Ok().json(items))
}

/// Search content by substring
/// GET /api/v1/content/search
#[utoipa::path(
    get,
    path = "/api/v1/content/search",
    tag = "content",
    responses(
        (status = 200, description = "Matching items, OR-of-tokens semantics", body = [crate::models::ContentItem]),
        (status = 400, description = "Missing or empty query")
    )
)]
pub async fn search_content(
    feed: web::Data<Arc<FeedService>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let q = query
        .q
        .as_deref()
        .ok_or_else(|| AppError::Validation("search query required".to_string()))?;
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or_else(|| feed.default_page_size());

    let items = feed.search(q, page, limit).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Trending content (recency proxy, capped)
/// GET /api/v1/content/trending
#[utoipa::path(
    get,
    path = "/api/v1/content/trending",
    tag = "content",
    responses((status = 200, description = "Up to 10 most recent items", body = [crate::models::ContentItem]))
)]
pub async fn trending_content(
    feed: web::Data<Arc<FeedService>>,
    query: web::Query<TrendingQuery>,
) -> Result<HttpResponse> {
    let items = feed.trending(query.category.as_deref()).await;
    Ok(HttpResponse::Ok().json(items))
}

/// Get a single content item by id
/// GET /api/v1/content/{id}
#[utoipa::path(
    get,
    path = "/api/v1/content/{id}",
    tag = "content",
    responses(
        (status = 200, description = "The content item", body = crate::models::ContentItem),
        (status = 404, description = "Unknown content id")
    )
)]
pub async fn get_content_item(
    store: web::Data<Arc<ContentStore>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match store.get_content_item(*id).await {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound(format!("content item {id}"))),
    }
}
