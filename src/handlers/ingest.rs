//! Ingestion handlers - trigger provider fetch + normalize + persist
//!
//! Each call is all-or-nothing: a provider failure surfaces as 502 and
//! nothing from that call lands in the store. Successful calls return the
//! newly created items. Repeated calls create duplicates; there is no dedup
//! against existing content.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::Result;
use crate::services::AggregationService;

const DEFAULT_NEWS_CATEGORY: &str = "technology";

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

/// Ingest top headlines from the news provider
/// GET /api/v1/news
#[utoipa::path(
    get,
    path = "/api/v1/news",
    tag = "ingest",
    responses(
        (status = 200, description = "Newly created news items", body = [crate::models::ContentItem]),
        (status = 502, description = "News provider failure")
    )
)]
pub async fn ingest_news(
    aggregation: web::Data<Arc<AggregationService>>,
    query: web::Query<NewsQuery>,
) -> Result<HttpResponse> {
    let category = query.category.as_deref().unwrap_or(DEFAULT_NEWS_CATEGORY);
    let created = aggregation.ingest_news(category).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// Ingest popular movies from TMDB
/// GET /api/v1/movies
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    tag = "ingest",
    responses(
        (status = 200, description = "Newly created movie items", body = [crate::models::ContentItem]),
        (status = 502, description = "Movie provider failure")
    )
)]
pub async fn ingest_movies(
    aggregation: web::Data<Arc<AggregationService>>,
) -> Result<HttpResponse> {
    let created = aggregation.ingest_movies().await?;
    Ok(HttpResponse::Ok().json(created))
}

/// Ingest the static social sample posts
/// GET /api/v1/social
#[utoipa::path(
    get,
    path = "/api/v1/social",
    tag = "ingest",
    responses((status = 200, description = "Newly created social items", body = [crate::models::ContentItem]))
)]
pub async fn ingest_social(
    aggregation: web::Data<Arc<AggregationService>>,
) -> Result<HttpResponse> {
    let created = aggregation.ingest_social().await?;
    Ok(HttpResponse::Ok().json(created))
}
