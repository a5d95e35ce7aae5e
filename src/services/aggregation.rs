//! Aggregation service - normalizes provider payloads into the content store
//!
//! Three source kinds feed the dashboard: NewsAPI headlines, TMDB popular
//! movies, and a static set of social posts (real social APIs need
//! authentication flows that are out of scope). Each ingested record is
//! persisted individually with a fresh id; repeated ingestion calls create
//! duplicates on purpose — the store never dedups against existing content.
//!
//! Failure semantics are all-or-nothing per invocation: a provider transport
//! error, non-success status, or malformed body surfaces as `AppError::Upstream`
//! and nothing from that call is persisted.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::models::{ContentItem, ContentPayload, ContentType, NewContentItem, SocialAuthor};
use crate::store::ContentStore;

const NEWS_PAGE_SIZE: u32 = 20;

pub struct AggregationService {
    http: reqwest::Client,
    config: ProviderConfig,
    store: Arc<ContentStore>,
}

impl AggregationService {
    pub fn new(config: ProviderConfig, store: Arc<ContentStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// Fetch top headlines for a category and persist every mapped article.
    pub async fn ingest_news(&self, category: &str) -> Result<Vec<ContentItem>> {
        let url = format!("{}/top-headlines", self.config.news_base_url);
        let page_size = NEWS_PAGE_SIZE.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("category", category),
                ("apiKey", self.config.news_api_key.as_str()),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "news provider returned status {}",
                response.status()
            )));
        }

        let payload: NewsApiResponse = response.json().await?;
        let mut created = Vec::with_capacity(payload.articles.len());
        for article in payload.articles {
            let item = self
                .store
                .create_content_item(normalize_article(article, category))
                .await;
            created.push(item);
        }
        tracing::info!(category, count = created.len(), "Ingested news articles");
        Ok(created)
    }

    /// Fetch popular movies and persist every mapped record.
    pub async fn ingest_movies(&self) -> Result<Vec<ContentItem>> {
        let url = format!("{}/movie/popular", self.config.tmdb_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.tmdb_api_key.as_str()),
                ("page", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "movie provider returned status {}",
                response.status()
            )));
        }

        let payload: TmdbResponse = response.json().await?;
        let mut created = Vec::with_capacity(payload.results.len());
        for movie in payload.results {
            let item = self
                .store
                .create_content_item(normalize_movie(movie, &self.config.tmdb_image_base_url))
                .await;
            created.push(item);
        }
        tracing::info!(count = created.len(), "Ingested movies");
        Ok(created)
    }

    /// Persist the static social sample posts. No live fetch happens here.
    pub async fn ingest_social(&self) -> Result<Vec<ContentItem>> {
        let mut created = Vec::new();
        for post in sample_social_posts() {
            created.push(self.store.create_content_item(post).await);
        }
        tracing::info!(count = created.len(), "Ingested social posts");
        Ok(created)
    }
}

// ---- provider payloads ----

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    articles: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsArticle {
    source: NewsSource,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: String,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsSource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbResponse {
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: i64,
    title: String,
    overview: Option<String>,
    release_date: Option<String>,
    vote_average: f64,
    vote_count: i64,
    poster_path: Option<String>,
}

// ---- normalizers ----

fn normalize_article(article: NewsArticle, category: &str) -> NewContentItem {
    NewContentItem {
        content_type: ContentType::News,
        title: article.title.unwrap_or_default(),
        description: article.description.unwrap_or_default(),
        content: ContentPayload::News {
            source: article.source.name,
            author: article.author,
            url: article.url.clone(),
        },
        image_url: article.url_to_image,
        source_url: Some(article.url),
        category: Some(category.to_string()),
        published_at: article.published_at.as_deref().and_then(parse_rfc3339),
        is_trending: false,
    }
}

fn normalize_movie(movie: TmdbMovie, image_base: &str) -> NewContentItem {
    let release_date = movie.release_date.unwrap_or_default();
    NewContentItem {
        content_type: ContentType::Movie,
        title: movie.title,
        description: movie.overview.unwrap_or_default(),
        content: ContentPayload::Movie {
            tmdb_id: movie.id,
            release_date: release_date.clone(),
            rating: movie.vote_average,
            vote_count: movie.vote_count,
        },
        image_url: movie
            .poster_path
            .map(|path| format!("{image_base}{path}")),
        source_url: None,
        category: Some("entertainment".to_string()),
        published_at: parse_release_date(&release_date),
        is_trending: false,
    }
}

fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// TMDB release dates are date-only; midnight UTC keeps them comparable with
/// full timestamps. Unparseable dates fall back to the ingestion time.
fn parse_release_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|naive| Utc.from_local_datetime(&naive).single())
}

fn sample_social_posts() -> Vec<NewContentItem> {
    let now = Utc::now();
    vec![
        NewContentItem {
            content_type: ContentType::Social,
            title: "Tech Innovation Update".to_string(),
            description: "Latest developments in AI and machine learning".to_string(),
            content: ContentPayload::Social {
                author: SocialAuthor {
                    name: "Tech Guru".to_string(),
                    handle: "@techguru".to_string(),
                    avatar: None,
                },
                text: "Just attended an amazing #TechConf! The pace of AI progress keeps \
                       accelerating. Who else is excited about the new developments? \
                       #AI #Innovation"
                    .to_string(),
                likes: 42,
                retweets: 12,
                platform: "twitter".to_string(),
            },
            image_url: None,
            source_url: None,
            category: Some("technology".to_string()),
            published_at: Some(now - chrono::Duration::hours(2)),
            is_trending: false,
        },
        NewContentItem {
            content_type: ContentType::Social,
            title: "AI Research Breakthrough".to_string(),
            description: "Neural network achieves new accuracy milestone".to_string(),
            content: ContentPayload::Social {
                author: SocialAuthor {
                    name: "AI Innovations".to_string(),
                    handle: "@aiinnov".to_string(),
                    avatar: None,
                },
                text: "Breaking: new architecture hits 95% accuracy on complex reasoning \
                       benchmarks. Could be the step change we've been waiting for. \
                       #MachineLearning #Research"
                    .to_string(),
                likes: 156,
                retweets: 32,
                platform: "twitter".to_string(),
            },
            image_url: None,
            source_url: None,
            category: Some("technology".to_string()),
            published_at: Some(now - chrono::Duration::hours(6)),
            is_trending: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_maps_to_news_item() {
        let article = NewsArticle {
            source: NewsSource {
                name: "Example Wire".to_string(),
            },
            author: Some("A. Reporter".to_string()),
            title: Some("Headline".to_string()),
            description: Some("Body".to_string()),
            url: "https://example.com/story".to_string(),
            url_to_image: Some("https://example.com/img.jpg".to_string()),
            published_at: Some("2024-03-01T12:00:00Z".to_string()),
        };

        let item = normalize_article(article, "technology");
        assert_eq!(item.category.as_deref(), Some("technology"));
        assert_eq!(item.source_url.as_deref(), Some("https://example.com/story"));
        assert!(item.published_at.is_some());
        match item.content {
            ContentPayload::News { source, .. } => assert_eq!(source, "Example Wire"),
            other => panic!("expected news payload, got {other:?}"),
        }
    }

    #[test]
    fn movie_poster_path_is_templated() {
        let movie = TmdbMovie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: Some("A hacker learns the truth.".to_string()),
            release_date: Some("1999-03-31".to_string()),
            vote_average: 8.2,
            vote_count: 24000,
            poster_path: Some("/poster.jpg".to_string()),
        };

        let item = normalize_movie(movie, "https://image.tmdb.org/t/p/w500");
        assert_eq!(
            item.image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(item.category.as_deref(), Some("entertainment"));
        assert!(item.published_at.is_some());
    }

    #[test]
    fn missing_poster_yields_no_image() {
        let movie = TmdbMovie {
            id: 1,
            title: "Unreleased".to_string(),
            overview: None,
            release_date: None,
            vote_average: 0.0,
            vote_count: 0,
            poster_path: None,
        };

        let item = normalize_movie(movie, "https://image.tmdb.org/t/p/w500");
        assert!(item.image_url.is_none());
        // Unparseable release date falls back to ingestion time at persist.
        assert!(item.published_at.is_none());
    }
}
