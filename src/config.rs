//! Configuration management for the content dashboard service
//!
//! This module handles loading and managing configuration from environment
//! variables. Every field has a development default; production deployments
//! are expected to override at least the CORS origins and provider API keys.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// External content provider configuration
    pub providers: ProviderConfig,
    /// Feed/query defaults
    pub feed: FeedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// External provider settings (NewsAPI and TMDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub news_api_key: String,
    pub news_base_url: String,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    /// Poster path fragments are expanded against this prefix
    pub tmdb_image_base_url: String,
    pub request_timeout_ms: u64,
}

/// Feed/query defaults (page sizes, trending cap)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub trending_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("DASHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("DASHBOARD_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            providers: ProviderConfig {
                news_api_key: std::env::var("NEWS_API_KEY")
                    .or_else(|_| std::env::var("NEWSAPI_KEY"))
                    .unwrap_or_else(|_| "demo_key".to_string()),
                news_base_url: std::env::var("NEWS_API_BASE_URL")
                    .unwrap_or_else(|_| "https://newsapi.org/v2".to_string()),
                tmdb_api_key: std::env::var("TMDB_API_KEY")
                    .or_else(|_| std::env::var("TMDB_KEY"))
                    .unwrap_or_else(|_| "demo_key".to_string()),
                tmdb_base_url: std::env::var("TMDB_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
                tmdb_image_base_url: std::env::var("TMDB_IMAGE_BASE_URL")
                    .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string()),
                request_timeout_ms: std::env::var("PROVIDER_REQUEST_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10_000),
            },
            feed: FeedConfig {
                default_page_size: std::env::var("FEED_DEFAULT_PAGE_SIZE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(20),
                max_page_size: std::env::var("FEED_MAX_PAGE_SIZE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(100),
                trending_limit: std::env::var("FEED_TRENDING_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            },
        })
    }
}
