//! HTTP handlers for the dashboard API
//!
//! This module contains handlers for:
//! - Content: feed listing, search, trending, single-item lookup
//! - Ingest: provider-triggered ingestion of news, movies and social posts
//! - Users: account creation, lookup, preference updates
//! - Favorites: favorite relations and manual content ordering

pub mod content;
pub mod favorites;
pub mod ingest;
pub mod users;

// Re-export handler functions at module level
pub use content::{get_content_item, list_content, search_content, trending_content};
pub use favorites::{
    add_favorite, check_favorite, get_content_order, get_user_favorites, remove_favorite,
    update_content_order,
};
pub use ingest::{ingest_movies, ingest_news, ingest_social};
pub use users::{create_user, get_user, update_preferences};
