//! OpenAPI documentation aggregation

use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    ContentItem, ContentPayload, ContentType, NotificationSettings, SocialAuthor, User,
    UserContentOrder, UserFavorite, UserPreferences,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content Dashboard API",
        description = "Aggregated news/movie/social feed with search, trending, favorites and per-user ordering"
    ),
    paths(
        handlers::content::list_content,
        handlers::content::search_content,
        handlers::content::trending_content,
        handlers::content::get_content_item,
        handlers::ingest::ingest_news,
        handlers::ingest::ingest_movies,
        handlers::ingest::ingest_social,
        handlers::users::create_user,
        handlers::users::get_user,
        handlers::users::update_preferences,
        handlers::favorites::get_user_favorites,
        handlers::favorites::add_favorite,
        handlers::favorites::remove_favorite,
        handlers::favorites::check_favorite,
        handlers::favorites::get_content_order,
        handlers::favorites::update_content_order,
    ),
    components(schemas(
        ContentItem,
        ContentPayload,
        ContentType,
        SocialAuthor,
        User,
        UserPreferences,
        NotificationSettings,
        UserFavorite,
        UserContentOrder,
    )),
    tags(
        (name = "content", description = "Feed reads: listing, search, trending"),
        (name = "ingest", description = "Provider ingestion"),
        (name = "users", description = "Accounts and preferences"),
        (name = "favorites", description = "Favorites and manual ordering"),
    )
)]
pub struct ApiDoc;
