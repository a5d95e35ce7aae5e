//! Route configuration
//!
//! Centralized route setup shared by main.rs and the integration tests.
//! Fixed-path content routes (`/search`, `/trending`) register before the
//! `/{id}` lookup so they are not shadowed.

use actix_web::{web, HttpResponse};

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/health", web::get().to(health_summary))
        .route("/api/v1/health/live", web::get().to(liveness_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/content")
                        .route("/search", web::get().to(handlers::search_content))
                        .route("/trending", web::get().to(handlers::trending_content))
                        .service(web::resource("").route(web::get().to(handlers::list_content)))
                        .service(
                            web::resource("/{id}").route(web::get().to(handlers::get_content_item)),
                        ),
                )
                .route("/news", web::get().to(handlers::ingest_news))
                .route("/movies", web::get().to(handlers::ingest_movies))
                .route("/social", web::get().to(handlers::ingest_social))
                .service(
                    web::scope("/users")
                        .service(web::resource("").route(web::post().to(handlers::create_user)))
                        .service(web::resource("/{id}").route(web::get().to(handlers::get_user)))
                        .route(
                            "/{id}/preferences",
                            web::put().to(handlers::update_preferences),
                        )
                        .service(
                            web::resource("/{user_id}/favorites")
                                .route(web::get().to(handlers::get_user_favorites))
                                .route(web::post().to(handlers::add_favorite)),
                        )
                        .service(
                            web::resource("/{user_id}/favorites/{content_id}")
                                .route(web::delete().to(handlers::remove_favorite)),
                        )
                        .route(
                            "/{user_id}/favorites/{content_id}/check",
                            web::get().to(handlers::check_favorite),
                        )
                        .service(
                            web::resource("/{user_id}/content-order")
                                .route(web::get().to(handlers::get_content_order))
                                .route(web::put().to(handlers::update_content_order)),
                        ),
                ),
        );
}

/// Health summary handler
async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "content-dashboard",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Liveness handler
async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
