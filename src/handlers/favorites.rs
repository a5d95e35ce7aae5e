//! Favorites and content-order handlers
//!
//! Favorite state is a relation between users and content items; the client
//! decides whether to add or remove, so a pair of racing toggles can leave
//! either outcome — the store only guarantees each individual call applies
//! atomically.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::store::ContentStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub content_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentOrderRequest {
    pub content_order: Vec<Uuid>,
}

/// List a user's favorited content items
/// GET /api/v1/users/{user_id}/favorites
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/favorites",
    tag = "favorites",
    responses((status = 200, description = "Favorited items in relation order", body = [crate::models::ContentItem]))
)]
pub async fn get_user_favorites(
    store: web::Data<Arc<ContentStore>>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let items = store.get_user_favorites(*user_id).await;
    Ok(HttpResponse::Ok().json(items))
}

/// Add a favorite relation
/// POST /api/v1/users/{user_id}/favorites
///
/// Appends unconditionally — favoriting the same item twice creates two
/// relations. The referenced content item must exist.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/favorites",
    tag = "favorites",
    responses(
        (status = 201, description = "Created relation", body = crate::models::UserFavorite),
        (status = 404, description = "Unknown content id")
    )
)]
pub async fn add_favorite(
    store: web::Data<Arc<ContentStore>>,
    user_id: web::Path<Uuid>,
    req: web::Json<AddFavoriteRequest>,
) -> Result<HttpResponse> {
    if store.get_content_item(req.content_id).await.is_none() {
        return Err(AppError::NotFound(format!(
            "content item {}",
            req.content_id
        )));
    }

    let favorite = store.add_to_favorites(*user_id, req.content_id).await;
    Ok(HttpResponse::Created().json(favorite))
}

/// Remove a favorite relation
/// DELETE /api/v1/users/{user_id}/favorites/{content_id}
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/favorites/{content_id}",
    tag = "favorites",
    responses(
        (status = 200, description = "Relation removed"),
        (status = 404, description = "No such relation")
    )
)]
pub async fn remove_favorite(
    store: web::Data<Arc<ContentStore>>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, content_id) = path.into_inner();
    if store.remove_from_favorites(user_id, content_id).await {
        Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Favorite removed"})))
    } else {
        Err(AppError::NotFound("favorite relation".to_string()))
    }
}

/// Check favorite membership
/// GET /api/v1/users/{user_id}/favorites/{content_id}/check
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/favorites/{content_id}/check",
    tag = "favorites",
    responses((status = 200, description = "Membership flag"))
)]
pub async fn check_favorite(
    store: web::Data<Arc<ContentStore>>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, content_id) = path.into_inner();
    let is_favorite = store.is_favorite(user_id, content_id).await;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "isFavorite": is_favorite })))
}

/// Get a user's manual content ordering
/// GET /api/v1/users/{user_id}/content-order
///
/// Users without a stored ordering get an empty order rather than a 404.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/content-order",
    tag = "favorites",
    responses((status = 200, description = "The ordering record, or an empty order"))
)]
pub async fn get_content_order(
    store: web::Data<Arc<ContentStore>>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match store.get_user_content_order(*user_id).await {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::Ok().json(serde_json::json!({ "contentOrder": [] }))),
    }
}

/// Upsert a user's manual content ordering
/// PUT /api/v1/users/{user_id}/content-order
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/content-order",
    tag = "favorites",
    responses((status = 200, description = "Upserted ordering record", body = crate::models::UserContentOrder))
)]
pub async fn update_content_order(
    store: web::Data<Arc<ContentStore>>,
    user_id: web::Path<Uuid>,
    req: web::Json<UpdateContentOrderRequest>,
) -> Result<HttpResponse> {
    let record = store
        .update_user_content_order(*user_id, req.into_inner().content_order)
        .await;
    Ok(HttpResponse::Ok().json(record))
}
