//! User handlers - account creation, lookup, preference updates

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{NewUser, UserPreferences};
use crate::store::ContentStore;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

/// Create a user
/// POST /api/v1/users
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 201, description = "Created user", body = crate::models::User),
        (status = 400, description = "Invalid user data"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn create_user(
    store: web::Data<Arc<ContentStore>>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let req = req.into_inner();
    let user = store
        .create_user(NewUser {
            username: req.username,
            email: req.email,
            password: req.password,
            preferences: req.preferences,
        })
        .await?;

    Ok(HttpResponse::Created().json(user))
}

/// Get a user by id
/// GET /api/v1/users/{id}
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    responses(
        (status = 200, description = "The user", body = crate::models::User),
        (status = 404, description = "Unknown user id")
    )
)]
pub async fn get_user(
    store: web::Data<Arc<ContentStore>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match store.get_user(*id).await {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(AppError::NotFound(format!("user {id}"))),
    }
}

/// Replace a user's preferences wholesale
/// PUT /api/v1/users/{id}/preferences
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/preferences",
    tag = "users",
    responses(
        (status = 200, description = "Updated user", body = crate::models::User),
        (status = 404, description = "Unknown user id")
    )
)]
pub async fn update_preferences(
    store: web::Data<Arc<ContentStore>>,
    id: web::Path<Uuid>,
    prefs: web::Json<UserPreferences>,
) -> Result<HttpResponse> {
    let user = store
        .update_user_preferences(*id, prefs.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}
