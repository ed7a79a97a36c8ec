use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::auth::jwt::create_access_token;
use crate::auth::middleware::AuthUser;
use crate::dto::{LoginRequest, LoginResponse, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::models::user::UserProfile;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Unknown username and wrong password are indistinguishable to the client.
    let user = state
        .store
        .find_user_by_username(&body.username)
        .await
        .ok_or(AppError::Unauthorized)?;

    if user.password != body.password {
        return Err(AppError::Unauthorized);
    }

    let access_token = create_access_token(user.id, &user.username, &state.config)?;
    state.sessions.insert(&access_token, user.id).await;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        expires_in: state.config.jwt_access_ttl_secs,
        user: user.into(),
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<MessageResponse>> {
    state.sessions.remove(&auth_user.token).await;

    tracing::info!(user_id = %auth_user.id, "User logged out");

    Ok(Json(MessageResponse {
        message: "Logged out".into(),
    }))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<UserProfile>> {
    let user = state
        .store
        .get_user(auth_user.id)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(user.into()))
}
