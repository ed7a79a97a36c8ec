use axum::{extract::State, Extension, Json};

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::services::insights::{generate_insights, Insight};
use crate::AppState;

/// Recomputes trend insights from the caller's logs on every request; the
/// engine handles ordering and windowing itself, so the store's row order
/// does not matter here.
pub async fn get_insights(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Insight>>> {
    let logs = state.store.logs_for_user(auth_user.id).await;
    let insights = generate_insights(&logs);

    tracing::debug!(
        user_id = %auth_user.id,
        log_count = logs.len(),
        "Generated wellness insights"
    );

    Ok(Json(insights))
}
