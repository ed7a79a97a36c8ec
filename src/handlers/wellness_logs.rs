use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::dto::{CreateWellnessLogRequest, WellnessLogQuery};
use crate::error::{AppError, AppResult};
use crate::models::wellness_log::{NewWellnessLog, WellnessLog};
use crate::AppState;

pub async fn create_wellness_log(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateWellnessLogRequest>,
) -> AppResult<Json<WellnessLog>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let log_date = body.log_date.unwrap_or_else(|| Utc::now().date_naive());

    let log = state
        .store
        .append_log(NewWellnessLog {
            user_id: auth_user.id,
            date: log_date,
            sleep_quality: body.sleep_quality,
            soreness: body.soreness,
            stiffness: body.stiffness,
            fatigue: body.fatigue,
            notes: body.notes,
        })
        .await;

    tracing::debug!(user_id = %auth_user.id, date = %log_date, "Wellness log recorded");

    Ok(Json(log))
}

pub async fn list_wellness_logs(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<WellnessLogQuery>,
) -> AppResult<Json<Vec<WellnessLog>>> {
    let mut logs = state.store.logs_for_user(auth_user.id).await;

    if let Some(start) = query.start_date {
        logs.retain(|l| l.date >= start);
    }
    if let Some(end) = query.end_date {
        logs.retain(|l| l.date <= end);
    }

    // Most recent first for the history view.
    logs.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(logs))
}
