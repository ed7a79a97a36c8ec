//! Request/response DTOs for the API surface.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Validation is expressed via `validator` derive macros; handlers call
//!   `validate()` and map failures to 422

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserProfile;

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Auth
// ============================================================================

/// POST /api/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

// ============================================================================
// Wellness logs
// ============================================================================

/// POST /api/wellness-logs
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWellnessLogRequest {
    /// Defaults to today when omitted.
    pub log_date: Option<NaiveDate>,

    #[validate(range(min = 1, max = 10, message = "Sleep quality must be between 1 and 10"))]
    pub sleep_quality: i32,

    #[validate(range(min = 1, max = 10, message = "Soreness must be between 1 and 10"))]
    pub soreness: i32,

    #[validate(range(min = 1, max = 10, message = "Stiffness must be between 1 and 10"))]
    pub stiffness: i32,

    #[validate(range(min = 1, max = 10, message = "Fatigue must be between 1 and 10"))]
    pub fatigue: i32,

    #[validate(length(max = 2000, message = "Notes too long"))]
    pub notes: Option<String>,
}

/// GET /api/wellness-logs query params
#[derive(Debug, Deserialize)]
pub struct WellnessLogQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
