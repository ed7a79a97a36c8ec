use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One daily self-assessment row in the `WellnessLogs` sheet.
///
/// Metric ratings are 1..=10 at the submission boundary. Higher
/// `sleep_quality` is better; higher `soreness`, `stiffness` and `fatigue`
/// are worse. The insight engine does not re-validate ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub sleep_quality: i32,
    pub soreness: i32,
    pub stiffness: i32,
    pub fatigue: i32,
    pub notes: Option<String>,
}

/// A log as submitted, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewWellnessLog {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub sleep_quality: i32,
    pub soreness: i32,
    pub stiffness: i32,
    pub fatigue: i32,
    pub notes: Option<String>,
}
