//! In-memory stand-in for the spreadsheet backend.
//!
//! The real deployment target is a Google Sheet with a `UserCredentials` tab
//! and a `WellnessLogs` tab; until that lands, this module keeps both tabs
//! behind an async lock and seeds the same demo rows the sheet would hold.
//! Callers must not rely on `logs_for_user` ordering; the insight engine
//! sorts for itself.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::user::User;
use crate::models::wellness_log::{NewWellnessLog, WellnessLog};

#[derive(Default)]
struct Sheets {
    credentials: Vec<User>,
    wellness_logs: Vec<WellnessLog>,
}

/// Cloneable handle to the shared mock sheet. All reads and writes take the
/// lock for the duration of one operation only.
#[derive(Clone, Default)]
pub struct SheetStore {
    inner: Arc<RwLock<Sheets>>,
}

impl SheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo credential and wellness rows.
    pub fn with_demo_data() -> Self {
        let john = seed_user("John Doe", "1990-01-01", "johndoe");
        let jane = seed_user("Jane Smith", "1985-05-15", "janesmith");

        let wellness_logs = vec![
            seed_log(&john, "2023-09-01", 7, 4, 3, 5, "Felt good overall"),
            seed_log(&john, "2023-09-02", 8, 3, 3, 4, "Better than yesterday"),
            seed_log(&john, "2023-09-03", 6, 5, 4, 6, "Tired after workout"),
            seed_log(&jane, "2023-09-01", 9, 2, 2, 3, "Great day"),
            seed_log(&jane, "2023-09-02", 7, 3, 4, 4, "Moderate stress"),
        ];

        Self {
            inner: Arc::new(RwLock::new(Sheets {
                credentials: vec![john, jane],
                wellness_logs,
            })),
        }
    }

    /// Case-insensitive username lookup, matching the sheet's behavior.
    pub async fn find_user_by_username(&self, username: &str) -> Option<User> {
        let sheets = self.inner.read().await;
        sheets
            .credentials
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned()
    }

    pub async fn get_user(&self, id: Uuid) -> Option<User> {
        let sheets = self.inner.read().await;
        sheets.credentials.iter().find(|u| u.id == id).cloned()
    }

    /// Append a log row, assigning a fresh id. No per-date dedup: a second
    /// submission for the same date becomes another row.
    pub async fn append_log(&self, new: NewWellnessLog) -> WellnessLog {
        let log = WellnessLog {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            date: new.date,
            sleep_quality: new.sleep_quality,
            soreness: new.soreness,
            stiffness: new.stiffness,
            fatigue: new.fatigue,
            notes: new.notes,
        };
        let mut sheets = self.inner.write().await;
        sheets.wellness_logs.push(log.clone());
        log
    }

    /// All rows for one user, in insertion order.
    pub async fn logs_for_user(&self, user_id: Uuid) -> Vec<WellnessLog> {
        let sheets = self.inner.read().await;
        sheets
            .wellness_logs
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// Demo password rule carried over from the credential sheet: first four
/// lowercase non-space characters of the name, then the last four digits of
/// the date of birth.
pub fn derive_demo_password(name: &str, dob: NaiveDate) -> String {
    let name_part: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .take(4)
        .collect();
    let dob_digits: String = dob
        .format("%Y-%m-%d")
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let dob_part = &dob_digits[dob_digits.len().saturating_sub(4)..];
    format!("{name_part}{dob_part}")
}

fn seed_user(name: &str, dob: &str, username: &str) -> User {
    let dob: NaiveDate = dob.parse().expect("seed DOB is valid");
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        name: name.to_string(),
        dob,
        password: derive_demo_password(name, dob),
    }
}

fn seed_log(
    user: &User,
    date: &str,
    sleep_quality: i32,
    soreness: i32,
    stiffness: i32,
    fatigue: i32,
    notes: &str,
) -> WellnessLog {
    WellnessLog {
        id: Uuid::new_v4(),
        user_id: user.id,
        date: date.parse().expect("seed date is valid"),
        sleep_quality,
        soreness,
        stiffness,
        fatigue,
        notes: Some(notes.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_passwords_follow_the_sheet_rule() {
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(derive_demo_password("John Doe", dob), "john0101");

        let dob = NaiveDate::from_ymd_opt(1985, 5, 15).unwrap();
        assert_eq!(derive_demo_password("Jane Smith", dob), "jane0515");
    }

    #[tokio::test]
    async fn username_lookup_is_case_insensitive() {
        let store = SheetStore::with_demo_data();
        let user = store.find_user_by_username("JohnDoe").await;
        assert_eq!(user.map(|u| u.username), Some("johndoe".to_string()));
        assert!(store.find_user_by_username("nobody").await.is_none());
    }

    #[tokio::test]
    async fn append_assigns_an_id_and_is_scoped_per_user() {
        let store = SheetStore::with_demo_data();
        let john = store.find_user_by_username("johndoe").await.unwrap();
        let jane = store.find_user_by_username("janesmith").await.unwrap();

        let created = store
            .append_log(NewWellnessLog {
                user_id: john.id,
                date: "2023-09-04".parse().unwrap(),
                sleep_quality: 7,
                soreness: 3,
                stiffness: 3,
                fatigue: 4,
                notes: None,
            })
            .await;

        let johns = store.logs_for_user(john.id).await;
        assert_eq!(johns.len(), 4);
        assert!(johns.iter().any(|l| l.id == created.id));
        assert_eq!(store.logs_for_user(jane.id).await.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_dates_append_another_row() {
        let store = SheetStore::with_demo_data();
        let john = store.find_user_by_username("johndoe").await.unwrap();
        for _ in 0..2 {
            store
                .append_log(NewWellnessLog {
                    user_id: john.id,
                    date: "2023-09-03".parse().unwrap(),
                    sleep_quality: 6,
                    soreness: 5,
                    stiffness: 4,
                    fatigue: 6,
                    notes: None,
                })
                .await;
        }
        assert_eq!(store.logs_for_user(john.id).await.len(), 5);
    }
}
