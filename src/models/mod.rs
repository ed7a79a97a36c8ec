pub mod user;
pub mod wellness_log;
