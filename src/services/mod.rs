pub mod insights;
pub mod sheets;
