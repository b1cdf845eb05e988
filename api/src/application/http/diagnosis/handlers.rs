pub mod clear_history;
pub mod diagnose;
pub mod get_answers;
pub mod get_storage;
pub mod get_submissions;
pub mod query_symptoms;
