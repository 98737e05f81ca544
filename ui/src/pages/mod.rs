//! Routed pages

pub mod create_quiz;
pub mod home;
pub mod login;
pub mod not_found;
pub mod quiz_results;
pub mod results;
pub mod student_dashboard;
