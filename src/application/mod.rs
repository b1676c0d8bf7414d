//! Application layer - Use cases and orchestration

pub mod build_reports;
pub mod manage_profiles;
pub mod run_session;

pub use build_reports::ReportService;
pub use manage_profiles::ProfileService;
pub use run_session::{ask_questions, SessionService};
