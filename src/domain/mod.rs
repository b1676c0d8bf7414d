//! Domain layer - Business rules and domain models

pub mod locale;
pub mod profile;
pub mod record;
pub mod report;
pub mod template;
pub mod validator;

pub use locale::Locale;
pub use profile::{Appearance, ProfileConfig, Templates, DEFAULT_REPORT_TEMPLATE};
pub use record::{Answers, Record, TIMESTAMP_FORMAT};
pub use report::{build_report, build_weekly_summary, SummaryRow, WeeklySummary};
pub use template::Template;
pub use validator::{validate_answer, AnswerValidator, WordingValidator};
