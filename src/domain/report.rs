//! Report building: full per-record reports and the condensed weekly view

use crate::domain::locale::Locale;
use crate::domain::record::{Answers, Record};
use crate::domain::template::Template;
use crate::error::Result;

/// Number of question/answer pairs shown per record in the weekly summary
pub const SUMMARY_PAIRS: usize = 2;

const SUMMARY_SEPARATOR: &str = " | ";

/// Render one record's answers through a report template.
///
/// Each pair becomes a question line, an answer line and a blank line,
/// in the order the questions were asked.
pub fn build_report(answers: &Answers, lang: &str, template: &str) -> Result<String> {
    let title = Locale::from_code(lang).report_title();

    let mut content = String::new();
    for (question, answer) in answers.iter() {
        content.push_str(question);
        content.push('\n');
        content.push_str(answer);
        content.push_str("\n\n");
    }

    Template::new(template).render(title, &content)
}

/// One row of the weekly summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub timestamp: String,
    pub mode: String,
    pub summary: String,
}

/// Condensed view over a set of records, one row per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummary {
    pub rows: Vec<SummaryRow>,
}

impl WeeklySummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the weekly table, keeping the records' order
pub fn build_weekly_summary(records: &[Record]) -> WeeklySummary {
    let rows = records
        .iter()
        .map(|record| SummaryRow {
            timestamp: record.timestamp_string(),
            mode: record.mode.clone(),
            summary: summarize(&record.answers),
        })
        .collect();

    WeeklySummary { rows }
}

fn summarize(answers: &Answers) -> String {
    answers
        .iter()
        .take(SUMMARY_PAIRS)
        .map(|(question, answer)| format!("{}: {}", question, answer))
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}
