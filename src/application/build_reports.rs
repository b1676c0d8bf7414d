//! Report rendering use case

use crate::domain::{build_report, build_weekly_summary, Record, WeeklySummary};
use crate::error::{ConfessorError, Result};
use crate::infrastructure::{ConfigStore, RecordStore};
use tracing::debug;

/// Service turning stored records into reports
pub struct ReportService<S: RecordStore> {
    config: ConfigStore,
    records: S,
}

impl<S: RecordStore> ReportService<S> {
    pub fn new(config: ConfigStore, records: S) -> Self {
        ReportService { config, records }
    }

    /// Render a single record with its profile's report template
    pub fn render_record(&self, record: &Record) -> Result<String> {
        let config = self.config.load(&record.profile);
        build_report(&record.answers, &record.lang, config.report_template())
    }

    /// One rendered report per record, newest first
    pub fn detailed(&self, profile: &str, lang: &str) -> Result<Vec<String>> {
        let records = self.fetch_non_empty(profile, lang)?;
        let config = self.config.load(profile);
        let template = config.report_template();

        records
            .iter()
            .map(|record| build_report(&record.answers, lang, template))
            .collect()
    }

    /// Condensed one-row-per-record view, newest first
    pub fn weekly(&self, profile: &str, lang: &str) -> Result<WeeklySummary> {
        let records = self.fetch_non_empty(profile, lang)?;
        Ok(build_weekly_summary(&records))
    }

    fn fetch_non_empty(&self, profile: &str, lang: &str) -> Result<Vec<Record>> {
        self.records.init()?;
        let records = self.records.fetch(profile, lang)?;
        debug!("Rendering {} records", records.len());

        if records.is_empty() {
            return Err(ConfessorError::NoRecordsFound {
                profile: profile.to_string(),
                lang: lang.to_string(),
            });
        }
        Ok(records)
    }
}
