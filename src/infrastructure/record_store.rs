//! Persistence of completed journal records
//!
//! Records go into a single SQLite table, `entries`. Every operation opens
//! its own connection and closes it when done; nothing is held between calls.

use crate::domain::record::{parse_timestamp, Answers, Record};
use crate::error::Result;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage for journal records
pub trait RecordStore {
    /// Make sure the backing table exists. Safe to call on every run.
    fn init(&self) -> Result<()>;

    /// Append a record and return its newly assigned id
    fn insert(&self, record: &Record) -> Result<i64>;

    /// All records for a profile and language, most recent first
    fn fetch(&self, profile: &str, lang: &str) -> Result<Vec<Record>>;
}

/// SQLite-backed record store
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    path: PathBuf,
}

impl SqliteRecordStore {
    pub fn new(path: PathBuf) -> Self {
        SqliteRecordStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        debug!("Opening record database at {}", self.path.display());
        Ok(Connection::open(&self.path)?)
    }
}

impl RecordStore for SqliteRecordStore {
    fn init(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile TEXT NOT NULL,
                mode TEXT NOT NULL,
                lang TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                answers TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_entries_profile_lang
                ON entries(profile, lang, timestamp DESC);
            "#,
        )?;
        debug!("Record table ready");
        Ok(())
    }

    fn insert(&self, record: &Record) -> Result<i64> {
        let answers = record.answers.to_json()?;
        let conn = self.connect()?;

        conn.execute(
            r#"
            INSERT INTO entries (profile, mode, lang, timestamp, answers)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.profile,
                record.mode,
                record.lang,
                record.timestamp_string(),
                answers
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!(
            "Stored record {} (profile '{}', mode '{}', lang '{}')",
            id, record.profile, record.mode, record.lang
        );
        Ok(id)
    }

    fn fetch(&self, profile: &str, lang: &str) -> Result<Vec<Record>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT profile, mode, lang, timestamp, answers
            FROM entries
            WHERE profile = ?1 AND lang = ?2
            ORDER BY timestamp DESC
            "#,
        )?;

        let rows = stmt.query_map(params![profile, lang], |row| {
            let timestamp: String = row.get(3)?;
            let answers: String = row.get(4)?;
            Ok(Record {
                profile: row.get(0)?,
                mode: row.get(1)?,
                lang: row.get(2)?,
                timestamp: parse_timestamp(&timestamp).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?,
                answers: Answers::from_json(&answers).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?,
            })
        })?;

        let records = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(
            "Fetched {} records for profile '{}' and lang '{}'",
            records.len(),
            profile,
            lang
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> SqliteRecordStore {
        let store = SqliteRecordStore::new(temp.path().join("test.db"));
        store.init().unwrap();
        store
    }

    fn record(profile: &str, lang: &str, timestamp: &str, pairs: &[(&str, &str)]) -> Record {
        Record {
            profile: profile.to_string(),
            mode: "confession".to_string(),
            lang: lang.to_string(),
            timestamp: parse_timestamp(timestamp).unwrap(),
            answers: pairs.iter().copied().collect(),
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store.init().unwrap();
        store.init().unwrap();
    }

    #[test]
    fn test_insert_and_fetch_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let inserted = record(
            "default",
            "en",
            "2025-02-20 12:00:00",
            &[("Test question", "Test answer"), ("Как дела?", "Отлично")],
        );

        store.insert(&inserted).unwrap();

        let records = store.fetch("default", "en").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], inserted);
    }

    #[test]
    fn test_ids_increase() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let first = store
            .insert(&record("default", "en", "2025-02-20 12:00:00", &[]))
            .unwrap();
        let second = store
            .insert(&record("default", "en", "2025-02-19 12:00:00", &[]))
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_fetch_filters_by_profile_and_lang() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store
            .insert(&record("default", "en", "2025-02-20 12:00:00", &[("Q", "en")]))
            .unwrap();
        store
            .insert(&record("default", "ru", "2025-02-20 12:00:00", &[("Q", "ru")]))
            .unwrap();
        store
            .insert(&record("work", "en", "2025-02-20 12:00:00", &[("Q", "work")]))
            .unwrap();

        let records = store.fetch("default", "en").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answers.get("Q"), Some("en"));

        assert!(store.fetch("nobody", "en").unwrap().is_empty());
    }

    #[test]
    fn test_fetch_orders_newest_first() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        for timestamp in [
            "2025-02-18 09:00:00",
            "2025-02-20 08:00:00",
            "2025-02-19 23:59:59",
            "2025-02-20 07:30:00",
        ] {
            store
                .insert(&record("default", "en", timestamp, &[]))
                .unwrap();
        }

        let timestamps: Vec<String> = store
            .fetch("default", "en")
            .unwrap()
            .iter()
            .map(Record::timestamp_string)
            .collect();
        assert_eq!(
            timestamps,
            vec![
                "2025-02-20 08:00:00",
                "2025-02-20 07:30:00",
                "2025-02-19 23:59:59",
                "2025-02-18 09:00:00",
            ]
        );
    }

    #[test]
    fn test_answers_stored_as_readable_json() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store
            .insert(&record(
                "default",
                "ru",
                "2025-02-20 12:00:00",
                &[("Как прошел твой день?", "Хорошо")],
            ))
            .unwrap();

        let conn = Connection::open(store.path()).unwrap();
        let raw: String = conn
            .query_row("SELECT answers FROM entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, r#"{"Как прошел твой день?":"Хорошо"}"#);
    }

    #[test]
    fn test_fetch_without_init_fails() {
        let temp = TempDir::new().unwrap();
        let store = SqliteRecordStore::new(temp.path().join("missing.db"));
        assert!(store.fetch("default", "en").is_err());
    }
}
