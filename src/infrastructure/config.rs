//! Configuration document and profile storage
//!
//! All profiles live in one TOML document under a `profiles` table. Loading
//! never fails: read or parse problems are logged and the built-in default
//! bundle is used instead. Saving is best-effort in the same way, with
//! `try_save` available for callers that need to know.

use crate::domain::ProfileConfig;
use crate::error::{ConfessorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Name of the profile used when none is given
pub const DEFAULT_PROFILE: &str = "default";

/// The whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

impl ConfigDocument {
    /// Document written on first use: just the default profile
    pub fn bootstrap() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(DEFAULT_PROFILE.to_string(), ProfileConfig::default());
        ConfigDocument { profiles }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ConfessorError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Profile storage backed by the configuration document
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        ConfigStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the bootstrap document if no configuration exists yet
    fn ensure_document(&self) -> Result<()> {
        if !self.path.exists() {
            info!("Creating default configuration at {}", self.path.display());
            ConfigDocument::bootstrap().write(&self.path)?;
        }
        Ok(())
    }

    /// Read the document, treating a missing file as empty
    fn read_document(&self) -> Result<ConfigDocument> {
        if self.path.exists() {
            ConfigDocument::read(&self.path)
        } else {
            Ok(ConfigDocument::default())
        }
    }

    /// Load a profile, falling back to the default bundle on any failure
    pub fn load(&self, name: &str) -> ProfileConfig {
        match self.try_load(name) {
            Ok(profile) => profile,
            Err(e) => {
                error!("Error loading config: {}", e);
                ProfileConfig::default()
            }
        }
    }

    /// Load a profile, reporting read and parse failures.
    ///
    /// A profile missing from a readable document still yields the default
    /// bundle; it is not created.
    pub fn try_load(&self, name: &str) -> Result<ProfileConfig> {
        self.ensure_document()?;
        let mut document = ConfigDocument::read(&self.path)?;

        match document.profiles.remove(name) {
            Some(profile) => Ok(profile),
            None => {
                debug!("Profile '{}' not configured, using defaults", name);
                Ok(ProfileConfig::default())
            }
        }
    }

    /// Store a profile, logging instead of returning any failure
    pub fn save(&self, profile: &ProfileConfig, name: &str) {
        if let Err(e) = self.try_save(profile, name) {
            error!("Error saving config: {}", e);
        }
    }

    /// Replace the stored bundle for `name`, keeping every other profile
    pub fn try_save(&self, profile: &ProfileConfig, name: &str) -> Result<()> {
        let mut document = self.read_document()?;
        document.profiles.insert(name.to_string(), profile.clone());
        document.write(&self.path)?;
        debug!("Saved profile '{}'", name);
        Ok(())
    }

    /// Add a profile seeded with the default bundle
    pub fn create_profile(&self, name: &str) -> Result<()> {
        self.ensure_document()?;
        let mut document = ConfigDocument::read(&self.path)?;

        if document.profiles.contains_key(name) {
            return Err(ConfessorError::ProfileAlreadyExists(name.to_string()));
        }

        document
            .profiles
            .insert(name.to_string(), ProfileConfig::default());
        document.write(&self.path)?;
        info!("Created profile '{}'", name);
        Ok(())
    }

    pub fn delete_profile(&self, name: &str) -> Result<()> {
        if !self.path.exists() {
            return Err(ConfessorError::ProfileNotFound(name.to_string()));
        }

        let mut document = ConfigDocument::read(&self.path)?;
        if document.profiles.remove(name).is_none() {
            return Err(ConfessorError::ProfileNotFound(name.to_string()));
        }

        document.write(&self.path)?;
        info!("Deleted profile '{}'", name);
        Ok(())
    }

    /// Append a question to a profile's language/mode bucket.
    ///
    /// A reserved language code is refused before anything is written.
    pub fn add_question(&self, name: &str, lang: &str, mode: &str, question: &str) -> Result<()> {
        let mut profile = self.load(name);
        profile.add_question(lang, mode, question)?;
        self.save(&profile, name);
        info!(
            "Added question to profile '{}' ({}/{}): {}",
            name, lang, mode, question
        );
        Ok(())
    }

    pub fn list_questions(&self, name: &str, lang: &str, mode: &str) -> Vec<String> {
        self.load(name).questions(lang, mode).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> ConfigStore {
        ConfigStore::new(temp.path().join("config.toml"))
    }

    #[test]
    fn test_load_bootstraps_missing_document() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        let profile = store.load(DEFAULT_PROFILE);
        assert_eq!(profile, ProfileConfig::default());
        assert!(store.path().exists());

        let document = ConfigDocument::read(store.path()).unwrap();
        assert_eq!(document.profiles.len(), 1);
        let default = &document.profiles[DEFAULT_PROFILE];
        assert_eq!(default.languages.len(), 2);
        for modes in default.languages.values() {
            assert_eq!(modes.len(), 2);
            assert!(modes.values().all(|questions| questions.len() == 3));
        }
    }

    #[test]
    fn test_load_unknown_profile_returns_defaults_without_creating() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        let profile = store.load("nobody");
        assert_eq!(profile, ProfileConfig::default());

        let document = ConfigDocument::read(store.path()).unwrap();
        assert!(!document.profiles.contains_key("nobody"));
    }

    #[test]
    fn test_load_malformed_document_falls_back() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        fs::write(store.path(), "profiles = [[[ not toml").unwrap();

        assert_eq!(store.load(DEFAULT_PROFILE), ProfileConfig::default());
        assert!(store.try_load(DEFAULT_PROFILE).is_err());
    }

    #[test]
    fn test_save_keeps_other_profiles() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.create_profile("work").unwrap();

        let mut profile = store.load("work");
        profile.templates.report = "{content}".to_string();
        store.save(&profile, "work");

        let document = ConfigDocument::read(store.path()).unwrap();
        assert!(document.profiles.contains_key(DEFAULT_PROFILE));
        assert_eq!(document.profiles["work"].templates.report, "{content}");
    }

    #[test]
    fn test_save_failure_is_silent() {
        let temp = TempDir::new().unwrap();
        // The parent is a file, so the document can never be written
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = ConfigStore::new(blocker.join("config.toml"));

        store.save(&ProfileConfig::default(), DEFAULT_PROFILE);
        assert!(store
            .try_save(&ProfileConfig::default(), DEFAULT_PROFILE)
            .is_err());
    }

    #[test]
    fn test_create_profile_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store.create_profile("work").unwrap();
        let after_first = fs::read_to_string(store.path()).unwrap();

        let result = store.create_profile("work");
        assert!(matches!(
            result,
            Err(ConfessorError::ProfileAlreadyExists(ref name)) if name == "work"
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), after_first);
    }

    #[test]
    fn test_delete_profile() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.create_profile("work").unwrap();

        store.delete_profile("work").unwrap();
        let document = ConfigDocument::read(store.path()).unwrap();
        assert!(!document.profiles.contains_key("work"));
        assert!(document.profiles.contains_key(DEFAULT_PROFILE));
    }

    #[test]
    fn test_delete_missing_profile_fails() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        // No document at all
        assert!(matches!(
            store.delete_profile("work"),
            Err(ConfessorError::ProfileNotFound(_))
        ));

        store.load(DEFAULT_PROFILE);
        let before = fs::read_to_string(store.path()).unwrap();
        assert!(matches!(
            store.delete_profile("work"),
            Err(ConfessorError::ProfileNotFound(_))
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_add_then_list_questions() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        let before = store.list_questions(DEFAULT_PROFILE, "en", "confession");

        store
            .add_question(DEFAULT_PROFILE, "en", "confession", "New Q?")
            .unwrap();

        let after = store.list_questions(DEFAULT_PROFILE, "en", "confession");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().map(String::as_str), Some("New Q?"));
    }

    #[test]
    fn test_add_question_new_bucket_and_unicode() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store
            .add_question(DEFAULT_PROFILE, "ru", "сон", "Что тебе снилось?")
            .unwrap();
        assert_eq!(
            store.list_questions(DEFAULT_PROFILE, "ru", "сон"),
            vec!["Что тебе снилось?".to_string()]
        );
        // Existing buckets untouched
        assert_eq!(store.list_questions(DEFAULT_PROFILE, "ru", "confession").len(), 3);
    }

    #[test]
    fn test_reserved_language_keeps_document_readable() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.create_profile("work").unwrap();
        store
            .add_question("work", "en", "confession", "Kept?")
            .unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        for lang in ["templates", "appearance"] {
            let result = store.add_question(DEFAULT_PROFILE, lang, "report", "x");
            assert!(matches!(result, Err(ConfessorError::ReservedLanguage(_))));
        }

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
        let document = ConfigDocument::read(store.path()).unwrap();
        assert_eq!(
            document.profiles["work"].questions("en", "confession").last(),
            Some(&"Kept?".to_string())
        );
        assert_eq!(
            store.list_questions("work", "en", "confession").last().map(String::as_str),
            Some("Kept?")
        );
    }
}
