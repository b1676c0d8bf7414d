//! Profile and question administration use case

use crate::error::Result;
use crate::infrastructure::ConfigStore;

/// Service for managing profiles and their question sets
pub struct ProfileService {
    config: ConfigStore,
}

impl ProfileService {
    pub fn new(config: ConfigStore) -> Self {
        ProfileService { config }
    }

    /// Add a profile seeded with the default questions
    pub fn create(&self, name: &str) -> Result<()> {
        self.config.create_profile(name)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.config.delete_profile(name)
    }

    /// Append a question to the end of a language/mode bucket
    pub fn add_question(&self, profile: &str, lang: &str, mode: &str, question: &str) -> Result<()> {
        self.config.add_question(profile, lang, mode, question)
    }

    pub fn list_questions(&self, profile: &str, lang: &str, mode: &str) -> Vec<String> {
        self.config.list_questions(profile, lang, mode)
    }
}
