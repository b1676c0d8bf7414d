//! Location of the files confessor reads and writes

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the workspace directory
pub const HOME_ENV: &str = "CONFESSOR_HOME";

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "confessor.db";
const LOG_FILE: &str = "confessor-notebook.log";

/// Directory holding the configuration document, record database and log
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Resolve the workspace: explicit path first, then CONFESSOR_HOME,
    /// then the current directory
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Workspace::new(path));
        }

        if let Some(path) = std::env::var_os(HOME_ENV) {
            if !path.is_empty() {
                return Ok(Workspace::new(PathBuf::from(path)));
            }
        }

        Ok(Workspace::new(std::env::current_dir()?))
    }

    /// Create the workspace directory if it does not exist yet
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn database_path(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }
}
