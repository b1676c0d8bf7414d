//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod record_store;
pub mod terminal;
pub mod workspace;

pub use config::{ConfigDocument, ConfigStore, DEFAULT_PROFILE};
pub use logging::init_file_logging;
pub use record_store::{RecordStore, SqliteRecordStore};
pub use terminal::{MessageKind, Presenter, Prompter, TerminalPresenter, TerminalPrompter};
pub use workspace::Workspace;
