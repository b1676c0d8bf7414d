//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "confessor")]
#[command(about = "Guided journaling with confession and meditation prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml, the record database and the log
    /// (default: $CONFESSOR_HOME, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer today's questions and save the record
    Run {
        /// Session mode (confession or meditation)
        #[arg(short, long, default_value = "confession")]
        mode: String,

        /// Language code (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Profile name
        #[arg(short, long, default_value = "default")]
        profile: String,
    },

    /// Show saved records
    Report {
        /// Show the condensed weekly table instead of full reports
        #[arg(short, long)]
        week: bool,

        /// Language code (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Profile name
        #[arg(short, long, default_value = "default")]
        profile: String,
    },

    /// Add a question to a profile
    AddQuestion {
        /// Language code (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Session mode (confession or meditation)
        #[arg(short, long, default_value = "confession")]
        mode: String,

        /// Profile name
        #[arg(short, long, default_value = "default")]
        profile: String,

        /// Question text
        question: String,
    },

    /// List the questions of a profile
    ListQuestions {
        /// Language code (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Session mode (confession or meditation)
        #[arg(short, long, default_value = "confession")]
        mode: String,

        /// Profile name
        #[arg(short, long, default_value = "default")]
        profile: String,
    },

    /// Create a profile with the default questions
    AddProfile {
        /// Name of the new profile
        profile: String,

        /// Language of the messages (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Delete a profile
    RemoveProfile {
        /// Name of the profile to remove
        profile: String,

        /// Language of the messages (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Synchronize records with the cloud (not implemented)
    Sync {
        /// Language of the messages (en or ru)
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
}

impl Commands {
    /// Language code the command's messages should use
    pub fn lang(&self) -> &str {
        match self {
            Commands::Run { lang, .. }
            | Commands::Report { lang, .. }
            | Commands::AddQuestion { lang, .. }
            | Commands::ListQuestions { lang, .. }
            | Commands::AddProfile { lang, .. }
            | Commands::RemoveProfile { lang, .. }
            | Commands::Sync { lang } => lang,
        }
    }
}
