//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Watch the vault and fill in today's note as soon as it is created (default)
    Watch,
    /// Create today's note if it is missing and carry unfinished tasks into it
    Rollover {
        /// Run even if today's note already exists, appending to it
        #[arg(short, long)]
        force: bool,
        /// Print what would be appended without touching the vault
        #[arg(long)]
        dry_run: bool,
    },
    /// Show which daily note tasks would be carried from
    Locate,
    /// List unfinished tasks in a note's task section
    Extract {
        /// Markdown file to read
        file: PathBuf,
    },
    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the effective settings (default)
    Show,
    /// Save one setting
    Set {
        #[arg(value_enum)]
        key: SettingKey,
        value: String,
    },
    /// Print the config file location
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SettingKey {
    /// Name of the section holding tasks, e.g. "Tasks"
    SectionName,
    /// Heading prefix before the name, e.g. "##"
    SectionPrefix,
    /// How many days back to look for the previous daily note
    LookbackDays,
    /// Zone used to decide what "today" is
    Timezone,
    /// Default vault directory
    Vault,
}

impl SettingKey {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SettingKey::SectionName => "section-name",
            SettingKey::SectionPrefix => "section-prefix",
            SettingKey::LookbackDays => "lookback-days",
            SettingKey::Timezone => "timezone",
            SettingKey::Vault => "vault",
        }
    }
}
