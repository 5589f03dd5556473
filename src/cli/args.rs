//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "unfinished")]
#[command(
    about = "Carry unfinished tasks from the previous daily note into today's note",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Vault directory (defaults to the configured vault, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) vault: Option<PathBuf>,

    /// Config file to read and write instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true, value_name = "DATE")]
    pub(crate) today: Option<String>,

    /// Timezone used to decide today's date (e.g., "Europe/Berlin", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Days to look back for the previous daily note
    #[arg(short, long, global = true, value_name = "DAYS")]
    pub(crate) lookback: Option<u32>,

    /// Name of the task section (e.g., "Tasks")
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) section_name: Option<String>,

    /// Heading prefix of the task section (e.g., "##")
    #[arg(long, global = true, value_name = "PREFIX")]
    pub(crate) section_prefix: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Suppress notices on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Log what is being done
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.vault.is_none() {
            self.vault = config.vault.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.lookback.is_none() {
            self.lookback = Some(config.lookback_days);
        }
        if self.section_name.is_none() {
            self.section_name = Some(config.name_of_section.clone());
        }
        if self.section_prefix.is_none() {
            self.section_prefix = Some(config.section_prefix.clone());
        }
        self
    }

    /// Settings after merging, for commands that work from a `Config`
    pub(crate) fn effective_config(&self) -> Config {
        let defaults = Config::default();
        Config {
            name_of_section: self
                .section_name
                .clone()
                .unwrap_or(defaults.name_of_section),
            section_prefix: self
                .section_prefix
                .clone()
                .unwrap_or(defaults.section_prefix),
            lookback_days: self.lookback.unwrap_or(defaults.lookback_days),
            timezone: self.timezone.clone(),
            vault: self.vault.clone(),
        }
    }

    pub(crate) fn vault_dir(&self) -> PathBuf {
        self.vault.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
