use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::cli::{Cli, Commands, ConfigCommands, SettingKey};
use crate::config::{Config, LoadedConfig};
use crate::core::{DateFormat, IsoDate, SectionConfig, extract, locate};
use crate::error::AppError;
use crate::output::{
    format_extract, format_locate, format_rollover, output_config_json, output_extract_json,
    output_locate_json, output_rollover_json,
};
use crate::rollover::{RolloverContext, on_note_created, prepare};
use crate::utils::{Timezone, parse_date};
use crate::vault::{FsVault, Note, daily_notes};
use crate::watch::watch_vault;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    /// Settings after merging CLI over config over defaults
    pub(crate) settings: Config,
    pub(crate) timezone: Timezone,
    pub(crate) today_override: Option<NaiveDate>,
    pub(crate) format: &'a dyn DateFormat,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli) -> Result<Self, AppError> {
        Ok(Self {
            cli,
            settings: cli.effective_config(),
            timezone: Timezone::parse(cli.timezone.as_deref())?,
            today_override: cli.today.as_deref().map(parse_date).transpose()?,
            format: &IsoDate,
        })
    }

    /// Today's date, re-evaluated on every call unless pinned with --today
    pub(crate) fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| self.timezone.today(Utc::now()))
    }

    fn rollover_context<'s>(&'s self, section: &'s SectionConfig) -> RolloverContext<'s> {
        RolloverContext {
            today: self.today(),
            section,
            window: self.settings.search_window(),
            format: self.format,
            quiet: self.cli.quiet,
        }
    }

    fn open_vault(&self) -> Result<FsVault, AppError> {
        FsVault::open(self.cli.vault_dir())
    }
}

/// Dispatch the parsed command
pub(crate) fn run(cli: &Cli, loaded: LoadedConfig) -> Result<(), AppError> {
    let ctx = CommandContext::new(cli)?;
    match &cli.command {
        None | Some(Commands::Watch) => handle_watch(&ctx),
        Some(Commands::Rollover { force, dry_run }) => handle_rollover(&ctx, *force, *dry_run),
        Some(Commands::Locate) => handle_locate(&ctx),
        Some(Commands::Extract { file }) => handle_extract(&ctx, file),
        Some(Commands::Config { command }) => handle_config(&ctx, command.as_ref(), loaded),
    }
}

fn handle_watch(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let vault = ctx.open_vault()?;
    let section = ctx.settings.section();
    if !ctx.cli.quiet {
        eprintln!(
            "Watching {} for new daily notes (Ctrl-C to stop)",
            vault.root().display()
        );
    }

    watch_vault(&vault, |note: &Note| {
        let rollover = ctx.rollover_context(&section);
        match on_note_created(&vault, note, &rollover) {
            Ok(Some(carryover)) => {
                if ctx.cli.json {
                    match output_rollover_json(&note.path, true, true, Some(&carryover)) {
                        Ok(json) => println!("{json}"),
                        Err(e) => log::error!("{e}"),
                    }
                } else {
                    println!("{}", format_rollover(&note.path, &carryover));
                }
            }
            Ok(None) => {}
            Err(e) => log::error!("Failed to carry tasks into {}: {e}", note.path.display()),
        }
    })
}

fn handle_rollover(ctx: &CommandContext<'_>, force: bool, dry_run: bool) -> Result<(), AppError> {
    let vault = ctx.open_vault()?;
    let section = ctx.settings.section();
    let rollover = ctx.rollover_context(&section);
    let basename = ctx.format.format(rollover.today);
    let path = vault.note_path(&basename);

    if dry_run {
        let carryover = prepare(&vault, &rollover)?;
        if ctx.cli.json {
            println!("{}", output_rollover_json(&path, false, false, Some(&carryover))?);
        } else {
            print!("{}", carryover.block);
        }
        return Ok(());
    }

    let created = vault.create(&path)?;
    if !created && !force {
        if ctx.cli.json {
            println!("{}", output_rollover_json(&path, false, false, None)?);
        } else if !ctx.cli.quiet {
            eprintln!(
                "{} already exists; use --force to append anyway",
                path.display()
            );
        }
        return Ok(());
    }

    let note = Note { basename, path };
    let carryover = on_note_created(&vault, &note, &rollover)?;
    if ctx.cli.json {
        println!(
            "{}",
            output_rollover_json(&note.path, created, carryover.is_some(), carryover.as_ref())?
        );
    } else if let Some(carryover) = &carryover {
        println!("{}", format_rollover(&note.path, carryover));
    }
    Ok(())
}

fn handle_locate(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let vault = ctx.open_vault()?;
    let today = ctx.today();
    let window = ctx.settings.search_window();
    let candidates = daily_notes(&vault, ctx.format)?;
    let located = locate(today, &candidates, window, ctx.format);

    if ctx.cli.json {
        println!("{}", output_locate_json(today, window, located.note())?);
    } else {
        println!("{}", format_locate(today, window, located.note()));
    }
    Ok(())
}

fn handle_extract(ctx: &CommandContext<'_>, file: &Path) -> Result<(), AppError> {
    let text = fs::read_to_string(file).map_err(|e| AppError::io("read", file, e))?;
    let section = ctx.settings.section();
    let tasks = extract(&text, &section);

    if ctx.cli.json {
        println!("{}", output_extract_json(file, &section, &tasks)?);
    } else {
        println!("{}", format_extract(&section, &tasks));
    }
    Ok(())
}

fn handle_config(
    ctx: &CommandContext<'_>,
    command: Option<&ConfigCommands>,
    loaded: LoadedConfig,
) -> Result<(), AppError> {
    match command {
        None | Some(ConfigCommands::Show) => {
            if ctx.cli.json {
                println!("{}", output_config_json(&ctx.settings, loaded.path.as_deref())?);
            } else {
                print!("{}", toml::to_string_pretty(&ctx.settings)?);
            }
        }
        Some(ConfigCommands::Set { key, value }) => {
            let path = loaded.path.ok_or(AppError::NoConfigPath)?;
            if loaded.unreadable {
                return Err(AppError::InvalidConfig { path });
            }
            let mut config = loaded.config;
            apply_setting(&mut config, *key, value)?;
            config.save(&path)?;
            if !ctx.cli.quiet {
                eprintln!("Saved {} to {}", key.label(), path.display());
            }
        }
        Some(ConfigCommands::Path) => match loaded.path {
            Some(path) => println!("{}", path.display()),
            None => return Err(AppError::NoConfigPath),
        },
    }
    Ok(())
}

/// Update one persisted setting from its command-line text
pub(crate) fn apply_setting(config: &mut Config, key: SettingKey, value: &str) -> Result<(), AppError> {
    let invalid = || AppError::InvalidSetting {
        key: key.label(),
        value: value.to_string(),
    };
    match key {
        SettingKey::SectionName => config.name_of_section = value.to_string(),
        SettingKey::SectionPrefix => config.section_prefix = value.to_string(),
        SettingKey::LookbackDays => {
            config.lookback_days = value.trim().parse::<u32>().map_err(|_| invalid())?;
        }
        SettingKey::Timezone => {
            Timezone::parse(Some(value))?;
            let trimmed = value.trim();
            config.timezone = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        SettingKey::Vault => {
            if value.trim().is_empty() {
                return Err(invalid());
            }
            config.vault = Some(PathBuf::from(value));
        }
    }
    Ok(())
}
