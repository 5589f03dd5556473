use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Vault directory not found: {}", path.display())]
    VaultNotFound { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value \"{value}\" for {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("Config file {} could not be parsed; fix it before changing settings", path.display())]
    InvalidConfig { path: PathBuf },

    #[error("No writable config location (set --config)")]
    NoConfigPath,

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),
}

impl AppError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_io_names_action_and_path() {
        let e = AppError::io(
            "append to",
            "/vault/2024-03-10.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            e.to_string(),
            "Failed to append to /vault/2024-03-10.md: denied"
        );
    }

    #[test]
    fn app_error_display_invalid_setting() {
        let e = AppError::InvalidSetting {
            key: "lookback-days",
            value: "-3".to_string(),
        };
        assert_eq!(e.to_string(), r#"Invalid value "-3" for lookback-days"#);
    }

    #[test]
    fn app_error_display_vault_missing() {
        let e = AppError::VaultNotFound {
            path: PathBuf::from("/nowhere"),
        };
        assert_eq!(e.to_string(), "Vault directory not found: /nowhere");
    }

    #[test]
    fn app_error_display_invalid_config() {
        let e = AppError::InvalidConfig {
            path: PathBuf::from("/home/me/.unfinished.toml"),
        };
        assert_eq!(
            e.to_string(),
            "Config file /home/me/.unfinished.toml could not be parsed; fix it before changing settings"
        );
    }
}
