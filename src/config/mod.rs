use crate::errors::{AppError, AppResult};
use crate::settings::{GlobalSettings, SettingsHost};
use crate::store::RetentionPolicy;
use crate::store::retention::DEFAULT_MAX_RECORDS;
use crate::store::session_log::DEFAULT_DISPLAY_LIMIT;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The application's settings file. Host-level keys are named fields; every
/// feature fragment (including `sessionLog`) lives in `features`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_max_records")]
    pub max_records: usize,
    /// When set, retention is by age instead of by count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_days: Option<u32>,
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    #[serde(flatten)]
    pub features: GlobalSettings,

    /// File this config was read from and is saved back to.
    #[serde(skip)]
    path: Option<PathBuf>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_max_records() -> usize {
    DEFAULT_MAX_RECORDS
}
fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            max_records: default_max_records(),
            max_age_days: None,
            display_limit: default_display_limit(),
            features: GlobalSettings::new(),
            path: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sessionlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sessionlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sessionlog.sqlite")
    }

    /// Load configuration from `path`, or defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str(&content)
                    .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
            }
        } else {
            Config::default()
        };

        cfg.path = Some(path.to_path_buf());
        Ok(cfg)
    }

    /// Where `save` writes to.
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(Self::config_file)
    }

    /// Write the whole settings blob back to disk.
    pub fn save(&self) -> AppResult<()> {
        let path = self.path();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn retention_policy(&self) -> RetentionPolicy {
        match self.max_age_days {
            Some(days) => RetentionPolicy::MaxAgeDays(days),
            None => RetentionPolicy::MaxRecords(self.max_records),
        }
    }

    /// Create the config file (if missing) and pick the database location.
    ///
    /// A relative `custom_db` is placed next to the config file, as is the
    /// default database of a brand-new config.
    pub fn init_all(config_path: &Path, custom_db: Option<&str>) -> AppResult<Self> {
        let existed = config_path.exists();
        let mut cfg = Self::load_from(config_path)?;
        let dir = config_path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);

        match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                let db_path = if p.is_absolute() { p } else { dir.join(p) };
                cfg.database = db_path.to_string_lossy().to_string();
            }
            // fresh settings file: keep the database beside it
            None if !existed => {
                cfg.database = dir.join("sessionlog.sqlite").to_string_lossy().to_string();
            }
            None => {}
        }

        cfg.save()?;
        success(format!("Config file: {}", cfg.path().display()));

        if let Some(db_dir) = cfg.database_path().parent()
            && !db_dir.as_os_str().is_empty()
        {
            fs::create_dir_all(db_dir)?;
        }

        Ok(cfg)
    }
}

impl SettingsHost for Config {
    fn global_settings_mut(&mut self) -> &mut GlobalSettings {
        &mut self.features
    }

    fn save_all_settings(&mut self) -> AppResult<()> {
        self.save()
    }
}
