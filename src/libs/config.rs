//! Application configuration.
//!
//! Stored as pretty-printed JSON (`config.json`) in the data directory. A
//! missing file is not an error: every section falls back to its defaults,
//! so the tool works without running `init` first.
//!
//! ```rust,no_run
//! use studytrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! let countdown = config.countdown.unwrap_or_default();
//! println!("counting down to {}", countdown.target);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::countdown::{CountdownConfig, TARGET_FORMAT};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<CountdownConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(config_file_path)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        if let Some(countdown) = &config.countdown {
            countdown.validate()?;
        }
        Ok(config)
    }

    /// Like [`Config::read_from`], but an unreadable file is reported and replaced by defaults.
    pub fn read_or_default<P: AsRef<Path>>(path: P) -> Config {
        match Self::read_from(path) {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(Message::ConfigUnreadable(e.to_string()));
                Config::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(config_file_path)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `true` if one existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config = Self::read_or_default(config_file_path);
        let default = config.countdown.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleCountdown);
        let target: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCountdownTarget.to_string())
            .default(default.target.format(TARGET_FORMAT).to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                NaiveDateTime::parse_from_str(input, TARGET_FORMAT)
                    .map(|_| ())
                    .map_err(|_| Message::InvalidCountdownTarget.to_string())
            })
            .interact_text()?;

        let countdown = CountdownConfig {
            target: NaiveDateTime::parse_from_str(&target, TARGET_FORMAT)?,

            // First hour of the day that counts as study time
            effective_start_hour: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEffectiveStartHour.to_string())
                .default(default.effective_start_hour)
                .interact_text()?,

            effective_end_hour: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEffectiveEndHour.to_string())
                .default(default.effective_end_hour)
                .interact_text()?,
        };
        countdown.validate()?;
        config.countdown = Some(countdown);

        Ok(config)
    }
}
