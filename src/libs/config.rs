//! Configuration management for trackscribe.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). The file holds the per-installation owner id that
//! partitions entries, the billing cycle settings, display precision, the
//! timer auto-start switch and the client list offered by the forms.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trackscribe::libs::config::Config;
//!
//! // Load existing configuration, creating the owner id on first run
//! let config = Config::read()?;
//!
//! // Run the interactive setup and persist it
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::billing::BillingConfig;
use super::data_storage::DataStorage;
use super::duration::DEFAULT_DECIMAL_PLACES;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_decimal_places() -> usize {
    DEFAULT_DECIMAL_PLACES
}

fn default_auto_start() -> bool {
    true
}

fn default_clients() -> Vec<String> {
    vec!["Mantis".to_string(), "Cricket".to_string()]
}

/// Root configuration object.
///
/// Missing fields fall back to their defaults, so configuration files written
/// by older versions keep loading.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Opaque per-installation id. Entries are listed for this owner only.
    #[serde(default)]
    pub owner_id: String,

    #[serde(default)]
    pub billing: BillingConfig,

    /// Decimal places for hour totals on the dashboard and in exports.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Start the countdown as soon as a full `HH:MM:SS` length is typed, and
    /// start Speaker Verification right after First Review.
    #[serde(default = "default_auto_start")]
    pub auto_start: bool,

    #[serde(default = "default_clients")]
    pub clients: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            owner_id: String::new(),
            billing: BillingConfig::default(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            auto_start: true,
            clients: default_clients(),
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, generating and saving
    /// an owner id when none exists yet.
    pub fn read() -> Result<Config> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        let mut config = if path.exists() {
            let config_str = fs::read_to_string(path)?;
            serde_json::from_str(&config_str)?
        } else {
            Config::default()
        };

        if config.owner_id.is_empty() {
            config.owner_id = uuid::Uuid::new_v4().to_string();
            tracing::debug!(owner_id = %config.owner_id, "generated owner id");
            config.save_to(path)?;
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.billing.validate()?;
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleBilling);
        let modes = [Message::BillingModeDayOfMonth.to_string(), Message::BillingModeRange.to_string()];
        let current_mode = match config.billing {
            BillingConfig::DayOfMonth { .. } => 0,
            BillingConfig::Range { .. } => 1,
        };
        let mode = Select::with_theme(&theme)
            .with_prompt(Message::PromptBillingMode.to_string())
            .items(&modes)
            .default(current_mode)
            .interact()?;

        config.billing = if mode == 0 {
            let default_day = match config.billing {
                BillingConfig::DayOfMonth { start_day } => start_day,
                BillingConfig::Range { .. } => super::billing::DEFAULT_START_DAY,
            };
            let start_day: u32 = Input::with_theme(&theme)
                .with_prompt(Message::PromptBillingStartDay.to_string())
                .default(default_day)
                .validate_with(|day: &u32| if (1..=31).contains(day) { Ok(()) } else { Err(Message::BillingStartDayRange.to_string()) })
                .interact_text()?;
            BillingConfig::DayOfMonth { start_day }
        } else {
            let start: NaiveDate = prompt_date(&theme, Message::PromptBillingRangeStart)?;
            let end: NaiveDate = prompt_date(&theme, Message::PromptBillingRangeEnd)?;
            BillingConfig::Range { start, end }
        };
        config.billing.validate()?;

        msg_print!(Message::ConfigModuleDisplay);
        config.decimal_places = Input::with_theme(&theme)
            .with_prompt(Message::PromptDecimalPlaces.to_string())
            .default(config.decimal_places)
            .interact_text()?;

        config.auto_start = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptAutoStart.to_string())
            .default(config.auto_start)
            .interact()?;

        let clients: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptClients.to_string())
            .default(config.clients.join(", "))
            .interact_text()?;
        config.clients = clients.split(',').map(|c| c.trim().to_string()).filter(|c| !c.is_empty()).collect();

        Ok(config)
    }
}

fn prompt_date(theme: &ColorfulTheme, prompt: Message) -> Result<NaiveDate> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .validate_with(|s: &String| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| Message::InvalidDateFormat(s.clone()).to_string())
        })
        .interact_text()?;
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}
