//! Application configuration management.

use chrono::Weekday;
use serde::Deserialize;

use crate::types::{FiftyTwoFiftyThreeWeekMethodology, MonthOfYear};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppConfig {
    /// Fiscal calendar used to map calendar dates onto fiscal periods.
    #[serde(default)]
    pub accounting_period_system: PeriodSystemConfig,
}

/// Which accounting period system is in force, and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeriodSystemConfig {
    /// Fiscal year equals calendar year.
    #[default]
    CalendarYear,
    /// Fiscal year ends on the last day of a month.
    FiscalYear {
        /// Month whose last day closes the fiscal year.
        last_month_in_fiscal_year: MonthOfYear,
    },
    /// Fiscal year ends on a weekday located relative to an anchor month.
    FiftyTwoFiftyThreeWeek {
        /// Month the year-end is anchored to.
        anchor_month: MonthOfYear,
        /// How the year-end weekday is located.
        methodology: FiftyTwoFiftyThreeWeekMethodology,
        /// Weekday that ends every fiscal year.
        #[serde(deserialize_with = "deserialize_weekday")]
        last_day_of_week_in_accounting_year: Weekday,
    },
}

fn deserialize_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse::<Weekday>()
        .map_err(|_| serde::de::Error::custom(format!("unknown day of week: {raw}")))
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERTIME").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or does not describe a valid configuration.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
