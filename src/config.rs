use std::env::var;
use std::str::FromStr;
use std::time::Duration;

use chrono::FixedOffset;
use dotenvy::dotenv;
use thiserror::Error;
use tracing::Level;

use crate::{
    application::services::renderer::RendererConfig,
    infrastructure::messaging::twilio::TwilioSettings,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("An error occured while getting {0} env param")]
    Missing(&'static str),
    #[error("An error occured while parsing {name} env param: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ReceiptConfig {
    pub station_name: String,
    pub currency_prefix: String,
    pub country_code: String,
    pub channel: String,
    pub utc_offset: FixedOffset,
}

impl ReceiptConfig {
    pub fn renderer(&self) -> RendererConfig {
        RendererConfig {
            station_name: self.station_name.clone(),
            currency_prefix: self.currency_prefix.clone(),
            utc_offset: self.utc_offset,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub log_level: Level,
    pub twilio: TwilioSettings,
    pub delivery_timeout: Duration,
    pub dry_run: bool,
    pub receipt: ReceiptConfig,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|name| var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let offset_hours: i32 = parse_or(&get, "RECEIPT_UTC_OFFSET_HOURS", 8)?;
        let timeout_secs: u64 = parse_or(&get, "DELIVERY_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "DELIVERY_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        let utc_offset = FixedOffset::east_opt(offset_hours * 3600).ok_or(ConfigError::Invalid {
            name: "RECEIPT_UTC_OFFSET_HOURS",
            value: offset_hours.to_string(),
        })?;

        Ok(Config {
            port: get("PORT")
                .ok_or(ConfigError::Missing("PORT"))?
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    name: "PORT",
                    value: get("PORT").unwrap_or_default(),
                })?,
            scheme: get("SCHEME").unwrap_or_else(|| "http".to_string()),
            host: get("HOST").unwrap_or_else(|| "localhost".to_string()),
            log_level: parse_or(&get, "LOG_LEVEL", Level::INFO)?,
            twilio: TwilioSettings {
                account_sid: get("TWILIO_ACCOUNT_SID"),
                auth_token: get("TWILIO_AUTH_TOKEN"),
                from_number: get("TWILIO_WHATSAPP_NUMBER"),
                api_base_url: get("TWILIO_API_BASE_URL")
                    .unwrap_or_else(|| "https://api.twilio.com".to_string()),
            },
            delivery_timeout: Duration::from_secs(timeout_secs),
            dry_run: parse_or(&get, "DELIVERY_DRY_RUN", false)?,
            receipt: ReceiptConfig {
                station_name: get("STATION_NAME").unwrap_or_else(|| "Petronas KL".to_string()),
                currency_prefix: get("CURRENCY_PREFIX").unwrap_or_else(|| "RM".to_string()),
                country_code: get("RECIPIENT_COUNTRY_CODE").unwrap_or_else(|| "60".to_string()),
                channel: get("RECIPIENT_CHANNEL").unwrap_or_else(|| "whatsapp".to_string()),
                utc_offset,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

fn parse_or<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
