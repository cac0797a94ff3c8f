use std::env;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Offset of the clinic's local clock from UTC, in minutes.
    pub clinic_utc_offset_minutes: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            clinic_utc_offset_minutes: 0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using default");
                    DEFAULT_HOST.to_string()
                }),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|value| match value.parse::<u16>() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("SERVER_PORT '{}' is not a valid port, using default", value);
                        None
                    }
                })
                .unwrap_or(DEFAULT_PORT),
            clinic_utc_offset_minutes: env::var("CLINIC_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|value| match value.parse::<i32>() {
                    Ok(minutes) => Some(minutes),
                    Err(_) => {
                        warn!("CLINIC_UTC_OFFSET_MINUTES '{}' is not an integer, using UTC", value);
                        None
                    }
                })
                .unwrap_or(0),
        };

        if config.clinic_offset_opt().is_none() {
            warn!(
                "Clinic UTC offset of {} minutes is out of range - slot times will use UTC",
                config.clinic_utc_offset_minutes
            );
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Clinic timezone as a fixed offset, falling back to UTC when the
    /// configured value is outside +/-24h.
    pub fn clinic_offset(&self) -> FixedOffset {
        self.clinic_offset_opt()
            .unwrap_or_else(|| Utc.fix())
    }

    fn clinic_offset_opt(&self) -> Option<FixedOffset> {
        self.clinic_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }
}
