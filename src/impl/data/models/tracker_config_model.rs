use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use ron::from_str;

use crate::{
    entities::{StatusPolicy, TrackerConfig},
    errors::{InvalidIsoCurrencyCode, InvalidRon},
};

/// RON form of `TrackerConfig`. Every field is optional and falls back to the
/// default configuration.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct TrackerConfigModel {
    currency: Option<String>,
    due_soon_days: Option<u32>,
    frequent_bouncer_min_bounces: Option<usize>,
    status_policy: Option<StatusPolicy>,
    assistant_greeting: Option<String>,
    transcript_width: Option<usize>,
}

impl FromStr for TrackerConfigModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).map_err(|e| InvalidRon::with_debug("TrackerConfig", &e))
    }
}

impl TrackerConfigModel {
    pub(crate) fn into_config(self) -> Result<TrackerConfig, ServerError> {
        let defaults = TrackerConfig::default();
        let currency = match self.currency {
            Some(code) => {
                Currency::from_code(code.trim()).ok_or_else(|| InvalidIsoCurrencyCode::new(&code))?
            }
            None => defaults.currency,
        };
        Ok(TrackerConfig {
            currency,
            due_soon_days: self
                .due_soon_days
                .map_or(defaults.due_soon_days, i64::from),
            frequent_bouncer_min_bounces: self
                .frequent_bouncer_min_bounces
                .unwrap_or(defaults.frequent_bouncer_min_bounces),
            status_policy: self.status_policy.unwrap_or(defaults.status_policy),
            assistant_greeting: self
                .assistant_greeting
                .unwrap_or(defaults.assistant_greeting),
            transcript_width: self.transcript_width.unwrap_or(defaults.transcript_width),
        }
        .clamped())
    }
}
