use iso_currency::Currency;

pub const DEFAULT_GREETING: &str = "Hello! Ask me anything about your cheques, like \"Who has the highest bounced amount?\" or \"Show all pending cheques due next week.\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum StatusPolicy {
    /// An overdue cheque may not be moved to Cleared.
    #[default]
    PreventClearingOverdue,
    /// Any status may be set at any time.
    Unrestricted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub currency: Currency,
    /// Pending cheques dated within this many days from today are due soon.
    pub due_soon_days: i64,
    /// Minimum number of bounced cheques that flags a name.
    pub frequent_bouncer_min_bounces: usize,
    pub status_policy: StatusPolicy,
    pub assistant_greeting: String,
    pub transcript_width: usize,
}

// --

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency: Currency::INR,
            due_soon_days: 7,
            frequent_bouncer_min_bounces: 2,
            status_policy: StatusPolicy::default(),
            assistant_greeting: DEFAULT_GREETING.to_string(),
            transcript_width: 72,
        }
    }
}

impl TrackerConfig {
    /// Pulls out-of-range settings back to the nearest usable value.
    pub fn clamped(self) -> Self {
        Self {
            due_soon_days: self.due_soon_days.max(0),
            frequent_bouncer_min_bounces: self.frequent_bouncer_min_bounces.max(1),
            transcript_width: self.transcript_width.max(20),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_settings() {
        let config = TrackerConfig {
            due_soon_days: -3,
            frequent_bouncer_min_bounces: 0,
            transcript_width: 5,
            ..TrackerConfig::default()
        }
        .clamped();

        assert_eq!(config.due_soon_days, 0);
        assert_eq!(config.frequent_bouncer_min_bounces, 1);
        assert_eq!(config.transcript_width, 20);
        assert_eq!(TrackerConfig::default().clamped(), TrackerConfig::default());
    }
}
