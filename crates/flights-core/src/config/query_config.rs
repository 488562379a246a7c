//! Lookup tuning.

use serde::{Deserialize, Serialize};

use crate::constants::DELAY_THRESHOLD_MINUTES;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueryConfig {
    /// Minimum departure delay (minutes) for the delayed-flight lookups. Default: 20.
    pub delay_threshold_minutes: Option<i64>,
}

impl QueryConfig {
    /// Returns the effective delay threshold, defaulting to 20 minutes.
    pub fn effective_delay_threshold(&self) -> i64 {
        self.delay_threshold_minutes.unwrap_or(DELAY_THRESHOLD_MINUTES)
    }
}
