//! General application configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deadline for a whole report in seconds. `0` waits for every facet.
    #[serde(default)]
    pub deadline_secs: u64,
}

impl GeneralConfig {
    /// The overall report deadline, if one is set.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        if self.deadline_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.deadline_secs))
        }
    }
}
