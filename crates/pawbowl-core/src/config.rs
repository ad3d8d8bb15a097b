// ── Service configuration ──

use std::time::Duration;

use url::Url;

/// Everything needed to reach one Puppy Bowl cohort.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Service root, e.g. `https://fsa-puppy-bowl.herokuapp.com`.
    pub url: Url,
    /// Cohort identifier scoping every request (`/api/{cohort}/...`).
    pub cohort: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RosterConfig {
    pub fn new(url: Url, cohort: impl Into<String>) -> Self {
        Self {
            url,
            cohort: cohort.into(),
            timeout: Duration::from_secs(30),
        }
    }
}
