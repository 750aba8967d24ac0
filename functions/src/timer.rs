use serde::{Deserialize, Serialize};

/// A timer trigger firing
pub trait TimerRequest {
    /// Whether the timer fired later than scheduled, e.g. because the host was unavailable
    fn past_due(&self) -> bool;
}

/// Timer payload as delivered by the host, `{"IsPastDue": true}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    #[serde(rename = "IsPastDue", default)]
    past_due: bool,
}

impl Timer {
    pub fn new(past_due: bool) -> Self {
        Timer { past_due }
    }
}

impl TimerRequest for Timer {
    fn past_due(&self) -> bool {
        self.past_due
    }
}
