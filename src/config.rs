use std::time::Duration;

/// The six tunables of the effect, fixed after construction. Hand the
/// same instance to every cycle; nothing here mutates at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Selector the document layer uses to find the letter container.
    pub selector: String,
    /// Class that marks a letter as an animation target.
    pub trigger_class: String,
    /// Class names written for `State1..State3`. `Idle` clears them.
    pub state_classes: [String; 3],
    /// Bounds for each letter's random start offset.
    pub min_start_delay_ms: u64,
    pub max_start_delay_ms: u64,
    /// Pause between the three decode states of one letter.
    pub transition_delay_ms: u64,
    /// Pause after all letters finish, before the cycle signals completion.
    pub settle_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: ".decode-text".to_string(),
            trigger_class: "text-animation".to_string(),
            state_classes: [
                "state-1".to_string(),
                "state-2".to_string(),
                "state-3".to_string(),
            ],
            min_start_delay_ms: 100,
            max_start_delay_ms: 2_000,
            transition_delay_ms: 100,
            settle_interval_ms: 1_500,
        }
    }
}

impl Config {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn settle_interval(&self) -> Duration {
        Duration::from_millis(self.settle_interval_ms)
    }
}
