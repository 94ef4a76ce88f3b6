use quiz_core::scoring::DEFAULT_ATTEMPT_CAP;

/// Countdown length of the timed variant, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 300;

/// Capability flags for a session.
///
/// The historical engine variants (timed without hints, hints and
/// explanations without a timer, abandon/resume) collapse into one state
/// machine toggled here. The countdown itself is host-driven; the engine
/// only promises an idempotent force-terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    attempt_cap: u32,
    hints_enabled: bool,
    explanations_enabled: bool,
    time_limit_secs: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            attempt_cap: DEFAULT_ATTEMPT_CAP,
            hints_enabled: true,
            explanations_enabled: true,
            time_limit_secs: None,
        }
    }
}

impl SessionConfig {
    /// Untimed rules with hints and explanations, 30-submission budget.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// The timed variant: five-minute countdown, no hints.
    #[must_use]
    pub fn timed() -> Self {
        Self {
            hints_enabled: false,
            time_limit_secs: Some(DEFAULT_TIME_LIMIT_SECS),
            ..Self::default()
        }
    }

    /// Overrides the session-wide submission budget (floored at 1).
    #[must_use]
    pub fn with_attempt_cap(mut self, cap: u32) -> Self {
        self.attempt_cap = cap.max(1);
        self
    }

    #[must_use]
    pub fn with_hints(mut self, enabled: bool) -> Self {
        self.hints_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_explanations(mut self, enabled: bool) -> Self {
        self.explanations_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, secs: Option<u32>) -> Self {
        self.time_limit_secs = secs;
        self
    }

    #[must_use]
    pub fn attempt_cap(&self) -> u32 {
        self.attempt_cap
    }

    #[must_use]
    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    #[must_use]
    pub fn explanations_enabled(&self) -> bool {
        self.explanations_enabled
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules() {
        let config = SessionConfig::standard();
        assert_eq!(config.attempt_cap(), 30);
        assert!(config.hints_enabled());
        assert!(config.explanations_enabled());
        assert_eq!(config.time_limit_secs(), None);
    }

    #[test]
    fn timed_variant_disables_hints() {
        let config = SessionConfig::timed();
        assert!(!config.hints_enabled());
        assert_eq!(config.time_limit_secs(), Some(300));
    }

    #[test]
    fn attempt_cap_is_floored_at_one() {
        let config = SessionConfig::standard().with_attempt_cap(0);
        assert_eq!(config.attempt_cap(), 1);
    }
}
