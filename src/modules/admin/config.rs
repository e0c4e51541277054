use std::path::{Path, PathBuf};

use crate::{DEFAULT_ADMIN_CONFIG_FILE, DEFAULT_FAIL_MESSAGE, DEFAULT_SUCCESS_MESSAGE, MAX_ADMIN_ATTEMPTS};

/// Tracks failed verification attempts and the lock for one gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateState {
    pub attempts: u32,
    pub locked: bool,
    pub max_attempts: u32,
}

impl GateState {
    /// Create a tracker; a ceiling of zero is raised to one
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            locked: false,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn is_locked_out(&self) -> bool {
        self.locked
    }

    pub fn has_attempts_left(&self) -> bool {
        self.attempts < self.max_attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Record a failed attempt and lock once the ceiling is reached.
    ///
    /// Returns the number of attempts still available.
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.attempts = (self.attempts + 1).min(self.max_attempts);
        if self.attempts >= self.max_attempts {
            self.locked = true;
        }
        self.remaining()
    }

    /// Record successful authentication and reset the counter
    pub fn record_success(&mut self) {
        self.attempts = 0;
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::new(MAX_ADMIN_ATTEMPTS)
    }
}

/// Constructor-level settings of an admin gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSettings {
    pub config_file: PathBuf,
    pub max_attempts: u32,
    pub success_message: String,
    pub fail_message: String,
}

impl GateSettings {
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = path.as_ref().to_path_buf();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_messages(
        mut self,
        success_message: impl Into<String>,
        fail_message: impl Into<String>,
    ) -> Self {
        self.success_message = success_message.into();
        self.fail_message = fail_message.into();
        self
    }
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_ADMIN_CONFIG_FILE),
            max_attempts: MAX_ADMIN_ATTEMPTS,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            fail_message: DEFAULT_FAIL_MESSAGE.to_string(),
        }
    }
}
