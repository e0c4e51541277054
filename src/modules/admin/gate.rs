use super::config::{GateSettings, GateState};
use super::credentials::CredentialStore;
use super::error::{GateError, Result};
use crate::modules::auth::password::{digests_match, hash_password};
use crate::modules::auth::prompt::SecretPrompt;
use crate::modules::utils::logging::{LogLevel, LogSink};

pub const NEW_PASSWORD_LABEL: &str = "New admin password: ";
pub const REPEAT_PASSWORD_LABEL: &str = "Repeat password: ";
pub const PASSWORD_LABEL: &str = "Admin password: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetOutcome {
    Written,
    AlreadySet,
}

/// Single-admin password gate backed by a hashed credential file.
///
/// Attempt counting and the lock live on the gate itself and end with it;
/// only the credential file survives a restart. All operations block on
/// the prompt and the filesystem. Nothing guards the credential file
/// against a second process changing it concurrently.
pub struct AdminGate<P, S> {
    store: CredentialStore,
    state: GateState,
    success_message: String,
    fail_message: String,
    prompt: P,
    sink: S,
}

impl<P: SecretPrompt, S: LogSink> AdminGate<P, S> {
    pub fn new(settings: GateSettings, prompt: P, sink: S) -> Self {
        Self {
            store: CredentialStore::new(&settings.config_file),
            state: GateState::new(settings.max_attempts),
            success_message: settings.success_message,
            fail_message: settings.fail_message,
            prompt,
            sink,
        }
    }

    /// Ask for a new password twice and store its hash.
    ///
    /// Without `force` an existing credential is left alone.
    pub fn set_credential(&mut self, force: bool) {
        match self.try_set_credential(force) {
            Ok(SetOutcome::Written) => self.log(LogLevel::Success, "Admin password has been set."),
            Ok(SetOutcome::AlreadySet) => {
                self.log(LogLevel::Info, "Admin password already exists.")
            }
            Err(GateError::ConfirmationMismatch) => {
                self.log(LogLevel::Error, "Passwords do not match.")
            }
            Err(e) => self.log(LogLevel::Error, &format!("Failed to set password: {}", e)),
        }
    }

    /// Remove the stored credential, if any
    pub fn reset_credential(&mut self) {
        match self.store.remove() {
            Ok(true) => self.log(LogLevel::Warning, "Admin password has been reset."),
            Ok(false) => self.log(LogLevel::Info, "No admin password found to reset."),
            Err(e) => self.log(LogLevel::Error, &format!("Failed to reset password: {}", e)),
        }
    }

    /// Prompt for the admin password until it matches or attempts run out
    pub fn verify_credential(&mut self) -> bool {
        match self.try_verify_credential() {
            Ok(()) => true,
            Err(GateError::LockedOut) => {
                self.log(LogLevel::Error, "Too many failed attempts. Access locked!");
                false
            }
            Err(GateError::NoCredentialConfigured) => {
                self.log(LogLevel::Error, "No admin password set!");
                false
            }
            Err(GateError::MalformedRecord) => {
                self.log(LogLevel::Error, "No password hash found.");
                false
            }
            Err(e) => {
                self.log(LogLevel::Error, &format!("Password check failed: {}", e));
                false
            }
        }
    }

    /// Replace the feedback used by later verifications
    pub fn configure_messages(
        &mut self,
        success_message: impl Into<String>,
        fail_message: impl Into<String>,
    ) {
        self.success_message = success_message.into();
        self.fail_message = fail_message.into();
    }

    pub fn attempts(&self) -> u32 {
        self.state.attempts
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked_out()
    }

    pub fn max_attempts(&self) -> u32 {
        self.state.max_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.state.remaining()
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn try_set_credential(&mut self, force: bool) -> Result<SetOutcome> {
        if self.store.exists() && !force {
            return Ok(SetOutcome::AlreadySet);
        }

        let password = self.read_secret(NEW_PASSWORD_LABEL)?;
        let confirm = self.read_secret(REPEAT_PASSWORD_LABEL)?;
        if password != confirm {
            return Err(GateError::ConfirmationMismatch);
        }

        self.store.write_digest(&hash_password(&password))?;
        Ok(SetOutcome::Written)
    }

    fn try_verify_credential(&mut self) -> Result<()> {
        if self.state.is_locked_out() {
            return Err(GateError::LockedOut);
        }

        let stored_digest = self.store.read_digest()?;

        while self.state.has_attempts_left() {
            let entered = self.read_secret(PASSWORD_LABEL)?;

            if digests_match(&entered, &stored_digest) {
                self.state.record_success();
                let message = self.success_message.clone();
                self.log(LogLevel::Success, &message);
                return Ok(());
            }

            let remaining = self.state.record_failed_attempt();
            if remaining > 0 {
                let message = format!("{} ({} attempts left)", self.fail_message, remaining);
                self.log(LogLevel::Warning, &message);
            }
        }

        Err(GateError::LockedOut)
    }

    fn read_secret(&mut self, label: &str) -> Result<String> {
        self.prompt.read_secret(label).map_err(GateError::Prompt)
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.sink.emit(level, message);
    }
}
