use super::admin::{AdminGate, GateSettings};
use super::auth::prompt::TerminalPrompt;
use super::files::FileTools;
use super::utils::logging::ConsoleSink;

/// One handle on every tool: console output, the admin gate and file helpers
pub struct Toolkit {
    pub cli: ConsoleSink,
    pub admin: AdminGate<TerminalPrompt, ConsoleSink>,
    pub files: FileTools<ConsoleSink>,
}

impl Toolkit {
    pub fn new(prefix: impl Into<String>, show_time: bool) -> Self {
        Self::with_settings(prefix, show_time, GateSettings::default())
    }

    pub fn with_settings(prefix: impl Into<String>, show_time: bool, settings: GateSettings) -> Self {
        Self {
            cli: ConsoleSink::new(prefix, show_time),
            admin: AdminGate::new(
                settings,
                TerminalPrompt,
                ConsoleSink::new("[AdminGate] ", show_time),
            ),
            files: FileTools::default(),
        }
    }

    pub fn version() -> String {
        format!("TKX Helper v{}", crate::VERSION)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new("[TKX] ", true)
    }
}
