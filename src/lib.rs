// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{admin, auth, files, toolkit, utils};

// Re-export commonly used types
pub use modules::admin::{AdminGate, GateError, GateSettings};
pub use modules::auth::password::hash_password;
pub use modules::auth::prompt::{ScriptedPrompt, SecretPrompt, TerminalPrompt};
pub use modules::files::FileTools;
pub use modules::toolkit::Toolkit;
pub use modules::utils::logging::{ConsoleSink, LogLevel, LogSink, MemorySink};

// Constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_ADMIN_CONFIG_FILE: &str = ".admin_config.json";
pub const DEFAULT_LOG_FILE: &str = "tkx-helper.log";
pub const MAX_ADMIN_ATTEMPTS: u32 = 3;
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Password correct.";
pub const DEFAULT_FAIL_MESSAGE: &str = "Wrong password.";
