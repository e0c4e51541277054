pub mod password;
pub mod prompt;

pub use password::{digests_match, hash_password};
pub use prompt::{ScriptedPrompt, SecretPrompt, TerminalPrompt};
