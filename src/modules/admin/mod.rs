pub mod config;
mod credentials;
mod error;
mod gate;

pub use config::{GateSettings, GateState};
pub use credentials::{CredentialRecord, CredentialStore};
pub use error::GateError;
pub use gate::{AdminGate, NEW_PASSWORD_LABEL, PASSWORD_LABEL, REPEAT_PASSWORD_LABEL};
