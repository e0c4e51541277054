//! Failure kinds of the admin gate.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Error, Debug)]
pub enum GateError {
    /// The two entered passwords differ
    #[error("passwords do not match")]
    ConfirmationMismatch,

    #[error("credential file error: {0}")]
    Storage(#[from] io::Error),

    /// The credential file exists but is not valid JSON
    #[error("credential file is unreadable: {0}")]
    CorruptRecord(#[from] serde_json::Error),

    /// Reading from the masked prompt failed
    #[error("could not read password: {0}")]
    Prompt(io::Error),

    #[error("no admin password set")]
    NoCredentialConfigured,

    /// The credential file has no usable password hash
    #[error("no password hash found in credential file")]
    MalformedRecord,

    #[error("too many failed attempts, access locked")]
    LockedOut,
}
