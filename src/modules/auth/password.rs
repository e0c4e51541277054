use sha2::{Digest, Sha256};

/// Length of a hex encoded SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash a secret with SHA-256 and return the lower-case hex digest.
///
/// No salt is applied; the same secret always yields the same digest.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare an entered secret against a stored digest, byte for byte
pub fn digests_match(entered: &str, stored_digest: &str) -> bool {
    let entered_digest = hash_password(entered);
    let stored = stored_digest.as_bytes();

    if entered_digest.len() != stored.len() {
        return false;
    }

    // Constant time over the digest length
    entered_digest
        .as_bytes()
        .iter()
        .zip(stored)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
