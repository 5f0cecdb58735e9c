//! Password digests.
//!
//! Stored hashes are the lowercase hex SHA-256 digest of the password bytes.

use sha2::{Digest, Sha256};

pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}
