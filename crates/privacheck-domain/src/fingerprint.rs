use sha2::{Digest, Sha256};

/// Hex SHA-256 of the evaluated text. Identical input always yields the same value,
/// so reports can be deduplicated and trended across runs.
pub fn input_fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
