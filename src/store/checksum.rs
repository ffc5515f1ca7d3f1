//! Fingerprints for loaded model artifacts.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 fingerprint of an artifact's raw bytes.
///
/// # Arguments
/// * `content` - Raw bytes of the artifact file
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_consistency() {
        let content = br#"{"kind": "linear"}"#;
        let fp1 = fingerprint(content);
        let fp2 = fingerprint(content);
        assert_eq!(fp1, fp2);
    }

    #[test]
    fn test_different_content_different_fingerprint() {
        let fp1 = fingerprint(b"artifact one");
        let fp2 = fingerprint(b"artifact two");
        assert_ne!(fp1, fp2);
    }
}
