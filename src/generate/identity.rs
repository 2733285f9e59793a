//! Synthetic identifiers attached to response sessions.

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A version 4 UUID whose random bits come from `rng` rather than the OS, so
/// that seeded runs reproduce their session ids.
pub fn session_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// SHA-256 of the UTF-8 input, encoded as padded standard base64.
pub fn sha256_base64(input: &str) -> String {
    STANDARD.encode(Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            sha256_base64("abc"),
            "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
        );
    }

    #[test]
    fn digest_is_32_bytes() {
        let encoded = sha256_base64("192.168.1.1");
        assert_eq!(encoded.len(), 44);
        assert_eq!(STANDARD.decode(encoded).unwrap().len(), 32);
    }

    #[test]
    fn session_ids_are_v4_and_reproducible() {
        let mut a = ChaCha20Rng::seed_from_u64(3);
        let mut b = ChaCha20Rng::seed_from_u64(3);

        let first = session_id(&mut a);
        assert_eq!(first.get_version_num(), 4);
        assert_eq!(first, session_id(&mut b));
        assert_ne!(session_id(&mut a), first);
    }
}
