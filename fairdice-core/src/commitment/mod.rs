pub mod scheme;

pub use scheme::{commitment_message, CommitmentScheme};

use crate::{FairDiceError, Result};
use hmac::{Hmac, Mac};
use sha3::Sha3_256;

type HmacSha3_256 = Hmac<Sha3_256>;

/// HMAC-SHA3-256 commitment
#[derive(Debug, Default, Clone, Copy)]
pub struct HmacSha3;

impl HmacSha3 {
    fn keyed(key: &[u8]) -> Result<HmacSha3_256> {
        HmacSha3_256::new_from_slice(key)
            .map_err(|e| FairDiceError::crypto(format!("Invalid HMAC key: {}", e)))
    }
}

impl CommitmentScheme for HmacSha3 {
    fn commit(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let mut mac = Self::keyed(key)?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn verify(&self, key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool> {
        let mut mac = Self::keyed(key)?;
        mac.update(message);
        Ok(mac.verify_slice(tag).is_ok())
    }
}

/// Check a published hex digest against a revealed key and number
pub fn verify_commitment<C: CommitmentScheme + ?Sized>(
    scheme: &C,
    digest_hex: &str,
    key: &[u8],
    number: u32,
) -> Result<bool> {
    let tag = hex::decode(digest_hex.trim())?;
    scheme.verify(key, &commitment_message(number), &tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Vec<u8> {
        (0u8..32).collect()
    }

    #[test]
    fn test_known_digest() {
        let tag = HmacSha3.commit(&test_key(), &commitment_message(3)).unwrap();
        assert_eq!(
            hex::encode(tag),
            "bde2fbc47a0de7fef9718aa13a78b9be361366deac088bcb105d01eff9c9c5d5"
        );
    }

    #[test]
    fn test_commitment_scheme() {
        let key = test_key();
        let tag = HmacSha3.commit(&key, b"5").unwrap();

        assert_eq!(tag.len(), 32);
        assert!(HmacSha3.verify(&key, b"5", &tag).unwrap());
        assert!(!HmacSha3.verify(&key, b"4", &tag).unwrap());
        assert!(!HmacSha3.verify(&[7u8; 32], b"5", &tag).unwrap());
    }

    #[test]
    fn test_verify_commitment_hex() {
        let key = test_key();
        let digest = "424ece9af40c196bd6246c3691a09687bb37436686b9a3f3252ccd5501435db5";

        assert!(verify_commitment(&HmacSha3, digest, &key, 4).unwrap());
        assert!(!verify_commitment(&HmacSha3, digest, &key, 3).unwrap());
    }

    #[test]
    fn test_verify_commitment_bad_hex() {
        let result = verify_commitment(&HmacSha3, "not hex", &test_key(), 1);
        assert!(matches!(result, Err(FairDiceError::Hex(_))));
    }
}
