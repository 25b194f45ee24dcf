use fairdice_core::{verify_commitment, FairDiceError, HmacSha3, Result};

pub fn verify_round(digest: &str, key_hex: &str, number: u32) -> Result<()> {
    let key = hex::decode(key_hex.trim())?;

    if !verify_commitment(&HmacSha3, digest, &key, number)? {
        return Err(FairDiceError::CommitmentMismatch);
    }

    println!("Commitment verified!");
    println!("HMAC: {}", digest.trim());
    println!("Computer number: {}", number);
    println!("The computer number was fixed before you chose yours.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    const DIGEST: &str = "bde2fbc47a0de7fef9718aa13a78b9be361366deac088bcb105d01eff9c9c5d5";

    #[test]
    fn test_verify_matching_round() {
        assert!(verify_round(DIGEST, KEY, 3).is_ok());
    }

    #[test]
    fn test_verify_substituted_number() {
        let result = verify_round(DIGEST, KEY, 4);
        assert!(matches!(result, Err(FairDiceError::CommitmentMismatch)));
    }

    #[test]
    fn test_verify_bad_key() {
        let result = verify_round(DIGEST, "zz", 3);
        assert!(matches!(result, Err(FairDiceError::Hex(_))));
    }
}
