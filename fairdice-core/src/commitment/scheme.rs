use crate::Result;

/// Keyed MAC used to bind the computer's number before the user answers
pub trait CommitmentScheme {
    /// Tag over `message` under `key`
    fn commit(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Constant time check of `tag` against `message` under `key`
    fn verify(&self, key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool>;
}

/// Message that is committed for a number: its decimal string
pub fn commitment_message(number: u32) -> Vec<u8> {
    number.to_string().into_bytes()
}
