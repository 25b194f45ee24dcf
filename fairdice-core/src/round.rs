use crate::commitment::{commitment_message, verify_commitment, CommitmentScheme, HmacSha3};
use crate::random::{OsRandom, RandomSource};
use crate::{FairDiceError, GameConfig, Result};
use std::fmt;

/// Runs commit-reveal rounds between the computer and the user
pub struct FairnessEngine<R = OsRandom, C = HmacSha3> {
    rng: R,
    scheme: C,
    key_len: usize,
}

impl FairnessEngine {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_parts(OsRandom, HmacSha3, config)
    }
}

impl<R: RandomSource, C: CommitmentScheme> FairnessEngine<R, C> {
    pub fn with_parts(rng: R, scheme: C, config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng,
            scheme,
            key_len: config.key_len,
        })
    }

    /// Draw the key and the computer's number and publish their digest
    pub fn commit(&mut self, max: u32) -> Result<CommittedRound> {
        if max == 0 {
            return Err(FairDiceError::config("Round range must be greater than 0"));
        }

        let mut secret_key = vec![0u8; self.key_len];
        self.rng.fill_key(&mut secret_key);
        let computer_number = self.rng.uniform_below(max);

        let tag = self
            .scheme
            .commit(&secret_key, &commitment_message(computer_number))?;
        let digest = hex::encode(tag);

        tracing::info!("Committed round in [0, {}) with digest {}", max, digest);

        Ok(CommittedRound {
            secret_key,
            computer_number,
            digest,
            max,
        })
    }

    /// One full round. `on_commit` receives the digest before the user's
    /// number is parsed.
    pub fn run_fair_round<F>(&mut self, user_number_raw: &str, max: u32, on_commit: F) -> Result<FairRound>
    where
        F: FnOnce(&str),
    {
        let committed = self.commit(max)?;
        on_commit(committed.digest());
        committed.reveal(user_number_raw)
    }
}

/// A round whose digest is published but whose secrets are still hidden
pub struct CommittedRound {
    secret_key: Vec<u8>,
    computer_number: u32,
    digest: String,
    max: u32,
}

impl CommittedRound {
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Accept the user's number and reveal the computer's half.
    ///
    /// An invalid number drops the round without revealing anything.
    pub fn reveal(self, user_number_raw: &str) -> Result<FairRound> {
        let user_number = match parse_user_number(user_number_raw, self.max) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!("Round {} aborted: {}", self.digest, e);
                return Err(e);
            }
        };

        let result = ((user_number as u64 + self.computer_number as u64) % self.max as u64) as u32;

        tracing::debug!(
            "Revealed round {}: user {}, computer {}, result {}",
            self.digest,
            user_number,
            self.computer_number,
            result
        );

        Ok(FairRound {
            secret_key: self.secret_key,
            computer_number: self.computer_number,
            commitment_digest: self.digest,
            user_number,
            result,
        })
    }
}

impl fmt::Debug for CommittedRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedRound")
            .field("digest", &self.digest)
            .field("max", &self.max)
            .finish()
    }
}

/// Completed round with everything needed for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FairRound {
    secret_key: Vec<u8>,
    computer_number: u32,
    commitment_digest: String,
    user_number: u32,
    result: u32,
}

impl FairRound {
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    pub fn secret_key_hex(&self) -> String {
        hex::encode(&self.secret_key)
    }

    pub fn computer_number(&self) -> u32 {
        self.computer_number
    }

    pub fn commitment_digest(&self) -> &str {
        &self.commitment_digest
    }

    pub fn user_number(&self) -> u32 {
        self.user_number
    }

    pub fn result(&self) -> u32 {
        self.result
    }

    /// Recompute the commitment from the revealed key and number
    pub fn verify<C: CommitmentScheme + ?Sized>(&self, scheme: &C) -> Result<bool> {
        verify_commitment(
            scheme,
            &self.commitment_digest,
            &self.secret_key,
            self.computer_number,
        )
    }
}

fn parse_user_number(raw: &str, max: u32) -> Result<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| FairDiceError::InvalidNumber {
        input: trimmed.to_string(),
        max,
    })?;

    if value < 0 || value >= max as i64 {
        return Err(FairDiceError::OutOfRange { value, max });
    }

    Ok(value as u32)
}
