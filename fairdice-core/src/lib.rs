//! fairdice core - provably fair dice rounds
//!
//! The computer commits to its number with HMAC-SHA3-256 before the user
//! picks one, then reveals the key so the user can check the commitment.
//! Also computes win probabilities between (possibly non-transitive) dice.

pub mod commitment;
pub mod config;
pub mod dice;
pub mod error;
pub mod probability;
pub mod random;
pub mod round;

pub use commitment::{verify_commitment, CommitmentScheme, HmacSha3};
pub use config::{GameConfig, FACES};
pub use dice::{DiceSet, Die};
pub use error::{FairDiceError, Result};
pub use probability::{pairwise_win_rate, ProbabilityMatrix, WinRate};
pub use random::{FixedRandom, OsRandom, RandomSource};
pub use round::{CommittedRound, FairRound, FairnessEngine};
