//! Win probabilities between dice
//!
//! Each face of a die is assumed equally likely and rolls are independent, so
//! the chance that one die beats another is a count over all face pairs.
//! Tied pairs are re-rolled in play and are left out of the denominator.

use crate::dice::Die;

/// Probability reported when no face pair has a winner
pub const TIE_RATE: f64 = 0.5;

/// Face pair counts from one die's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRate {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl WinRate {
    pub fn between(a: &Die, b: &Die) -> Self {
        let mut rate = Self {
            wins: 0,
            losses: 0,
            ties: 0,
        };

        for x in a.faces() {
            for y in b.faces() {
                if x > y {
                    rate.wins += 1;
                } else if y > x {
                    rate.losses += 1;
                } else {
                    rate.ties += 1;
                }
            }
        }

        rate
    }

    /// Pairs with a strict winner
    pub fn decided(&self) -> u32 {
        self.wins + self.losses
    }

    /// `wins / (wins + losses)`, or [`TIE_RATE`] when every pair ties
    pub fn probability(&self) -> f64 {
        match self.decided() {
            0 => TIE_RATE,
            decided => self.wins as f64 / decided as f64,
        }
    }
}

/// Probability that `a` beats `b` in one opposed roll
pub fn pairwise_win_rate(a: &Die, b: &Die) -> f64 {
    WinRate::between(a, b).probability()
}

/// `entries[i][j]` is the probability that die `i` beats die `j`
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    entries: Vec<Vec<f64>>,
}

impl ProbabilityMatrix {
    /// Self comparisons are fixed at 0.5 instead of being computed
    pub fn build(dice: &[Die]) -> Self {
        let entries = dice
            .iter()
            .enumerate()
            .map(|(i, a)| {
                dice.iter()
                    .enumerate()
                    .map(|(j, b)| if i == j { TIE_RATE } else { pairwise_win_rate(a, b) })
                    .collect()
            })
            .collect();

        tracing::debug!("Built {}x{} probability matrix", dice.len(), dice.len());
        Self { entries }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.entries.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.entries
    }

    /// Die `i` wins against die `j` more often than not
    pub fn beats(&self, i: usize, j: usize) -> bool {
        self.get(i, j).map_or(false, |p| p > TIE_RATE)
    }
}
