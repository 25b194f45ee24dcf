use crate::error::{FairDiceError, Result};

/// Number of faces on every die
pub const FACES: usize = 6;

const MIN_KEY_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Upper bound (exclusive) of the numbers exchanged in a fair round
    pub roll_range: u32,
    /// Fewest dice accepted at startup
    pub min_dice: usize,
    /// HMAC key length in bytes
    pub key_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roll_range: FACES as u32,
            min_dice: 3,
            key_len: 32, // 256 bits
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.roll_range == 0 {
            return Err(FairDiceError::config("Roll range must be greater than 0"));
        }

        if self.min_dice == 0 {
            return Err(FairDiceError::config("At least one die is required"));
        }

        if self.key_len < MIN_KEY_LEN {
            return Err(FairDiceError::config(format!(
                "Key length must be at least {} bytes",
                MIN_KEY_LEN
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.roll_range, 6);
        assert_eq!(config.key_len, 32);
    }

    #[test]
    fn test_rejects_short_key() {
        let config = GameConfig {
            key_len: 8,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(FairDiceError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_range() {
        let config = GameConfig {
            roll_range: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
