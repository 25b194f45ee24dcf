use thiserror::Error;

pub type Result<T> = std::result::Result<T, FairDiceError>;

#[derive(Error, Debug)]
pub enum FairDiceError {
    #[error("Invalid dice definitions: {0}")]
    Usage(String),

    #[error("'{input}' is not an integer, expected a number in [0, {max})")]
    InvalidNumber { input: String, max: u32 },

    #[error("{value} is out of range, expected a number in [0, {max})")]
    OutOfRange { value: i64, max: u32 },

    #[error("Invalid selection: {0}")]
    MenuInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Commitment mismatch: digest does not match the revealed key and number")]
    CommitmentMismatch,

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FairDiceError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn menu_input(msg: impl Into<String>) -> Self {
        Self::MenuInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn crypto(msg: impl Into<String>) -> Self {
        Self::Crypto(msg.into())
    }

    /// True for errors caused by a bad user number during a round
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. } | Self::OutOfRange { .. })
    }
}
