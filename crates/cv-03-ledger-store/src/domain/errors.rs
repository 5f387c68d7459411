//! Ledger error taxonomy.

use thiserror::Error;

/// Errors surfaced by the ledger API.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The store has been closed; all subsequent calls fail fast.
    #[error("ledger store is closed")]
    Closed,

    /// No record exists for the requested player.
    #[error("player not found")]
    PlayerNotFound,

    /// A stored record could not be encoded or decoded.
    #[error("record codec failure: {message}")]
    Codec { message: String },

    /// The underlying key-value engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl LedgerError {
    pub(crate) fn codec(err: impl std::fmt::Display) -> Self {
        LedgerError::Codec {
            message: err.to_string(),
        }
    }
}

/// Errors produced by a [`KeyValueEngine`](crate::ports::outbound::KeyValueEngine)
/// implementation.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// I/O failure talking to the engine.
    #[error("engine i/o failure: {message}")]
    Io { message: String },

    /// The engine reported on-disk corruption.
    #[error("engine corruption: {message}")]
    Corruption { message: String },
}

impl EngineError {
    pub fn io(err: impl std::fmt::Display) -> Self {
        EngineError::Io {
            message: err.to_string(),
        }
    }

    pub fn corruption(err: impl std::fmt::Display) -> Self {
        EngineError::Corruption {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_convert_into_ledger_errors() {
        let err: LedgerError = EngineError::io("disk full").into();
        assert!(matches!(err, LedgerError::Engine(EngineError::Io { .. })));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn codec_errors_carry_the_cause() {
        let err = LedgerError::codec("unexpected end of input");
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
