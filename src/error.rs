//! Error types for pair ordering and priority list loading.
//!
//! Invalid input is a programming error on the caller's side, so nothing here
//! is retryable. Every failure is raised before an ordering is produced.

use std::fmt;

use thiserror::Error;

/// Which positional asset argument failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The first asset identifier passed to the orderer
    First,
    /// The second asset identifier passed to the orderer
    Second,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::First => f.write_str("first asset ID"),
            Argument::Second => f.write_str("second asset ID"),
        }
    }
}

/// Why an asset identifier was rejected.
#[derive(Debug, Error)]
pub enum InvalidReason {
    /// Identifiers must contain at least one character
    #[error("expected a non-empty identifier")]
    Empty,

    /// Neither asset is in the priority list and this one is not Base58
    #[error("not a valid Base58 identifier")]
    NotBase58(#[source] bs58::decode::Error),
}

/// Failure while ordering an asset pair.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid {argument}")]
    InvalidArgument {
        argument: Argument,
        #[source]
        reason: InvalidReason,
    },
}

impl OrderError {
    pub(crate) fn invalid(argument: Argument, reason: InvalidReason) -> Self {
        OrderError::InvalidArgument { argument, reason }
    }

    /// The argument that caused the failure
    pub fn argument(&self) -> Argument {
        match self {
            OrderError::InvalidArgument { argument, .. } => *argument,
        }
    }
}

/// Failure while loading a priority list from structured data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed priority list records")]
    Json(#[from] serde_json::Error),

    #[error("failed to read priority list file")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{order_pair, PriorityList};

    /// Render the full source chain the way the binary reports it
    fn chain(err: impl std::error::Error + Send + Sync + 'static) -> String {
        format!("{:#}", anyhow::Error::new(err))
    }

    #[test]
    fn test_invalid_argument_names_argument() {
        let err = OrderError::invalid(Argument::Second, InvalidReason::Empty);
        assert_eq!(err.argument(), Argument::Second);
        assert_eq!(err.to_string(), "invalid second asset ID");
        assert_eq!(
            chain(err),
            "invalid second asset ID: expected a non-empty identifier"
        );
    }

    #[test]
    fn test_not_base58_keeps_decoder_error() {
        let decode_err = bs58::decode("0OIl").into_vec().unwrap_err();
        let err = OrderError::invalid(Argument::First, InvalidReason::NotBase58(decode_err));

        assert_eq!(err.to_string(), "invalid first asset ID");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_chain_names_decoder_message_once() {
        let err = order_pair(&PriorityList::empty(), "0OIl", "2").unwrap_err();
        let decoder_msg = bs58::decode("0OIl").into_vec().unwrap_err().to_string();

        let rendered = chain(err);
        assert!(rendered.starts_with("invalid first asset ID: not a valid Base58 identifier: "));
        assert_eq!(rendered.matches(decoder_msg.as_str()).count(), 1, "{rendered}");
        assert_eq!(rendered.matches("not a valid Base58 identifier").count(), 1);
    }

    #[test]
    fn test_data_error_chain_names_cause_once() {
        let err = PriorityList::from_json_records("[{").unwrap_err();
        let cause = match &err {
            DataError::Json(e) => e.to_string(),
            other => panic!("expected json error, got {other:?}"),
        };

        let rendered = chain(err);
        assert!(rendered.starts_with("malformed priority list records: "));
        assert_eq!(rendered.matches(cause.as_str()).count(), 1, "{rendered}");
    }
}
