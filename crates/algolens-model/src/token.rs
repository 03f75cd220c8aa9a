//! Opaque durable tokens for snapshot persistence.
//!
//! The engine itself keeps history in memory. Hosts that want durable
//! history store tokens: a token round-trips to an equivalent snapshot and
//! carries no other contract.

use thiserror::Error;

use crate::Snapshot;

/// Errors produced when encoding or decoding a snapshot token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token bytes did not decode to a snapshot
    #[error("Malformed token: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Encode a snapshot into an opaque durable token.
pub fn to_token(snapshot: &Snapshot) -> Result<Vec<u8>, TokenError> {
    Ok(serde_json::to_vec(snapshot)?)
}

/// Reconstruct a snapshot from a token produced by [`to_token`].
pub fn from_token(bytes: &[u8]) -> Result<Snapshot, TokenError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, Severity};
    use std::collections::BTreeSet;

    #[test]
    fn token_round_trip() {
        let snapshot = Snapshot::new(
            vec![4, 2, 9],
            BTreeSet::from([1]),
            vec![
                Event::Compare { a: 0, b: 1 },
                Event::Swap { a: 0, b: 1 },
                Event::message("swapped", Severity::Info),
            ],
            false,
        );

        let token = to_token(&snapshot).unwrap();
        let restored = from_token(&token).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn malformed_token_is_an_error() {
        assert!(from_token(b"not a token").is_err());
    }
}
