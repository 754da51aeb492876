//! Error type shared by the domain layer and the remote adapters.

/// Failures the game core can observe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Network or server failure while talking to the move authority
    #[error("move authority unavailable: {0}")]
    RemoteUnavailable(String),

    /// The authority answered but refused the request (illegal move, wrong turn)
    #[error("move authority rejected the request: {0}")]
    RemoteRejected(String),

    /// The authority answered with something we cannot turn into domain values
    #[error("malformed reply from move authority: {0}")]
    MalformedResponse(String),

    /// Row/column or square text outside the 8x8 board
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Reply for a superseded selection or an older game
    #[error("stale response discarded")]
    StaleResponse,
}

impl ClientError {
    /// Message shown to the player when a move or bot request fails.
    pub fn notice(&self) -> String {
        match self {
            ClientError::RemoteUnavailable(_) | ClientError::MalformedResponse(_) => {
                "Server unavailable, try again".to_string()
            }
            ClientError::RemoteRejected(detail) => detail.clone(),
            ClientError::InvalidCoordinate(what) => format!("Invalid square: {}", what),
            ClientError::StaleResponse => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_notice_is_server_detail() {
        let err = ClientError::RemoteRejected("Illegal move".to_string());
        assert_eq!(err.notice(), "Illegal move");
    }

    #[test]
    fn test_transport_failures_share_notice() {
        let a = ClientError::RemoteUnavailable("connection refused".to_string());
        let b = ClientError::MalformedResponse("bad board".to_string());
        assert_eq!(a.notice(), b.notice());
    }
}
