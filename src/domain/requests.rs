//! Remote calls issued by the session and the replies it accepts.

use shakmaty::Square;

use crate::domain::{GameUpdate, LegalMove, PieceColor, PromotionPiece};
use crate::error::ClientError;

/// Stamps a request with the game it belongs to.
///
/// `generation` is the game id; `serial` is unique within the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Ticket {
    pub generation: u64,
    pub serial: u64,
}

/// One call to the move authority
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteCall {
    NewGame {
        player: PieceColor,
        depth: u32,
    },
    LegalMoves {
        from: Square,
    },
    SubmitMove {
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    },
    BotMove {
        depth: u32,
    },
}

impl RemoteCall {
    pub fn name(&self) -> &'static str {
        match self {
            RemoteCall::NewGame { .. } => "new game",
            RemoteCall::LegalMoves { .. } => "legal moves",
            RemoteCall::SubmitMove { .. } => "submit move",
            RemoteCall::BotMove { .. } => "bot move",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteRequest {
    pub ticket: Ticket,
    pub call: RemoteCall,
}

/// Successful answer of the authority
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteResponse {
    Game(GameUpdate),
    LegalMoves(Vec<LegalMove>),
}

#[derive(Clone, Debug)]
pub struct RemoteReply {
    pub ticket: Ticket,
    pub outcome: Result<RemoteResponse, ClientError>,
}

impl RemoteReply {
    /// Reply for a request that never reached the authority
    pub fn failed(request: &RemoteRequest, error: ClientError) -> Self {
        Self {
            ticket: request.ticket,
            outcome: Err(error),
        }
    }
}
