//! Move authority adapters.
//!
//! The authority validates moves, lists legal destinations and plays the
//! bot's side. It is reached either over HTTP or in-process, and always from
//! the background worker thread so the UI loop never blocks.

mod http;
mod local;
mod wire;
mod worker;

pub use http::HttpAuthority;
pub use local::LocalAuthority;
pub use worker::RemoteWorker;

use std::time::Duration;

use shakmaty::Square;

use crate::config::ClientConfig;
use crate::domain::{GameUpdate, LegalMove, PieceColor, PromotionPiece, RemoteCall, RemoteResponse};
use crate::error::ClientError;

/// Request/response contract of the move authority
pub trait MoveAuthority: Send {
    fn new_game(&mut self, player: PieceColor, depth: u32) -> Result<GameUpdate, ClientError>;

    fn legal_moves(&mut self, from: Square) -> Result<Vec<LegalMove>, ClientError>;

    fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<GameUpdate, ClientError>;

    fn bot_move(&mut self, depth: u32) -> Result<GameUpdate, ClientError>;

    /// Dispatch a call to the matching operation
    fn execute(&mut self, call: &RemoteCall) -> Result<RemoteResponse, ClientError> {
        match *call {
            RemoteCall::NewGame { player, depth } => {
                self.new_game(player, depth).map(RemoteResponse::Game)
            }
            RemoteCall::LegalMoves { from } => {
                self.legal_moves(from).map(RemoteResponse::LegalMoves)
            }
            RemoteCall::SubmitMove {
                from,
                to,
                promotion,
            } => self.submit_move(from, to, promotion).map(RemoteResponse::Game),
            RemoteCall::BotMove { depth } => self.bot_move(depth).map(RemoteResponse::Game),
        }
    }
}

/// Build the authority selected by the configuration
pub fn connect(config: &ClientConfig) -> Result<Box<dyn MoveAuthority>, ClientError> {
    if config.offline {
        log::info!("playing offline against the built-in authority");
        return Ok(Box::new(LocalAuthority::new()));
    }
    log::info!("using move authority at {}", config.server_url);
    let authority = HttpAuthority::new(
        &config.server_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    Ok(Box::new(authority))
}
