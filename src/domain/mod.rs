//! Pure game-client domain: board, coordinates, legal-move cache and the
//! interaction state machine. Nothing in here depends on GPUI.

pub mod board;
pub mod chess;
pub mod coords;
pub mod moves;
mod reconcile;
pub mod requests;
pub mod session;

pub use board::{BoardSnapshot, GameStatus, GameUpdate};
pub use chess::{Piece, PieceColor, PieceKind, PromotionPiece, shakmaty_to_piece};
pub use coords::{Orientation, parse_square, to_indices, to_square};
pub use moves::{LegalMove, MoveCache};
pub use requests::{RemoteCall, RemoteReply, RemoteRequest, RemoteResponse, Ticket};
pub use session::{Feedback, InteractionState, PromotionRequest, Session};
