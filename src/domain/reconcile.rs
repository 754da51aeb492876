//! Applying an authoritative game state to the session.

use log::{debug, info};

use crate::domain::coords::Orientation;
use crate::domain::session::{CallKind, Feedback, Session};
use crate::domain::{GameStatus, GameUpdate};

impl Session {
    /// Overwrite board, side to move and status with the authority's view and
    /// drop every piece of transient interaction state.
    pub(crate) fn reconcile(&mut self, update: GameUpdate, cause: CallKind) {
        if let CallKind::NewGame(setup) = cause {
            self.player = setup.player;
            self.orientation = Orientation::for_player(setup.player);
            self.depth = setup.depth;
            self.started = true;
        }
        self.board = update.board;
        self.side_to_move = update.side_to_move;
        self.status = GameStatus::from_flags(update.check, update.checkmate, update.stalemate);
        self.notice = None;
        self.clear_interaction();

        self.feedback.push(match cause {
            CallKind::NewGame(_) => Feedback::GameStarted,
            CallKind::SubmitMove | CallKind::BotMove => Feedback::MoveApplied,
        });
        match self.status {
            GameStatus::Check => self.feedback.push(Feedback::Check),
            GameStatus::Checkmate | GameStatus::Stalemate => {
                info!("game over: {:?}", self.status);
                self.feedback.push(Feedback::GameOver(self.status));
            }
            GameStatus::Ongoing => {}
        }

        debug!(
            "reconciled after {:?}: {} to move, {:?}",
            cause,
            self.side_to_move.name(),
            self.status
        );
    }
}
