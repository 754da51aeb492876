//! Feedback cues for moves, checks and game ends.
//!
//! A `CuePlayer` lives exactly as long as the game model that owns it: it is
//! created with the configured volume and torn down with the window.

use log::{debug, info};

use crate::domain::{Feedback, GameStatus};

pub struct CuePlayer {
    volume: f32,
    last: Option<Feedback>,
}

impl CuePlayer {
    pub fn init(volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        info!("cues ready at volume {:.2}", volume);
        Self { volume, last: None }
    }

    pub fn is_muted(&self) -> bool {
        self.volume <= 0.0
    }

    /// Most recent cue played
    pub fn last(&self) -> Option<Feedback> {
        self.last
    }

    pub fn play(&mut self, feedback: Feedback) {
        self.last = Some(feedback);
        if self.is_muted() {
            return;
        }
        debug!("cue {} at volume {:.2}", cue_name(feedback), self.volume);
    }
}

impl Drop for CuePlayer {
    fn drop(&mut self) {
        debug!("cues torn down");
    }
}

/// Sound name for a cue
pub fn cue_name(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::GameStarted => "start",
        Feedback::MoveApplied => "move",
        Feedback::Check => "check",
        Feedback::GameOver(GameStatus::Stalemate) => "draw",
        Feedback::GameOver(_) => "game-end",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamped() {
        assert_eq!(CuePlayer::init(3.0).volume, 1.0);
        assert!(CuePlayer::init(-1.0).is_muted());
    }

    #[test]
    fn test_last_cue_recorded_even_when_muted() {
        let mut cues = CuePlayer::init(0.0);
        cues.play(Feedback::Check);
        assert_eq!(cues.last(), Some(Feedback::Check));
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(cue_name(Feedback::GameOver(GameStatus::Checkmate)), "game-end");
        assert_eq!(cue_name(Feedback::GameOver(GameStatus::Stalemate)), "draw");
        assert_eq!(cue_name(Feedback::MoveApplied), "move");
    }
}
