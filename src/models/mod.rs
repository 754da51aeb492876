mod cues;
mod game;

pub use cues::{CuePlayer, cue_name};
pub use game::GameModel;
