//! Client configuration from an optional JSON file and environment variables.

use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use log::info;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::PieceColor;

/// Default bot search depth
pub const DEFAULT_DEPTH: u32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the move authority
    pub server_url: String,

    /// Side the local player takes; the board is drawn from this side
    pub player: PieceColor,

    /// Search depth passed to the bot
    pub depth: u32,

    /// Cue volume, 0.0 (muted) to 1.0
    pub volume: f32,

    /// Play against the built-in authority instead of the server
    pub offline: bool,

    /// Timeout for a single remote call, bot searches included
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            player: PieceColor::White,
            depth: DEFAULT_DEPTH,
            volume: 0.5,
            offline: false,
            request_timeout_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Defaults, then the file named by `CHESS_CLIENT_CONFIG`, then `CHESS_*` overrides.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("CHESS_CLIENT_CONFIG") {
            Ok(path) => {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                info!("loaded config from {}", path);
                Self::from_json(&text)?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config file")
    }

    /// Apply `CHESS_*` overrides read through `lookup`
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CHESS_SERVER_URL") {
            self.server_url = url;
        }
        if let Some(player) = lookup("CHESS_PLAYER") {
            self.player = match player.to_ascii_lowercase().as_str() {
                "white" | "w" => PieceColor::White,
                "black" | "b" => PieceColor::Black,
                other => bail!("CHESS_PLAYER must be white or black, got {:?}", other),
            };
        }
        if let Some(depth) = lookup("CHESS_DEPTH") {
            self.depth = depth.parse().context("CHESS_DEPTH")?;
        }
        if let Some(volume) = lookup("CHESS_VOLUME") {
            self.volume = volume.parse().context("CHESS_VOLUME")?;
        }
        if let Some(offline) = lookup("CHESS_OFFLINE") {
            self.offline = match offline.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => bail!("CHESS_OFFLINE must be true or false, got {:?}", other),
            };
        }
        if let Some(timeout) = lookup("CHESS_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout.parse().context("CHESS_TIMEOUT_SECS")?;
        }
        Ok(())
    }

    /// Range checks only; values are otherwise passed through
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            bail!("depth must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.volume) {
            bail!("volume must be between 0.0 and 1.0, got {}", self.volume);
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// JSON schema of the config file
    pub fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(ClientConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
