//! Run configuration read from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

/// Host-side settings; the board itself is not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for piece selection and commentary.
    pub seed: u32,
    /// Input poll budget per frame, in milliseconds.
    pub frame_ms: u32,
    /// Where to append JSON-lines engine events, if anywhere.
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    ///
    /// `BLOCKFALL_SEED`, `BLOCKFALL_FRAME_MS`, `BLOCKFALL_LOG_PATH`. Values
    /// that fail to parse fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(FRAME_MS);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
