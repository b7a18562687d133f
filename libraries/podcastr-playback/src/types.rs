//! Core types for the player

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable podcast episode
///
/// Supplied by the data layer and never mutated by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Credits line (hosts and guests)
    pub members: String,

    /// Artwork URL
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Media source URL
    pub url: String,
}

impl Episode {
    /// Episode length as a `Duration`
    pub fn length(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}

/// Coarse player status derived from the queue and the playing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// Queue is empty
    Idle,

    /// Episode loaded, not playing
    Paused,

    /// Episode loaded and playing
    Playing,
}

/// Read view of the store, recomputed on every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub is_player_visible: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub status: PlayerStatus,
}

/// Enabled/active flags for the player's buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlState {
    pub shuffle_enabled: bool,
    pub shuffle_active: bool,
    pub previous_enabled: bool,
    pub play_pause_enabled: bool,
    pub next_enabled: bool,
    pub loop_enabled: bool,
    pub loop_active: bool,
}

/// Format whole seconds as `HH:MM:SS`
///
/// Hours are not capped, so a 100 hour total renders as `100:00:00`.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
