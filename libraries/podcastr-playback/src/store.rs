//! Playback state store
//!
//! One store per application session. Every component that shows or
//! changes playback state receives it by reference; all mutation goes through
//! the methods below, never through field writes.

use crate::config::PlayerConfig;
use crate::events::PlayerEvent;
use crate::queue::EpisodeQueue;
use crate::shuffle::ShuffleSource;
use crate::types::{Episode, PlayerSnapshot, PlayerStatus};
use tracing::debug;

/// Playback state container
///
/// Holds the episode queue, the current position and the independent
/// playing/looping/shuffling flags. `has_next` and `has_previous` are
/// recomputed from that state on every call.
///
/// No operation fails. Passing an out-of-range index to
/// [`play_from_list`](Self::play_from_list) is a caller contract violation:
/// the index is stored as given and [`current_episode`](Self::current_episode)
/// returns `None`.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    queue: EpisodeQueue,

    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    is_player_visible: bool,

    shuffle: ShuffleSource,

    pending_events: Vec<PlayerEvent>,
}

impl PlayerStore {
    /// Create a store with an empty queue
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffle,
            is_player_visible: config.show_player,
            shuffle: ShuffleSource::new(config.shuffle_seed),
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Replacement =====

    /// Play a single episode, replacing the queue
    pub fn play_single(&mut self, episode: Episode) {
        debug!(title = %episode.title, "Playing single episode");
        self.replace_queue(vec![episode], 0);
    }

    /// Play `list` starting at `index`, replacing the queue
    ///
    /// `index` is not range-checked.
    pub fn play_from_list(&mut self, list: Vec<Episode>, index: usize) {
        debug!(length = list.len(), index, "Playing from list");
        self.replace_queue(list, index);
    }

    fn replace_queue(&mut self, episodes: Vec<Episode>, index: usize) {
        let length = episodes.len();
        self.queue.replace(episodes, index);
        self.pending_events
            .push(PlayerEvent::QueueReplaced { length, index });
        self.apply_playing(true);
    }

    /// Empty the queue and reset the index
    ///
    /// Playing, looping and shuffling flags are left as they are.
    pub fn clear_player_state(&mut self) {
        if self.queue.is_empty() && self.queue.current_index() == 0 {
            return;
        }

        debug!("Clearing player state");
        self.queue.clear();
        self.pending_events.push(PlayerEvent::QueueCleared);
    }

    // ===== Playback Flags =====

    /// Flip `is_playing`
    pub fn toggle_play(&mut self) {
        self.apply_playing(!self.is_playing);
    }

    /// Set `is_playing` explicitly
    ///
    /// Used to mirror play/pause reported by the media element itself.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.apply_playing(playing);
    }

    fn apply_playing(&mut self, playing: bool) {
        if self.is_playing == playing {
            return;
        }

        debug!(playing, "Playing state changed");
        self.is_playing = playing;
        self.pending_events
            .push(PlayerEvent::PlayingChanged { is_playing: playing });
    }

    /// Flip `is_looping`
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!(looping = self.is_looping, "Loop toggled");
        self.pending_events.push(PlayerEvent::LoopChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip `is_shuffling`
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!(shuffling = self.is_shuffling, "Shuffle toggled");
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Show or hide the player panel
    pub fn toggle_player_visibility(&mut self) {
        self.is_player_visible = !self.is_player_visible;
        self.pending_events.push(PlayerEvent::VisibilityChanged {
            is_visible: self.is_player_visible,
        });
    }

    // ===== Navigation =====

    /// Move to the next episode
    ///
    /// Shuffling: jump to a uniformly random index in `[0, len)`, which may
    /// be the current one. Otherwise advance by one when `has_next`, else do
    /// nothing.
    pub fn play_next(&mut self) {
        let previous_index = self.queue.current_index();

        if self.is_shuffling {
            let Some(index) = self.shuffle.pick_index(self.queue.len()) else {
                return;
            };
            debug!(index, "Shuffle picked next episode");
            self.queue.set_index(index);
        } else if !self.queue.advance() {
            return;
        }

        self.emit_episode_changed(previous_index);
    }

    /// Move to the previous episode when `has_previous`
    pub fn play_previous(&mut self) {
        let previous_index = self.queue.current_index();
        if self.queue.go_back() {
            self.emit_episode_changed(previous_index);
        }
    }

    fn emit_episode_changed(&mut self, previous_index: usize) {
        let index = self.queue.current_index();
        if index != previous_index {
            debug!(index, previous_index, "Current episode changed");
            self.pending_events.push(PlayerEvent::EpisodeChanged {
                index,
                previous_index,
            });
        }
    }

    // ===== State Queries =====

    /// Whether "previous" would move
    pub fn has_previous(&self) -> bool {
        self.queue.can_go_back()
    }

    /// Whether "next" would move (always true while shuffling)
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.queue.has_next_in_order()
    }

    /// Episode at the current index
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    pub fn episode_queue(&self) -> &[Episode] {
        self.queue.episodes()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn is_player_visible(&self) -> bool {
        self.is_player_visible
    }

    /// Idle / Paused / Playing
    pub fn status(&self) -> PlayerStatus {
        match (self.queue.is_empty(), self.is_playing) {
            (true, _) => PlayerStatus::Idle,
            (false, false) => PlayerStatus::Paused,
            (false, true) => PlayerStatus::Playing,
        }
    }

    /// Owned read view of the whole state
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.queue.episodes().to_vec(),
            current_episode_index: self.queue.current_index(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            is_player_visible: self.is_player_visible,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            status: self.status(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain. Hosts re-render
    /// when this is non-empty.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
