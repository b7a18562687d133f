//! Player surface
//!
//! Binds a [`MediaElement`] to a [`PlayerStore`]. The surface is the only
//! place that issues imperative commands to the element, and the only place
//! that turns element events back into store calls.
//!
//! ```text
//!   user action ──► PlayerStore ──sync()──► MediaElement
//!                        ▲                       │
//!                        └── handle_media_event ◄┘
//! ```
//!
//! Play/pause reconciliation compares `is_playing` with the element's actual
//! paused state and only commands the element on a difference. The play or
//! pause event the element fires in response is remembered as an echo and
//! swallowed, so it never loops back into the store.

use crate::error::{PlaybackError, Result};
use crate::media::{MediaElement, MediaEvent};
use crate::store::PlayerStore;
use crate::types::{format_duration, ControlState};
use tracing::{debug, trace, warn};

/// Source currently loaded into the element
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadedEpisode {
    index: usize,
    url: String,
}

/// Presentation-side driver of a media element
#[derive(Debug)]
pub struct PlayerSurface<M: MediaElement> {
    media: M,

    /// Elapsed whole seconds shown on the progress bar
    progress: u64,

    loaded: Option<LoadedEpisode>,

    /// Loop flag last pushed to the element
    applied_looping: Option<bool>,

    /// Event expected back from the last play()/pause() we issued
    pending_echo: Option<MediaEvent>,
}

impl<M: MediaElement> PlayerSurface<M> {
    /// Take ownership of a media element
    pub fn new(media: M) -> Self {
        Self {
            media,
            progress: 0,
            loaded: None,
            applied_looping: None,
            pending_echo: None,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Elapsed whole seconds
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Elapsed time as `HH:MM:SS`
    pub fn progress_label(&self) -> String {
        format_duration(self.progress)
    }

    // ===== Reconciliation =====

    /// Bring the media element in line with the store
    ///
    /// Call after every batch of store mutations. Idempotent: a second call
    /// with no intervening change issues no commands.
    ///
    /// Loading a new episode counts as a play request, the same way an
    /// autoplaying element would start on its own.
    pub fn sync(&mut self, store: &mut PlayerStore) {
        let Some(episode) = store.current_episode() else {
            self.detach();
            return;
        };

        let wanted = LoadedEpisode {
            index: store.current_index(),
            url: episode.url.clone(),
        };

        if self.loaded.as_ref() != Some(&wanted) {
            debug!(index = wanted.index, url = %wanted.url, "Loading episode into media element");
            self.media.set_autoplay(true);
            self.media.set_source(&wanted.url);
            self.loaded = Some(wanted);
            self.progress = 0;
            self.pending_echo = None;
            store.set_playing_state(true);
        }

        if self.applied_looping != Some(store.is_looping()) {
            self.media.set_loop(store.is_looping());
            self.applied_looping = Some(store.is_looping());
        }

        self.reconcile_playback(store);
    }

    fn reconcile_playback(&mut self, store: &mut PlayerStore) {
        let wants_playing = store.is_playing();
        let is_paused = self.media.is_paused();

        if wants_playing && is_paused {
            match self.media.play() {
                Ok(()) => {
                    trace!("Issued play");
                    self.pending_echo = Some(MediaEvent::Play);
                }
                Err(err) => {
                    warn!(error = %err, "Media element refused to play");
                    self.play_refused(store);
                }
            }
        } else if !wants_playing && !is_paused {
            trace!("Issued pause");
            self.media.pause();
            self.pending_echo = Some(MediaEvent::Pause);
        }
    }

    fn detach(&mut self) {
        if self.loaded.take().is_none() {
            return;
        }

        debug!("No current episode, detaching media element");
        self.pending_echo = None;
        if !self.media.is_paused() {
            self.media.pause();
            self.pending_echo = Some(MediaEvent::Pause);
        }
        self.media.clear_source();
        self.progress = 0;
    }

    /// The element refused a play request, immediately or after accepting it
    fn play_refused(&mut self, store: &mut PlayerStore) {
        if self.pending_echo == Some(MediaEvent::Play) {
            self.pending_echo = None;
        }
        store.set_playing_state(false);
    }

    // ===== Media Events =====

    /// Feed a media element event back into the surface and store
    pub fn handle_media_event(&mut self, store: &mut PlayerStore, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate => {
                self.progress = whole_seconds(self.media.current_time());
            }
            MediaEvent::LoadedMetadata => {
                self.media.set_current_time(0.0);
                self.progress = 0;
            }
            MediaEvent::Ended => {
                self.handle_ended(store);
                self.sync(store);
            }
            MediaEvent::PlayRefused => {
                warn!("Media element rejected a pending play request");
                self.play_refused(store);
            }
            MediaEvent::Play | MediaEvent::Pause => {
                if self.pending_echo.take() == Some(event) {
                    trace!(%event, "Swallowed echo event");
                    return;
                }

                debug!(%event, "Media element changed playback on its own");
                store.set_playing_state(event == MediaEvent::Play);
                self.sync(store);
            }
        }
    }

    fn handle_ended(&mut self, store: &mut PlayerStore) {
        if !store.has_next() {
            debug!("Episode ended with nothing queued, clearing player");
            store.clear_player_state();
            return;
        }

        let index = store.current_index();
        store.play_next();

        // Shuffle can land on the episode that just ended
        if store.current_index() == index {
            debug!(index, "Shuffle repeated the ended episode, restarting it");
            self.media.set_current_time(0.0);
            self.progress = 0;
            store.set_playing_state(true);
        }
    }

    // ===== Seek =====

    /// Jump to `seconds` in the current episode
    ///
    /// Clamped to the episode duration.
    pub fn seek(&mut self, store: &PlayerStore, seconds: f64) -> Result<()> {
        let episode = store
            .current_episode()
            .ok_or(PlaybackError::NoEpisodeLoaded)?;

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(PlaybackError::InvalidSeekPosition(seconds));
        }

        let position = seconds.min(episode.duration as f64);
        self.media.set_current_time(position);
        self.progress = whole_seconds(position);

        Ok(())
    }
}

/// Current episode duration as `HH:MM:SS`, `00:00:00` when idle
pub fn duration_label(store: &PlayerStore) -> String {
    format_duration(store.current_episode().map_or(0, |e| e.duration))
}

/// Button state for the player controls
///
/// Everything is disabled without a current episode. Shuffle also needs
/// more than one queued episode; previous and next follow `has_previous`
/// and `has_next`.
pub fn control_state(store: &PlayerStore) -> ControlState {
    let has_episode = store.current_episode().is_some();

    ControlState {
        shuffle_enabled: has_episode && store.queue_len() > 1,
        shuffle_active: store.is_shuffling(),
        previous_enabled: has_episode && store.has_previous(),
        play_pause_enabled: has_episode,
        next_enabled: has_episode && store.has_next(),
        loop_enabled: has_episode,
        loop_active: store.is_looping(),
    }
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    }
}
