//! Platform-agnostic media element trait
//!
//! Abstracts the audio element the player surface drives (an
//! `HtmlAudioElement` in the browser, a fake in tests, a native backend
//! elsewhere).

use crate::error::Result;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Imperative media element
///
/// The surface depends on exactly these affordances. Positions are in
/// seconds, matching the DOM media API.
#[cfg_attr(test, mockall::automock)]
pub trait MediaElement {
    /// Load a source URL
    fn set_source(&mut self, url: &str);

    /// Detach the current source
    fn clear_source(&mut self);

    /// Start playing as soon as a source is loaded
    fn set_autoplay(&mut self, autoplay: bool);

    /// Native loop: replay from the start instead of ending
    fn set_loop(&mut self, looping: bool);

    /// Start or resume playback
    ///
    /// May be refused (autoplay policy, unsupported source). Backends that
    /// only learn about a refusal later report it as
    /// [`MediaEvent::PlayRefused`].
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Whether the element is paused
    fn is_paused(&self) -> bool;

    /// Playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position
    fn set_current_time(&mut self, seconds: f64);
}

/// Signals emitted by a media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// Periodic progress tick
    TimeUpdate,

    /// Metadata for a new source is available
    LoadedMetadata,

    /// Playback reached the end (never fires while looping)
    Ended,

    /// Element started playing
    Play,

    /// Element paused
    Pause,

    /// A play request accepted by `play()` was rejected afterwards
    PlayRefused,
}

impl MediaEvent {
    /// DOM event name
    pub fn as_str(self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::Ended => "ended",
            MediaEvent::Play => "play",
            MediaEvent::Pause => "pause",
            MediaEvent::PlayRefused => "playrefused",
        }
    }
}

impl fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised DOM event name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media event: {0}")]
pub struct UnknownMediaEvent(pub String);

impl FromStr for MediaEvent {
    type Err = UnknownMediaEvent;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "timeupdate" => Ok(MediaEvent::TimeUpdate),
            "loadedmetadata" => Ok(MediaEvent::LoadedMetadata),
            "ended" => Ok(MediaEvent::Ended),
            "play" => Ok(MediaEvent::Play),
            "pause" => Ok(MediaEvent::Pause),
            "playrefused" => Ok(MediaEvent::PlayRefused),
            other => Err(UnknownMediaEvent(other.to_string())),
        }
    }
}
