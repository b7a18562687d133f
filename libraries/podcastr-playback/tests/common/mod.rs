//! Shared helpers for integration tests

#![allow(dead_code)]

use podcastr_playback::{Episode, MediaElement, PlaybackError, Result};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn create_test_episode(slug: &str) -> Episode {
    Episode {
        title: format!("Episode {}", slug),
        members: "Diego e Richard".to_string(),
        thumbnail: format!("https://cdn.example.com/{}.jpg", slug),
        duration: 1800,
        url: format!("https://cdn.example.com/{}.mp3", slug),
    }
}

pub fn create_test_episodes(count: usize) -> Vec<Episode> {
    (0..count)
        .map(|i| create_test_episode(&i.to_string()))
        .collect()
}

/// Imperative command received by [`FakeMediaElement`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetSource(String),
    ClearSource,
    SetAutoplay(bool),
    SetLoop(bool),
    Play,
    Pause,
    SetCurrentTime(f64),
}

/// In-memory media element that records every command
///
/// `play()` and `pause()` flip `paused` synchronously; the matching DOM
/// events are delivered by the test through `handle_media_event`.
#[derive(Debug)]
pub struct FakeMediaElement {
    pub commands: Vec<Command>,
    pub source: Option<String>,
    pub paused: bool,
    pub looping: bool,
    pub current_time: f64,
    pub refuse_play: bool,
}

impl FakeMediaElement {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            source: None,
            paused: true,
            looping: false,
            current_time: 0.0,
            refuse_play: false,
        }
    }

    /// Commands issued since the last call
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Count of play/pause commands in the log
    pub fn transport_commands(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Play | Command::Pause))
            .count()
    }
}

impl MediaElement for FakeMediaElement {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.current_time = 0.0;
        self.commands.push(Command::SetSource(url.to_string()));
    }

    fn clear_source(&mut self) {
        self.source = None;
        self.commands.push(Command::ClearSource);
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.commands.push(Command::SetAutoplay(autoplay));
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
        self.commands.push(Command::SetLoop(looping));
    }

    fn play(&mut self) -> Result<()> {
        if self.refuse_play {
            return Err(PlaybackError::Media("NotAllowedError".to_string()));
        }
        self.paused = false;
        self.commands.push(Command::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
        self.commands.push(Command::Pause);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
        self.commands.push(Command::SetCurrentTime(seconds));
    }
}
