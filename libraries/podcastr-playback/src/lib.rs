//! Podcastr - Playback State
//!
//! Platform-agnostic playback state and player surface for the Podcastr
//! footer player.
//!
//! This crate provides:
//! - Playback store (episode queue, current index, play/loop/shuffle flags)
//! - Derived navigation (`has_next`, `has_previous`, shuffle draws)
//! - Player surface that keeps a media element in sync with the store
//! - Control enablement and `HH:MM:SS` labels for the player UI
//! - Layered configuration (file + environment)
//! - Optional WASM bindings over `HtmlAudioElement` (feature `wasm`)
//!
//! # Architecture
//!
//! `podcastr-playback` knows nothing about the DOM outside the `wasm`
//! feature. The media element is provided through the [`MediaElement`]
//! trait, and the store is a plain value handed to whoever needs it.
//!
//! # Example: Store
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerStore};
//!
//! let mut store = PlayerStore::default();
//!
//! let episode = |slug: &str| Episode {
//!     title: format!("Episode {}", slug),
//!     members: "Diego e Richard".to_string(),
//!     thumbnail: format!("https://cdn.example.com/{}.jpg", slug),
//!     duration: 3600,
//!     url: format!("https://cdn.example.com/{}.mp3", slug),
//! };
//!
//! store.play_from_list(vec![episode("a"), episode("b"), episode("c")], 1);
//! assert!(store.is_playing());
//! assert!(store.has_previous());
//!
//! store.play_next();
//! assert_eq!(store.current_index(), 2);
//! assert!(!store.has_next());
//!
//! store.clear_player_state();
//! assert!(store.current_episode().is_none());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_playback::{MediaElement, MediaEvent, PlayerStore, PlayerSurface, Result};
//!
//! // Implement MediaElement for your platform
//! struct MyAudio {
//!     // ... platform-specific player
//! }
//!
//! impl MediaElement for MyAudio {
//!     fn set_source(&mut self, url: &str) {}
//!     fn clear_source(&mut self) {}
//!     fn set_autoplay(&mut self, autoplay: bool) {}
//!     fn set_loop(&mut self, looping: bool) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn is_paused(&self) -> bool { true }
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn set_current_time(&mut self, seconds: f64) {}
//! }
//!
//! let mut store = PlayerStore::default();
//! let mut surface = PlayerSurface::new(MyAudio {});
//!
//! // After every batch of store mutations
//! surface.sync(&mut store);
//!
//! // From the platform's event callbacks
//! surface.handle_media_event(&mut store, MediaEvent::Ended);
//! ```

pub mod config;
mod error;
mod events;
mod media;
mod queue;
mod shuffle;
mod store;
mod surface;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use config::PlayerConfig;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use media::{MediaElement, MediaEvent, UnknownMediaEvent};
pub use store::PlayerStore;
pub use surface::{control_state, duration_label, PlayerSurface};
pub use types::{format_duration, ControlState, Episode, PlayerSnapshot, PlayerStatus};
