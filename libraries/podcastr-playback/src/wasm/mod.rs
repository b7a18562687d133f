//! WASM bindings for podcastr-playback
//!
//! This module provides WebAssembly bindings for the store and surface,
//! allowing the player to run in the browser against a real
//! `HtmlAudioElement`.

pub mod media;
pub mod player;
pub mod types;

pub use player::WasmPlayer;
pub use types::WasmEpisode;
