//! WASM-compatible type definitions

use crate::Episode;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// WASM-compatible episode
///
/// Mirrors [`Episode`] with getters JS can call. Duration is whole seconds
/// as `u32` so JS sees a plain number instead of a `BigInt`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[wasm_bindgen]
pub struct WasmEpisode {
    title: String,
    members: String,
    thumbnail: String,
    duration: u32,
    url: String,
}

#[wasm_bindgen]
impl WasmEpisode {
    /// Create a new episode
    #[wasm_bindgen(constructor)]
    pub fn new(title: String, members: String, thumbnail: String, duration: u32, url: String) -> Self {
        Self {
            title,
            members,
            thumbnail,
            duration,
            url,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn members(&self) -> String {
        self.members.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn thumbnail(&self) -> String {
        self.thumbnail.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.url.clone()
    }
}

impl From<&Episode> for WasmEpisode {
    fn from(episode: &Episode) -> Self {
        Self {
            title: episode.title.clone(),
            members: episode.members.clone(),
            thumbnail: episode.thumbnail.clone(),
            duration: u32::try_from(episode.duration).unwrap_or(u32::MAX),
            url: episode.url.clone(),
        }
    }
}

impl From<WasmEpisode> for Episode {
    fn from(episode: WasmEpisode) -> Self {
        Self {
            title: episode.title,
            members: episode.members,
            thumbnail: episode.thumbnail,
            duration: u64::from(episode.duration),
            url: episode.url,
        }
    }
}
