//! WASM-compatible player wrapper
//!
//! One `WasmPlayer` lives for the page session and is shared by every
//! component that needs playback state. The method names follow the
//! player context the web UI already consumes.

use super::types::WasmEpisode;
use crate::{
    control_state, duration_label, Episode, MediaEvent, PlaybackError, PlayerConfig, PlayerStore,
    PlayerSurface,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// WASM-compatible player
///
/// Wraps the store and, once an `<audio>` element is attached, the surface
/// driving it.
#[wasm_bindgen]
pub struct WasmPlayer {
    store: PlayerStore,
    surface: Option<PlayerSurface<HtmlAudioElement>>,

    // Re-render callback, receives a state snapshot
    on_change: Option<Function>,

    // Progress last reported through on_change
    notified_progress: u64,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a new player with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self::with_config(PlayerConfig::default())
    }

    /// Create a player from a JSON-like config object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn from_js_config(config: JsValue) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let config: PlayerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        Ok(Self::with_config(config))
    }

    // ===== Media Element =====

    /// Attach the `<audio>` element the player should drive
    #[wasm_bindgen(js_name = attachAudio)]
    pub fn attach_audio(&mut self, audio: HtmlAudioElement) {
        self.surface = Some(PlayerSurface::new(audio));
        self.commit();
    }

    /// Detach the `<audio>` element (component unmounted)
    #[wasm_bindgen(js_name = detachAudio)]
    pub fn detach_audio(&mut self) {
        self.surface = None;
    }

    /// Forward a DOM media event by name
    ///
    /// The host listens on the attached element for `timeupdate`,
    /// `loadedmetadata`, `ended`, `play`, `pause` and `playrefused` (fired
    /// when the browser rejects a play request) and passes the name through.
    /// `onChange` fires for store changes and for progress changes.
    #[wasm_bindgen(js_name = handleMediaEvent)]
    pub fn handle_media_event(&mut self, name: &str) -> Result<(), JsValue> {
        let event: MediaEvent = name
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        if let Some(surface) = self.surface.as_mut() {
            surface.handle_media_event(&mut self.store, event);
        }
        self.commit();
        Ok(())
    }

    /// Seek to position in seconds
    pub fn seek(&mut self, seconds: f64) -> Result<(), JsValue> {
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| to_js_error(&PlaybackError::NoEpisodeLoaded))?;
        surface
            .seek(&self.store, seconds)
            .map_err(|e| to_js_error(&e))?;

        self.commit();
        Ok(())
    }

    /// Elapsed whole seconds
    pub fn progress(&self) -> u64 {
        self.surface.as_ref().map_or(0, |s| s.progress())
    }

    #[wasm_bindgen(js_name = progressLabel)]
    pub fn progress_label(&self) -> String {
        self.surface
            .as_ref()
            .map_or_else(|| crate::format_duration(0), |s| s.progress_label())
    }

    #[wasm_bindgen(js_name = durationLabel)]
    pub fn duration_label(&self) -> String {
        duration_label(&self.store)
    }

    // ===== Playback Control =====

    /// Play a single episode
    pub fn play(&mut self, episode: WasmEpisode) {
        self.store.play_single(episode.into());
        self.commit();
    }

    /// Play a list of episodes starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let episodes: Vec<Episode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        self.store.play_from_list(episodes, index);
        self.commit();
        Ok(())
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.store.toggle_play();
        self.commit();
    }

    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, playing: bool) {
        self.store.set_playing_state(playing);
        self.commit();
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.store.toggle_loop();
        self.commit();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.store.toggle_shuffle();
        self.commit();
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.store.play_next();
        self.commit();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.store.play_previous();
        self.commit();
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.store.clear_player_state();
        self.commit();
    }

    /// Show or hide the player panel
    #[wasm_bindgen(js_name = toggleMenuPlay)]
    pub fn toggle_menu_play(&mut self) {
        self.store.toggle_player_visibility();
        self.commit();
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.store.has_next()
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.store.has_previous()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.store.is_playing()
    }

    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.store.is_looping()
    }

    #[wasm_bindgen(js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.store.is_shuffling()
    }

    #[wasm_bindgen(js_name = currentEpisodeIndex)]
    pub fn current_episode_index(&self) -> usize {
        self.store.current_index()
    }

    #[wasm_bindgen(js_name = currentEpisode)]
    pub fn current_episode(&self) -> Option<WasmEpisode> {
        self.store.current_episode().map(WasmEpisode::from)
    }

    /// Whole state as a plain object
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.store.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Button enablement as a plain object
    pub fn controls(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&control_state(&self.store)).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register the re-render callback
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }
}

impl WasmPlayer {
    fn with_config(config: PlayerConfig) -> Self {
        Self {
            store: PlayerStore::new(config),
            surface: None,
            on_change: None,
            notified_progress: 0,
        }
    }

    /// Sync the element, then notify JS once per batch of store events or
    /// progress change
    fn commit(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.sync(&mut self.store);
        }

        let store_changed = !self.store.drain_events().is_empty();
        let progress = self.progress();
        let progressed = progress != self.notified_progress;
        self.notified_progress = progress;

        if !store_changed && !progressed {
            return;
        }

        if let Some(ref cb) = self.on_change {
            if let Ok(snapshot) = serde_wasm_bindgen::to_value(&self.store.snapshot()) {
                cb.call1(&JsValue::NULL, &snapshot).ok();
            }
        }
    }
}

/// Default implementation
impl Default for WasmPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(error: &PlaybackError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
