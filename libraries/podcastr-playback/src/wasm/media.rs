//! `MediaElement` for the browser's `<audio>` element

use crate::error::{PlaybackError, Result};
use crate::media::{MediaElement, MediaEvent};
use tracing::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Event, HtmlAudioElement, HtmlMediaElement};

// Trait methods share names with the DOM ones, so always go through the
// base element to reach the inherent methods.
fn dom(audio: &HtmlAudioElement) -> &HtmlMediaElement {
    audio
}

impl MediaElement for HtmlAudioElement {
    fn set_source(&mut self, url: &str) {
        dom(self).set_src(url);
    }

    fn clear_source(&mut self) {
        // Removing the attribute alone keeps the old resource buffered
        if let Err(e) = dom(self).remove_attribute("src") {
            warn!(error = ?e, "Failed to remove audio source");
        }
        dom(self).load();
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        dom(self).set_autoplay(autoplay);
    }

    fn set_loop(&mut self, looping: bool) {
        dom(self).set_loop(looping);
    }

    /// Synchronous throws come back as `Err`. A rejected promise (autoplay
    /// policy, unsupported source) is re-dispatched on the element as a
    /// `playrefused` event for the host to forward like any other.
    fn play(&mut self) -> Result<()> {
        let promise = dom(self)
            .play()
            .map_err(|e| PlaybackError::Media(format!("{:?}", e)))?;

        let audio = self.clone();
        spawn_local(async move {
            let Err(reason) = JsFuture::from(promise).await else {
                return;
            };
            warn!(error = ?reason, "Audio element rejected play()");

            match Event::new(MediaEvent::PlayRefused.as_str()) {
                Ok(event) => {
                    if let Err(e) = audio.dispatch_event(&event) {
                        warn!(error = ?e, "Failed to dispatch play refusal");
                    }
                }
                Err(e) => warn!(error = ?e, "Failed to create play refusal event"),
            }
        });

        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = dom(self).pause() {
            warn!(error = ?e, "Audio element refused to pause");
        }
    }

    fn is_paused(&self) -> bool {
        dom(self).paused()
    }

    fn current_time(&self) -> f64 {
        dom(self).current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        dom(self).set_current_time(seconds);
    }
}
