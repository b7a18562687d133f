//! Player Events
//!
//! Event-based communication for re-rendering after store mutations.
//! The store pushes an event whenever observable state changes; the host
//! drains them (see [`PlayerStore::drain_events`](crate::PlayerStore::drain_events))
//! and re-renders once per batch.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// `is_playing` changed
    PlayingChanged {
        /// The new value
        is_playing: bool,
    },

    /// The current index moved within the same queue
    EpisodeChanged {
        /// New current index
        index: usize,
        /// Previous current index
        previous_index: usize,
    },

    /// Queue replaced by "play single" or "play list"
    QueueReplaced {
        /// New queue length
        length: usize,
        /// Index playback starts from
        index: usize,
    },

    /// Queue emptied
    QueueCleared,

    /// Loop flag changed
    LoopChanged {
        /// The new value
        is_looping: bool,
    },

    /// Shuffle flag changed
    ShuffleChanged {
        /// The new value
        is_shuffling: bool,
    },

    /// Player panel shown or hidden
    VisibilityChanged {
        /// The new value
        is_visible: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_value(PlayerEvent::PlayingChanged { is_playing: true }).unwrap();
        assert_eq!(json["type"], "playingChanged");
        assert_eq!(json["is_playing"], true);

        let json = serde_json::to_value(PlayerEvent::QueueCleared).unwrap();
        assert_eq!(json["type"], "queueCleared");
    }
}
