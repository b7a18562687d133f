//! Property-based tests for the playback store
//!
//! Uses proptest to check the derived-state invariants across random
//! sequences of store operations.

mod common;

use common::{create_test_episodes, FakeMediaElement};
use podcastr_playback::{Episode, MediaEvent, PlayerConfig, PlayerStore, PlayerSurface};
use proptest::prelude::*;

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    PlaySingle,
    PlayFromList(usize, usize),
    TogglePlay,
    SetPlaying(bool),
    ToggleLoop,
    ToggleShuffle,
    Next,
    Previous,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::PlaySingle),
        (1usize..8).prop_flat_map(|len| (Just(len), 0..len))
            .prop_map(|(len, index)| Op::PlayFromList(len, index)),
        Just(Op::TogglePlay),
        any::<bool>().prop_map(Op::SetPlaying),
        Just(Op::ToggleLoop),
        Just(Op::ToggleShuffle),
        Just(Op::Next),
        Just(Op::Previous),
        Just(Op::Clear),
    ]
}

fn apply(store: &mut PlayerStore, op: &Op) {
    match op {
        Op::PlaySingle => store.play_single(single_episode()),
        Op::PlayFromList(len, index) => store.play_from_list(create_test_episodes(*len), *index),
        Op::TogglePlay => store.toggle_play(),
        Op::SetPlaying(playing) => store.set_playing_state(*playing),
        Op::ToggleLoop => store.toggle_loop(),
        Op::ToggleShuffle => store.toggle_shuffle(),
        Op::Next => store.play_next(),
        Op::Previous => store.play_previous(),
        Op::Clear => store.clear_player_state(),
    }
}

fn single_episode() -> Episode {
    common::create_test_episode("single")
}

// ===== Property Tests =====

proptest! {
    /// Property: derived flags always match their definitions
    #[test]
    fn derived_flags_match_definition(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let mut store = PlayerStore::new(PlayerConfig {
            shuffle_seed: Some(seed),
            ..PlayerConfig::default()
        });

        for op in &ops {
            apply(&mut store, op);

            let len = store.queue_len();
            let index = store.current_index();
            prop_assert_eq!(store.has_previous(), index > 0);
            prop_assert_eq!(store.has_next(), store.is_shuffling() || index + 1 < len);
        }
    }

    /// Property: with in-range inputs the index never leaves the queue
    #[test]
    fn index_stays_valid(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let mut store = PlayerStore::new(PlayerConfig {
            shuffle_seed: Some(seed),
            ..PlayerConfig::default()
        });

        for op in &ops {
            apply(&mut store, op);

            if store.queue_len() == 0 {
                prop_assert_eq!(store.current_index(), 0);
            } else {
                prop_assert!(store.current_index() < store.queue_len());
                prop_assert!(store.current_episode().is_some());
            }
        }
    }

    /// Property: toggling play twice is the identity
    #[test]
    fn toggle_play_is_involution(
        ops in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut store = PlayerStore::default();
        for op in &ops {
            apply(&mut store, op);
        }

        let before = store.is_playing();
        store.toggle_play();
        store.toggle_play();
        prop_assert_eq!(store.is_playing(), before);
    }

    /// Property: queue replacement always forces playing
    #[test]
    fn play_from_list_forces_playing(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        len in 1usize..10,
        pick in any::<prop::sample::Index>()
    ) {
        let mut store = PlayerStore::default();
        for op in &ops {
            apply(&mut store, op);
        }

        let index = pick.index(len);
        store.play_from_list(create_test_episodes(len), index);

        prop_assert!(store.is_playing());
        prop_assert_eq!(store.current_index(), index);
        prop_assert_eq!(store.queue_len(), len);
    }

    /// Property: the element ends up in the state the store asks for
    #[test]
    fn surface_converges_to_store(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..40)
    ) {
        let mut store = PlayerStore::new(PlayerConfig {
            shuffle_seed: Some(seed),
            ..PlayerConfig::default()
        });
        let mut surface = PlayerSurface::new(FakeMediaElement::new());

        for op in &ops {
            apply(&mut store, op);
            surface.sync(&mut store);

            // Deliver the echo for whatever the surface just commanded
            let paused = surface.media().paused;
            let echo = if paused { MediaEvent::Pause } else { MediaEvent::Play };
            surface.handle_media_event(&mut store, echo);

            match store.current_episode() {
                Some(episode) => {
                    prop_assert_eq!(surface.media().source.as_deref(), Some(episode.url.as_str()));
                    prop_assert_eq!(surface.media().paused, !store.is_playing());
                    prop_assert_eq!(surface.media().looping, store.is_looping());
                }
                None => prop_assert_eq!(surface.media().source.as_deref(), None),
            }
        }
    }
}
