//! Episode queue with index-based navigation
//!
//! The queue never reorders or consumes episodes. Navigation only moves
//! `current_index`, so "previous" always lands on the episode that was there
//! before.

use crate::types::Episode;

/// Ordered episode list plus a pointer to the active entry
#[derive(Debug, Clone, Default)]
pub struct EpisodeQueue {
    /// Episodes in playback order
    episodes: Vec<Episode>,

    /// Active position. Stored verbatim, see [`EpisodeQueue::replace`].
    current_index: usize,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue and point at `index`
    ///
    /// `index` is not range-checked. An out-of-range index leaves
    /// [`current`](Self::current) returning `None` until navigation or a new
    /// replacement brings it back in range.
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) {
        self.episodes = episodes;
        self.current_index = index;
    }

    /// Empty the queue and reset the index to 0
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current_index = 0;
    }

    /// Episode at the current index, if any
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    /// All episodes in order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Jump to an index without range checks
    pub(crate) fn set_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Whether there is an entry before the current one
    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    /// Whether sequential navigation has an entry after the current one
    pub fn has_next_in_order(&self) -> bool {
        self.current_index.saturating_add(1) < self.episodes.len()
    }

    /// Move one step forward; returns false at the end of the queue
    pub fn advance(&mut self) -> bool {
        if self.has_next_in_order() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Move one step back; returns false at the start of the queue
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_episode(slug: &str) -> Episode {
        Episode {
            title: format!("Episode {}", slug),
            members: "Host".to_string(),
            thumbnail: format!("https://cdn.example.com/{}.jpg", slug),
            duration: 1800,
            url: format!("https://cdn.example.com/{}.mp3", slug),
        }
    }

    fn three_episodes() -> Vec<Episode> {
        vec![
            create_test_episode("a"),
            create_test_episode("b"),
            create_test_episode("c"),
        ]
    }

    #[test]
    fn create_empty_queue() {
        let queue = EpisodeQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.current_index(), 0);
        assert!(queue.current().is_none());
    }

    #[test]
    fn replace_points_at_index() {
        let mut queue = EpisodeQueue::new();
        queue.replace(three_episodes(), 1);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.current().unwrap().title, "Episode b");
    }

    #[test]
    fn advance_stops_at_end() {
        let mut queue = EpisodeQueue::new();
        queue.replace(three_episodes(), 1);

        assert!(queue.advance());
        assert_eq!(queue.current_index(), 2);
        assert!(!queue.advance());
        assert_eq!(queue.current_index(), 2);
    }

    #[test]
    fn go_back_stops_at_start() {
        let mut queue = EpisodeQueue::new();
        queue.replace(three_episodes(), 1);

        assert!(queue.go_back());
        assert_eq!(queue.current_index(), 0);
        assert!(!queue.go_back());
        assert_eq!(queue.current_index(), 0);
    }

    #[test]
    fn out_of_range_index_is_kept() {
        let mut queue = EpisodeQueue::new();
        queue.replace(three_episodes(), 7);

        assert_eq!(queue.current_index(), 7);
        assert!(queue.current().is_none());
        assert!(queue.can_go_back());
        assert!(!queue.has_next_in_order());

        // Stepping back walks toward the valid range one index at a time
        assert!(queue.go_back());
        assert_eq!(queue.current_index(), 6);
    }

    #[test]
    fn clear_resets_index() {
        let mut queue = EpisodeQueue::new();
        queue.replace(three_episodes(), 2);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), 0);
    }
}
