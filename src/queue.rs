//! Episode queue with index-based navigation
//!
//! Insertion order is playback order. Navigation moves a cursor over the
//! list without mutating it, so going back always revisits the same
//! episode.

use crate::error::{PlayerError, Result};
use crate::types::Episode;

/// Ordered episode list plus the current cursor
///
/// Invariant: `current < episodes.len()` whenever the queue is non-empty,
/// and `current == 0` when it is empty. All index arithmetic is bounds
/// checked here so the player above never holds a dangling cursor.
#[derive(Debug, Clone, Default)]
pub struct EpisodeQueue {
    /// Episodes in playback order
    episodes: Vec<Episode>,

    /// Index of the current episode (meaningless while empty)
    current: usize,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self {
            episodes: Vec::new(),
            current: 0,
        }
    }

    /// Replace the queue with a single episode, cursor on it
    pub fn set_single(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current = 0;
    }

    /// Replace the queue and position the cursor
    ///
    /// Rejects an out-of-range `index` and leaves the queue untouched.
    /// An empty `episodes` list is accepted only with `index == 0`.
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if index != 0 && index >= episodes.len() {
            return Err(PlayerError::IndexOutOfBounds {
                index,
                len: episodes.len(),
            });
        }

        self.episodes = episodes;
        self.current = index;
        Ok(())
    }

    /// Empty the queue and reset the cursor
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current = 0;
    }

    /// Number of episodes in the queue
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// All episodes in playback order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Current cursor position
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Episode under the cursor, `None` while empty
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.current)
    }

    /// Check if a sequential next episode exists
    pub fn has_next_sequential(&self) -> bool {
        self.current + 1 < self.episodes.len()
    }

    /// Check if we can go back (for previous button)
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Advance the cursor by one
    ///
    /// Returns false (cursor unchanged) when already on the last episode.
    pub fn advance(&mut self) -> bool {
        if self.has_next_sequential() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor back by one
    ///
    /// Returns false (cursor unchanged) when already on the first episode.
    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor to an arbitrary in-range position (shuffle step)
    ///
    /// Returns false (cursor unchanged) when `index` is out of range.
    pub(crate) fn jump(&mut self, index: usize) -> bool {
        if index < self.episodes.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}
