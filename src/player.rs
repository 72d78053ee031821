//! Player core - state and navigation
//!
//! Owns the episode queue and the preference flags, and implements the
//! next/previous algorithm including the shuffle step

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    error::Result,
    events::PlayerEvent,
    queue::EpisodeQueue,
    types::{Episode, PlayerConfig},
};

/// Central player state
///
/// Single source of truth for what is playing and what comes next:
/// - Episode queue (insertion order = playback order)
/// - Current selection
/// - Playing / loop / shuffle flags
/// - Next/previous navigation (sequential or random)
///
/// Every mutation pushes [`PlayerEvent`]s into an internal buffer that the
/// embedding layer drains via [`drain_events`](Self::drain_events). For
/// push-style consumption wrap the player in a
/// [`PlayerContext`](crate::PlayerContext).
#[derive(Debug, Clone)]
pub struct Player {
    // State
    queue: EpisodeQueue,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    // Event buffer for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create new player
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: config.playing,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play a single episode
    ///
    /// Replaces the whole queue with just `episode` and starts playing.
    /// Always succeeds.
    pub fn play(&mut self, episode: Episode) {
        debug!(title = %episode.title, "playing single episode");

        self.queue.set_single(episode);
        self.emit_queue_changed();
        self.emit_episode_changed();
        self.set_playing_state(true);
    }

    /// Play an episode list starting at `index`
    ///
    /// Replaces the queue, selects `index` and starts playing. An
    /// out-of-range `index` is rejected with
    /// [`PlayerError::IndexOutOfBounds`](crate::PlayerError::IndexOutOfBounds)
    /// and the player is left untouched. An empty `list` is accepted only
    /// with `index == 0`.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        debug!(length = list.len(), index, "playing episode list");

        self.queue.replace(list, index)?;
        self.emit_queue_changed();
        if !self.queue.is_empty() {
            self.emit_episode_changed();
        }
        self.set_playing_state(true);
        Ok(())
    }

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing_state(!self.is_playing);
    }

    /// Set the playing flag explicitly
    ///
    /// Used by the media element to report natural playback end/start.
    /// Emits [`PlayerEvent::StateChanged`] only on an actual transition.
    pub fn set_playing_state(&mut self, state: bool) {
        if self.is_playing != state {
            self.is_playing = state;
            trace!(is_playing = state, "playing state changed");
            self.pending_events
                .push(PlayerEvent::StateChanged { is_playing: state });
        }
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        trace!(is_looping = self.is_looping, "loop toggled");
        self.pending_events.push(PlayerEvent::LoopChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        trace!(is_shuffling = self.is_shuffling, "shuffle toggled");
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Empty the queue and reset the selection
    ///
    /// The preference flags keep their values.
    pub fn clear(&mut self) {
        debug!("clearing player state");
        self.queue.clear();
        self.pending_events.push(PlayerEvent::Cleared);
    }

    // ===== Navigation =====

    /// Check if there is a previous episode
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Check if there is a next episode
    ///
    /// Shuffle can always produce a next selection, so the flag alone is
    /// enough; otherwise a sequential successor must exist.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.queue.has_next_sequential()
    }

    /// Move to the next episode
    ///
    /// Shuffling: selects a uniformly random in-range index, which may
    /// reselect the current episode (a restart, not a bug). Not shuffling:
    /// advances by one when a successor exists. No-op on an empty queue or
    /// at the sequential end.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            if self.queue.is_empty() {
                return;
            }
            let index = rand::thread_rng().gen_range(0..self.queue.len());
            debug!(index, "shuffle step");
            self.queue.jump(index);
            self.emit_episode_changed();
        } else if self.queue.advance() {
            debug!(index = self.queue.current_index(), "next episode");
            self.emit_episode_changed();
        }
    }

    /// Move to the previous episode
    ///
    /// No-op when already on the first episode (or the queue is empty).
    pub fn play_previous(&mut self) {
        if self.queue.retreat() {
            debug!(index = self.queue.current_index(), "previous episode");
            self.emit_episode_changed();
        }
    }

    // ===== State Queries =====

    /// All queued episodes in playback order
    pub fn episode_list(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Index of the current episode
    ///
    /// Meaningless (always 0) while the queue is empty.
    pub fn current_episode_index(&self) -> usize {
        self.queue.current_index()
    }

    /// Currently selected episode, `None` while the queue is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    /// Check if playback is active
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Check if the current episode repeats
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Check if "next" selects randomly
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The UI should call
    /// this after each mutation (or each frame) to synchronize.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a queue changed event
    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Emit an episode changed event for the current selection
    fn emit_episode_changed(&mut self) {
        self.pending_events.push(PlayerEvent::EpisodeChanged {
            index: self.queue.current_index(),
        });
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
