//! Player events
//!
//! Event-based communication for UI synchronization. Events are emitted
//! by every state mutation and either polled via [`Player::drain_events`]
//! or pushed to subscribers by [`PlayerContext`].
//!
//! [`Player::drain_events`]: crate::Player::drain_events
//! [`PlayerContext`]: crate::PlayerContext

use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing flag transitioned
    ///
    /// Only emitted on an actual change: setting the flag to its current
    /// value is silent.
    StateChanged {
        /// The new playing state
        is_playing: bool,
    },

    /// Loop flag flipped
    LoopChanged {
        /// The new loop flag
        is_looping: bool,
    },

    /// Shuffle flag flipped
    ShuffleChanged {
        /// The new shuffle flag
        is_shuffling: bool,
    },

    /// Current selection moved
    ///
    /// A shuffle step may reselect the current index; the event is still
    /// emitted so the UI can restart the episode.
    EpisodeChanged {
        /// Index of the newly selected episode
        index: usize,
    },

    /// Queue contents replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Queue emptied and index reset
    Cleared,
}
