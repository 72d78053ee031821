//! Pod Playback - Player State Management
//!
//! Platform-agnostic player state for a podcast app.
//!
//! This crate provides:
//! - Episode queue (insertion order = playback order)
//! - Current-selection tracking with bounds-safe navigation
//! - Playing / loop / shuffle flags with involutive toggles
//! - Next/previous navigation (sequential, or random under shuffle)
//! - Synchronous change notification for UI re-rendering
//!
//! # Architecture
//!
//! `pod-playback` is completely platform-agnostic:
//! - No dependency on any UI toolkit
//! - No dependency on a network or storage layer
//! - No audio decoding; a media-rendering component consumes the state
//!   and reports back via [`set_playing_state`](PlayerContext::set_playing_state)
//!
//! State lives in a single [`PlayerContext`] owned by the application root
//! for the life of the session and passed by reference to UI components.
//! Everything is single-threaded: mutations happen on the UI thread, and
//! subscriber callbacks run inline before the mutator returns. Code that
//! prefers polling over callbacks can use [`Player`] directly and drain
//! its event buffer each frame.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use pod_playback::{Episode, PlayerContext};
//! use std::time::Duration;
//!
//! let mut player = PlayerContext::default();
//!
//! let episode = Episode {
//!     title: "Faladev #30".to_string(),
//!     members: "Diego, Mayk".to_string(),
//!     thumbnail: "/thumbs/faladev-30.jpg".to_string(),
//!     duration: Duration::from_secs(3600),
//!     url: "https://cdn.example.com/faladev-30.mp3".to_string(),
//! };
//!
//! player.play(episode);
//! assert!(player.is_playing());
//! assert_eq!(player.current_episode_index(), 0);
//! ```
//!
//! # Example: Reacting to Changes
//!
//! ```rust
//! use pod_playback::{PlayerContext, PlayerEvent};
//!
//! let mut player = PlayerContext::default();
//!
//! let id = player.subscribe(|event| {
//!     if let PlayerEvent::StateChanged { is_playing } = event {
//!         println!("playing: {is_playing}");
//!     }
//! });
//!
//! player.toggle_play();
//! player.unsubscribe(id);
//! ```

mod context;
mod error;
mod events;
mod player;
mod queue;
pub mod types;

// Public exports
pub use context::{PlayerContext, SubscriptionId};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use types::{Episode, PlayerConfig};
