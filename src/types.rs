//! Core types for player state management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Episode information for queue management
///
/// Contains all metadata needed for playback and display.
/// This is supplied fully populated by the data-fetching layer so the
/// player never touches the network itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Contributor/author names, already formatted for display
    pub members: String,

    /// Thumbnail image URI or path
    pub thumbnail: String,

    /// Episode duration (whole seconds)
    pub duration: Duration,

    /// Playable media URL
    pub url: String,
}

/// Configuration for the player
///
/// Initial values for the preference flags. The defaults reproduce a
/// fresh session: ready to play, looping and shuffling enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial playing state (default: true)
    pub playing: bool,

    /// Initial loop flag (default: true)
    pub looping: bool,

    /// Initial shuffle flag (default: true)
    pub shuffling: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playing: true,
            looping: true,
            shuffling: true,
        }
    }
}
