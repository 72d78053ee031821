//! Player context - the surface handed to UI components
//!
//! Wraps a [`Player`] with an observer registry: every mutation is
//! forwarded to the player, then the resulting events are dispatched
//! synchronously to all subscribers before the mutator returns. The
//! application root owns one context for the life of the session and hands
//! out references; no global or static state is involved.
//!
//! Single-threaded by design: mutations happen on the UI thread in
//! response to discrete events, callbacks run to completion inline, and
//! callbacks receive `&PlayerEvent` only so they cannot reenter the
//! context.

use std::fmt;

use crate::{
    error::Result,
    events::PlayerEvent,
    player::Player,
    types::{Episode, PlayerConfig},
};

/// Handle returned by [`PlayerContext::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn Fn(&PlayerEvent)>,
}

/// Shared player state with synchronous change notification
///
/// Consumers read through the accessors and mutate only through the
/// operations below; each mutation notifies every subscriber, in
/// registration order, once per emitted event.
pub struct PlayerContext {
    player: Player,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl PlayerContext {
    /// Create new context with the given initial flags
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            player: Player::new(config),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    // ===== Subscriptions =====

    /// Register a consumer callback
    ///
    /// The callback is invoked synchronously for every event emitted by a
    /// mutation, after the mutation has been applied.
    pub fn subscribe(&mut self, callback: impl Fn(&PlayerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a previously registered consumer
    ///
    /// Returns false if the id was never registered or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Number of registered consumers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // ===== Mutations (forwarded, then dispatched) =====

    /// Play a single episode
    pub fn play(&mut self, episode: Episode) {
        self.player.play(episode);
        self.dispatch();
    }

    /// Play an episode list starting at `index`
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        let result = self.player.play_list(list, index);
        self.dispatch();
        result
    }

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.player.toggle_play();
        self.dispatch();
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.player.toggle_loop();
        self.dispatch();
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.player.toggle_shuffle();
        self.dispatch();
    }

    /// Set the playing flag explicitly
    pub fn set_playing_state(&mut self, state: bool) {
        self.player.set_playing_state(state);
        self.dispatch();
    }

    /// Empty the queue and reset the selection
    pub fn clear(&mut self) {
        self.player.clear();
        self.dispatch();
    }

    /// Move to the next episode
    pub fn play_next(&mut self) {
        self.player.play_next();
        self.dispatch();
    }

    /// Move to the previous episode
    pub fn play_previous(&mut self) {
        self.player.play_previous();
        self.dispatch();
    }

    // ===== Reads (forwarded) =====

    /// All queued episodes in playback order
    pub fn episode_list(&self) -> &[Episode] {
        self.player.episode_list()
    }

    /// Index of the current episode
    pub fn current_episode_index(&self) -> usize {
        self.player.current_episode_index()
    }

    /// Currently selected episode, `None` while the queue is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.player.current_episode()
    }

    /// Check if playback is active
    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Check if the current episode repeats
    pub fn is_looping(&self) -> bool {
        self.player.is_looping()
    }

    /// Check if "next" selects randomly
    pub fn is_shuffling(&self) -> bool {
        self.player.is_shuffling()
    }

    /// Check if there is a next episode
    pub fn has_next(&self) -> bool {
        self.player.has_next()
    }

    /// Check if there is a previous episode
    pub fn has_previous(&self) -> bool {
        self.player.has_previous()
    }

    /// Dispatch drained events to all subscribers, in registration order
    fn dispatch(&mut self) {
        for event in self.player.drain_events() {
            for subscriber in &self.subscribers {
                (subscriber.callback)(&event);
            }
        }
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerContext")
            .field("player", &self.player)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn create_test_episode(title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Test Host".to_string(),
            thumbnail: format!("/thumbs/{}.jpg", title),
            duration: Duration::from_secs(1800),
            url: format!("https://cdn.example.com/{}.mp3", title),
        }
    }

    fn recording_subscriber(
        context: &mut PlayerContext,
    ) -> (SubscriptionId, Rc<RefCell<Vec<PlayerEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = context.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        (id, seen)
    }

    #[test]
    fn subscriber_sees_events_synchronously() {
        let mut context = PlayerContext::new(PlayerConfig {
            playing: false,
            looping: false,
            shuffling: false,
        });
        let (_, seen) = recording_subscriber(&mut context);

        context.play(create_test_episode("a"));

        assert_eq!(
            *seen.borrow(),
            vec![
                PlayerEvent::QueueChanged { length: 1 },
                PlayerEvent::EpisodeChanged { index: 0 },
                PlayerEvent::StateChanged { is_playing: true },
            ]
        );
    }

    #[test]
    fn unsubscribed_consumer_stops_receiving() {
        let mut context = PlayerContext::default();
        let (id, seen) = recording_subscriber(&mut context);

        context.toggle_loop();
        assert_eq!(seen.borrow().len(), 1);

        assert!(context.unsubscribe(id));
        context.toggle_loop();
        assert_eq!(seen.borrow().len(), 1);

        // Unsubscribing twice is a no-op
        assert!(!context.unsubscribe(id));
    }

    #[test]
    fn subscribers_notified_in_registration_order() {
        let mut context = PlayerContext::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        context.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        context.subscribe(move |_| second.borrow_mut().push("second"));

        context.toggle_shuffle();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn reads_reflect_mutations() {
        let mut context = PlayerContext::default();
        context
            .play_list(
                vec![create_test_episode("a"), create_test_episode("b")],
                1,
            )
            .unwrap();

        assert_eq!(context.episode_list().len(), 2);
        assert_eq!(context.current_episode_index(), 1);
        assert_eq!(context.current_episode().unwrap().title, "b");
        assert!(context.has_previous());
    }

    #[test]
    fn failed_play_list_notifies_nothing() {
        let mut context = PlayerContext::new(PlayerConfig {
            playing: false,
            looping: false,
            shuffling: false,
        });
        let (_, seen) = recording_subscriber(&mut context);

        assert!(context
            .play_list(vec![create_test_episode("a")], 9)
            .is_err());
        assert!(seen.borrow().is_empty());
    }
}
