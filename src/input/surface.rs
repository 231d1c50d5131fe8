//! Input-surface capability and its headless, queue-backed implementation.

use std::{
    collections::VecDeque,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};

use super::event::{Channel, InputEvent};

/// Pixel size of an input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl Viewport {
    /// Construct from explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height, or `None` for a zero-height surface.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        (self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(0);

/// Handle returned by [`Surface::subscribe`].
///
/// Ids are unique for the whole process, so an id issued by one surface
/// never matches a subscription on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Mint a fresh id. Surface implementations call this from
    /// [`Surface::subscribe`].
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed))
    }
}

/// Source of input events with a pixel size.
///
/// Events are queued per subscription and pulled with
/// [`drain`](Self::drain) in arrival order, so the consumer never holds a
/// callback into host state.
pub trait Surface {
    /// Current pixel size.
    fn size(&self) -> Viewport;
    /// Start receiving events on `channels`.
    fn subscribe(&mut self, channels: &[Channel]) -> SubscriptionId;
    /// Stop receiving events. Returns `false` if `id` was not issued by
    /// this surface or is already gone.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
    /// Take every event queued for `id`, oldest first.
    fn drain(&mut self, id: SubscriptionId) -> Vec<InputEvent>;
}

struct Subscriber {
    id: SubscriptionId,
    channels: Vec<Channel>,
    queue: VecDeque<InputEvent>,
}

/// Headless [`Surface`] fed by [`push`](Self::push).
///
/// Used by tests and the replay binary; window adapters push translated
/// platform events into it.
pub struct EventQueue {
    viewport: Viewport,
    subscribers: Vec<Subscriber>,
}

impl EventQueue {
    /// Create an empty surface of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            subscribers: Vec::new(),
        }
    }

    /// Change the reported size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Deliver `event` to every subscriber listening on its channel.
    /// Returns the number of subscribers that received it.
    pub fn push(&mut self, event: InputEvent) -> usize {
        let channel = event.channel();
        let mut delivered = 0;
        for sub in &mut self.subscribers {
            if sub.channels.contains(&channel) {
                sub.queue.push_back(event.clone());
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Surface for EventQueue {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn subscribe(&mut self, channels: &[Channel]) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.subscribers.push(Subscriber {
            id,
            channels: channels.to_vec(),
            queue: VecDeque::new(),
        });
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() != before
    }

    fn drain(&mut self, id: SubscriptionId) -> Vec<InputEvent> {
        self.subscribers
            .iter_mut()
            .find(|sub| sub.id == id)
            .map(|sub| sub.queue.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_matching_channels_only() {
        let mut surface = EventQueue::new(Viewport::new(800, 600));
        let wheel = surface.subscribe(&[Channel::Wheel]);
        let keys = surface.subscribe(&[Channel::Keyboard, Channel::Focus]);

        assert_eq!(surface.push(InputEvent::Scroll { delta: 1.0 }), 1);
        assert_eq!(surface.push(InputEvent::FocusLost), 1);
        let moved = InputEvent::PointerMoved { x: 0.0, y: 0.0 };
        assert_eq!(surface.push(moved), 0);

        let scroll = InputEvent::Scroll { delta: 1.0 };
        assert_eq!(surface.drain(wheel), vec![scroll]);
        assert_eq!(surface.drain(keys), vec![InputEvent::FocusLost]);
        assert!(surface.drain(keys).is_empty());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut surface = EventQueue::new(Viewport::new(800, 600));
        let id = surface.subscribe(&Channel::ALL);
        let _ = surface.push(InputEvent::PointerMoved { x: 1.0, y: 0.0 });
        let _ = surface.push(InputEvent::Scroll { delta: -1.0 });
        let _ = surface.push(InputEvent::PointerMoved { x: 2.0, y: 0.0 });
        let events = surface.drain(id);
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], InputEvent::Scroll { delta: -1.0 });
        assert_eq!(events[2].channel(), Channel::Pointer);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut surface = EventQueue::new(Viewport::new(800, 600));
        let id = surface.subscribe(&Channel::ALL);
        assert!(surface.unsubscribe(id));
        assert!(!surface.unsubscribe(id));
        assert_eq!(surface.subscriber_count(), 0);
        assert_eq!(surface.push(InputEvent::FocusLost), 0);
        assert!(surface.drain(id).is_empty());
    }

    #[test]
    fn ids_are_unique_across_surfaces() {
        let mut a = EventQueue::new(Viewport::new(800, 600));
        let mut b = EventQueue::new(Viewport::new(800, 600));
        let on_a = a.subscribe(&Channel::ALL);
        let on_b = b.subscribe(&Channel::ALL);
        assert_ne!(on_a, on_b);

        // A foreign id leaves the other surface untouched.
        assert!(!b.unsubscribe(on_a));
        assert_eq!(b.subscriber_count(), 1);
        assert_eq!(b.push(InputEvent::FocusLost), 1);
        assert!(b.drain(on_a).is_empty());
        assert_eq!(b.drain(on_b), vec![InputEvent::FocusLost]);
    }

    #[test]
    fn zero_height_has_no_aspect() {
        assert_eq!(Viewport::new(10, 0).aspect(), None);
        assert_eq!(Viewport::new(800, 400).aspect(), Some(2.0));
    }
}
