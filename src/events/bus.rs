//! Topic-based publish/subscribe.

use std::borrow::Cow;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::Result;

/// A named channel on the bus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic(Cow<'static, str>);

impl Topic {
    /// Create a topic from a static name (usable in consts).
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Topic {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Topic {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subscribed callback. It receives the publishing context mutably, so a
/// handler can change state and publish further events.
pub type Handler<C, P> = Rc<dyn Fn(&mut C, &P) -> Result<()>>;

/// Ordered handler lists keyed by topic.
///
/// `C` is the context handlers run against (the game), `P` the payload type.
pub struct Bus<C, P> {
    subscribers: FxHashMap<Topic, Vec<Handler<C, P>>>,
}

impl<C, P> Default for Bus<C, P> {
    fn default() -> Self {
        Self {
            subscribers: FxHashMap::default(),
        }
    }
}

impl<C, P> std::fmt::Debug for Bus<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (topic, handlers) in &self.subscribers {
            map.entry(&topic.name(), &handlers.len());
        }
        map.finish()
    }
}

impl<C, P> Bus<C, P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the topic's list.
    ///
    /// Subscribing the same callback twice registers it twice.
    pub fn subscribe<F>(&mut self, topic: impl Into<Topic>, handler: F)
    where
        F: Fn(&mut C, &P) -> Result<()> + 'static,
    {
        self.subscribers
            .entry(topic.into())
            .or_default()
            .push(Rc::new(handler));
    }

    /// Snapshot of the handlers currently registered for a topic.
    ///
    /// Handlers subscribed after the snapshot is taken are not part of it.
    #[must_use]
    pub fn handlers(&self, topic: &Topic) -> Vec<Handler<C, P>> {
        self.subscribers.get(topic).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.subscribers.get(topic).map_or(0, Vec::len)
    }

    /// Topics with at least one subscription, sorted by name.
    #[must_use]
    pub fn topics(&self) -> Vec<&Topic> {
        let mut topics: Vec<_> = self.subscribers.keys().collect();
        topics.sort();
        topics
    }
}

/// Something that owns a bus and publishes through it.
///
/// The default `publish` takes a snapshot of the topic's handlers and runs
/// them in subscription order against `self`. The first handler error stops
/// the publish and is returned to the caller; no later handler runs.
pub trait Publisher: Sized {
    type Payload;

    fn bus(&self) -> &Bus<Self, Self::Payload>;

    fn publish(&mut self, topic: &Topic, payload: &Self::Payload) -> Result<()> {
        let handlers = self.bus().handlers(topic);
        for handler in handlers {
            handler(self, payload)?;
        }
        Ok(())
    }
}
