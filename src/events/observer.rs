//! Publish/subscribe lists with handle-based observers

use serde::{Deserialize, Serialize};

use crate::core::types::{HouseId, MonsterId};

/// Who can be told about a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observer {
    House(HouseId),
    Neighborhood,
}

/// A state change worth telling observers about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A monster dropped to zero hit points and turned back into a person
    MonsterTransformed(MonsterId),
    /// Every monster in a house has transformed
    HouseCleared(HouseId),
    /// The player ran out of hit points
    PlayerDefeated,
}

impl Notification {
    /// Short tag naming the kind of entity that raised the notification
    pub fn tag(&self) -> &'static str {
        match self {
            Notification::MonsterTransformed(_) => "monster",
            Notification::HouseCleared(_) => "house",
            Notification::PlayerDefeated => "player",
        }
    }
}

/// A notification addressed to one observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub to: Observer,
    pub notification: Notification,
}

/// Ordered set of observer handles
///
/// Registering twice is a no-op, as is removing an unknown observer.
/// Delivery follows registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observers<H = Observer> {
    list: Vec<H>,
}

impl<H> Default for Observers<H> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}

impl<H: Copy + PartialEq> Observers<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a single observer
    pub fn with(observer: H) -> Self {
        Self { list: vec![observer] }
    }

    /// Returns `true` if the observer was not registered before
    pub fn add_observer(&mut self, observer: H) -> bool {
        if self.list.contains(&observer) {
            return false;
        }
        self.list.push(observer);
        true
    }

    /// Returns `true` if the observer was registered
    pub fn remove_observer(&mut self, observer: H) -> bool {
        let before = self.list.len();
        self.list.retain(|o| *o != observer);
        self.list.len() != before
    }

    pub fn remove_all_observers(&mut self) {
        self.list.clear();
    }

    pub fn contains(&self, observer: H) -> bool {
        self.list.contains(&observer)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = H> + '_ {
        self.list.iter().copied()
    }
}

impl Observers<Observer> {
    /// Address `notification` to every registered observer
    pub fn notify(&self, notification: Notification) -> Vec<Envelope> {
        self.list
            .iter()
            .map(|&to| Envelope { to, notification })
            .collect()
    }
}
