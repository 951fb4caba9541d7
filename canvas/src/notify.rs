//! Synchronous change notification for the item store.
//!
//! Listeners are plain `FnMut(&[Item])` closures. They receive a shared
//! borrow of the full collection, so they can read and copy it but cannot
//! call back into the store's mutators while a notification is in flight.
//! Listeners are not `Send`, which pins a store that holds them to the
//! thread that owns it.

use std::fmt;

use crate::doc::Item;

/// Handle returned by [`crate::doc::ItemStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A change listener. Called with the full current collection after every
/// effective mutation.
pub type Listener = Box<dyn FnMut(&[Item])>;

/// Ordered list of listeners; notified in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, items: &[Item]) {
        for (_, listener) in &mut self.entries {
            listener(items);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("count", &self.entries.len()).finish()
    }
}
