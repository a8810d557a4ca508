//! Subscriber bookkeeping for stores.

use std::fmt;

/// Handle returned by `Store::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

pub(crate) type Callback<S> = Box<dyn FnMut(&S) + Send>;

/// Ordered set of subscriber callbacks.
pub(crate) struct Subscribers<S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<S>)>,
}

impl<S> Subscribers<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, callback: Callback<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every subscriber in subscription order.
    pub(crate) fn notify(&mut self, state: &S) {
        for (_, callback) in self.entries.iter_mut() {
            callback(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Wrap `callback` so it only runs when `selector`'s output changes.
///
/// The selection is primed from `current`, so the first call only fires if
/// the selected value differs from what it was at subscription time.
pub(crate) fn on_change<S, T, Sel, F>(current: &S, selector: Sel, mut callback: F) -> Callback<S>
where
    Sel: Fn(&S) -> T + Send + 'static,
    T: PartialEq + Send + 'static,
    F: FnMut(&T) + Send + 'static,
{
    let mut last = selector(current);
    Box::new(move |state: &S| {
        let next = selector(state);
        if next != last {
            callback(&next);
            last = next;
        }
    })
}
