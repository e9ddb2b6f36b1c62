/// Handle returned by [`Listeners::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change listeners of a store. Listeners take no arguments: they are told
/// that something changed and pull fresh data from the store themselves.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Fn()>)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Calls listeners in subscription order.
    pub fn notify(&self) {
        for (_, listener) in &self.entries {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A store that announces its changes
pub trait Observable {
    fn listeners_mut(&mut self) -> &mut Listeners;

    fn subscribe(&mut self, listener: impl Fn() + 'static) -> SubscriptionId {
        self.listeners_mut().subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners_mut().unsubscribe(id)
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_every_listener() {
        let hits = Rc::new(Cell::new(0));
        let mut listeners = Listeners::new();
        for _ in 0..3 {
            let hits = hits.clone();
            listeners.subscribe(move || hits.set(hits.get() + 1));
        }
        listeners.notify();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Rc::new(Cell::new(0));
        let mut listeners = Listeners::new();
        let id = {
            let hits = hits.clone();
            listeners.subscribe(move || hits.set(hits.get() + 1))
        };
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify();
        assert_eq!(hits.get(), 0);
        assert!(listeners.is_empty());
    }
}
