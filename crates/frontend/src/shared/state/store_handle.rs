use contracts::shared::observer::Observable;
use leptos::prelude::*;

/// Reactive handle over a plain contracts store.
///
/// The store itself lives in local (non-`Send`) arena storage; every change
/// notification bumps `revision`, so `with` reads are tracked like a signal.
pub struct StoreHandle<S: 'static> {
    store: StoredValue<S, LocalStorage>,
    revision: RwSignal<u64>,
}

impl<S: 'static> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for StoreHandle<S> {}

impl<S: Observable + 'static> StoreHandle<S> {
    pub fn new(mut store: S) -> Self {
        let revision = RwSignal::new(0u64);
        store.subscribe(move || revision.update(|r| *r = r.wrapping_add(1)));
        Self {
            store: StoredValue::new_local(store),
            revision,
        }
    }

    /// Tracked read
    pub fn with<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        self.revision.track();
        self.store.with_value(f)
    }

    /// Mutates the store; subscribers (and so the revision) fire from inside
    /// the store's own commit.
    pub fn update<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        self.store.try_update_value(f)
    }
}
