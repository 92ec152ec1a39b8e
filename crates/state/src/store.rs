//! The application store: one owner of [`AppState`], many readers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, mpsc};

use serde_json::Value;
use thiserror::Error;

use crate::action::{Action, ActionDecodeError};
use crate::state::AppState;
use crate::subscription::Subscription;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Decode(#[from] ActionDecodeError),
}

/// Injectable state container.
///
/// - Dispatch is synchronous and serialized, so actions apply in call order.
/// - Each dispatch swaps in a fresh `Arc<AppState>`; readers holding an older
///   snapshot never see it change.
/// - Subscribers get every published snapshot, in apply order, even when
///   several threads dispatch at once.
#[derive(Debug)]
pub struct Store {
    state: Mutex<Arc<AppState>>,
    subscribers: Mutex<Vec<mpsc::Sender<Arc<AppState>>>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_state(AppState::default())
    }
}

/// Snapshots are replaced whole, so a poisoned lock still guards a
/// consistent value.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Mutex::new(Arc::new(state)),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&lock(&self.state))
    }

    /// Apply `action` and publish the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        tracing::trace!(action = action.kind().as_str(), "dispatch");

        let mut current = lock(&self.state);
        let mut next = AppState::clone(&current);
        next.apply(&action);
        let next = Arc::new(next);
        *current = Arc::clone(&next);

        // Still under the state lock: publish order must match apply order.
        self.publish(&next);
        next
    }

    /// Decode and apply an untyped `(kind, payload)` message.
    ///
    /// Unknown kinds leave the state untouched and publish nothing.
    pub fn dispatch_raw(&self, kind: &str, payload: Value) -> Result<Arc<AppState>, StoreError> {
        match Action::decode(kind, payload)? {
            Some(action) => Ok(self.dispatch(action)),
            None => {
                tracing::debug!(kind, "ignoring unrecognized action");
                Ok(self.state())
            }
        }
    }

    pub fn subscribe(&self) -> Subscription<Arc<AppState>> {
        let (tx, rx) = mpsc::channel();
        lock(&self.subscribers).push(tx);
        Subscription::new(rx)
    }

    /// Callers hold the `state` lock. Lock order is `state` then
    /// `subscribers`; `subscribe` only takes the latter.
    fn publish(&self, snapshot: &Arc<AppState>) {
        // Drop any dead subscribers while publishing.
        lock(&self.subscribers).retain(|tx| tx.send(Arc::clone(snapshot)).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatch_publishes_to_every_subscriber() {
        let store = Store::new();
        let a = store.subscribe();
        let b = store.subscribe();

        store.dispatch(Action::SetActiveTab("Students".into()));

        assert_eq!(a.recv().unwrap().navigation.active_tab, "Students");
        assert_eq!(b.recv().unwrap().navigation.active_tab, "Students");
    }

    #[test]
    fn earlier_snapshots_are_immutable() {
        let store = Store::new();
        let before = store.state();
        store.dispatch(Action::SetDrawerOpen(true));

        assert!(!before.navigation.drawer_open);
        assert!(store.state().navigation.drawer_open);
    }

    #[test]
    fn unknown_raw_action_is_a_noop() {
        let store = Store::new();
        store.dispatch(Action::SetCurrentScreen(Some("A".into())));
        let updates = store.subscribe();
        let before = store.state();

        let after = store.dispatch_raw("REFRESH_EVERYTHING", json!({ "x": 1 })).unwrap();

        assert_eq!(*after, *before);
        assert!(updates.try_recv().is_err());
    }

    #[test]
    fn raw_actions_apply_in_order() {
        let store = Store::new();
        store.dispatch_raw("SET_CURRENT_SCREEN", json!("A")).unwrap();
        store.dispatch_raw("SET_CURRENT_SCREEN", json!("B")).unwrap();

        let state = store.state();
        let nav = &state.navigation;
        assert_eq!(nav.current_screen.as_deref(), Some("B"));
        assert_eq!(nav.previous_screen.as_deref(), Some("A"));
    }

    #[test]
    fn malformed_raw_payload_is_an_error() {
        let store = Store::new();
        let err = store.dispatch_raw("SET_LOADING", json!("nope")).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
        assert!(!store.state().ui.loading);
    }

    #[test]
    fn concurrent_dispatches_publish_in_apply_order() {
        for _ in 0..20 {
            let store = Arc::new(Store::new());
            let updates = store.subscribe();

            let workers: Vec<_> = (0..4)
                .map(|t| {
                    let store = Arc::clone(&store);
                    std::thread::spawn(move || {
                        for i in 0..50 {
                            store.dispatch(Action::SetCurrentScreen(Some(format!("{t}-{i}"))));
                        }
                    })
                })
                .collect();
            for worker in workers {
                worker.join().unwrap();
            }

            let mut received = 0;
            let mut last: Option<Arc<AppState>> = None;
            while let Ok(snapshot) = updates.try_recv() {
                if let Some(prev) = &last {
                    assert_eq!(snapshot.navigation.previous_screen, prev.navigation.current_screen);
                }
                last = Some(snapshot);
                received += 1;
            }

            assert_eq!(received, 200);
            assert_eq!(last, Some(store.state()));
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let store = Store::new();
        drop(store.subscribe());
        let live = store.subscribe();

        store.dispatch(Action::SetLoading(true));

        assert_eq!(lock(&store.subscribers).len(), 1);
        assert!(live.latest().unwrap().ui.loading);
    }
}
