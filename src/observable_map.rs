use std::collections::HashMap;

use crate::concurrent_observable::ConcurrentObservable;
use crate::key::Key;
use crate::key_observable::{KeyObservable, Signal};

pub struct ObservableMap<V> {
    observable: ConcurrentObservable<HashMap<String, V>>,
}

impl<V> ObservableMap<V> {
    pub fn new() -> Self {
        Self {
            observable: ConcurrentObservable::new(),
        }
    }

    pub fn insert(&self, key: &dyn Key, value: V) -> Option<V> {
        let mut data = self.observable.data().write();
        let previous = data.insert(key.render(), value);
        self.observable.notify(key);
        previous
    }

    pub fn remove(&self, key: &dyn Key) -> Option<V> {
        let mut data = self.observable.data().write();
        let removed = data.remove(&key.render());
        if removed.is_some() {
            self.observable.notify(key);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.observable.data().read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> ObservableMap<V> {
    pub fn get(&self, key: &dyn Key) -> Option<V> {
        self.observable.data().read().get(&key.render()).cloned()
    }

    /// Registers under the read lock, so no write can land between the
    /// returned value and the subscription.
    pub fn watch(&self, key: &dyn Key) -> (Option<V>, Signal) {
        let data = self.observable.data().read();
        let signal = self.observable.observe(key);
        (data.get(&key.render()).cloned(), signal)
    }
}

impl<V> Default for ObservableMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KeyObservable for ObservableMap<V> {
    fn observe(&self, key: &dyn Key) -> Signal {
        let _data = self.observable.data().read();
        self.observable.observe(key)
    }

    fn notify(&self, key: &dyn Key) {
        self.observable.notify(key)
    }
}
