use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use parking_lot::{Mutex, RwLock};

use crate::key::Key;
use crate::key_observable::{KeyObservable, Signal, SignalSender};

type Observers = HashMap<String, Vec<SignalSender>>;

const DELIVERY_STACK_SIZE: usize = 64 * 1024;

pub struct ConcurrentObservable<T = ()> {
    data: RwLock<T>,
    observers: Mutex<Observers>,
    in_flight: Arc<AtomicUsize>,
}

impl<T: Default> ConcurrentObservable<T> {
    pub fn new() -> Self {
        Self::with_data(T::default())
    }
}

impl<T> ConcurrentObservable<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            data: RwLock::new(data),
            observers: Mutex::new(HashMap::new()),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    // Never taken by observe/notify.
    pub fn data(&self) -> &RwLock<T> {
        &self.data
    }

    pub fn observer_count(&self, key: &dyn Key) -> usize {
        self.observers
            .lock()
            .get(&key.render())
            .map_or(0, Vec::len)
    }

    pub fn key_count(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn pending_deliveries(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl<T: Default> Default for ConcurrentObservable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyObservable for ConcurrentObservable<T> {
    fn observe(&self, key: &dyn Key) -> Signal {
        let key = key.render();
        let (sender, signal) = mpsc::sync_channel(0);

        let mut observers = self.observers.lock();
        let senders = observers.entry(key.clone()).or_default();
        senders.push(sender);
        log::debug!("Registered observer #{} for {key:?}", senders.len());

        signal
    }

    /// Every delivery runs on its own detached thread and blocks until its
    /// signal is read. A signal that is kept alive but never read pins that
    /// thread forever; dropping the signal releases it.
    fn notify(&self, key: &dyn Key) {
        let key = key.render();

        let observers = self.observers.lock();
        let Some(senders) = observers.get(&key) else {
            log::trace!("No observers for {key:?}");
            return;
        };

        log::debug!("Notifying {} observer(s) of {key:?}", senders.len());
        for sender in senders {
            spawn_delivery(sender.clone(), key.clone(), self.in_flight.clone());
        }
    }
}

fn spawn_delivery(sender: SignalSender, key: String, in_flight: Arc<AtomicUsize>) {
    in_flight.fetch_add(1, Ordering::AcqRel);
    let job = {
        let in_flight = in_flight.clone();
        move || {
            if sender.send(true).is_err() {
                log::trace!("Observer of {key:?} hung up");
            }
            in_flight.fetch_sub(1, Ordering::AcqRel);
        }
    };

    let spawned = thread::Builder::new()
        .name("observable-delivery".into())
        .stack_size(DELIVERY_STACK_SIZE)
        .spawn(job);
    if let Err(err) = spawned {
        in_flight.fetch_sub(1, Ordering::AcqRel);
        log::error!("Failed to spawn delivery thread: {err}");
    }
}
