use crate::key::Key;

// Zero capacity: each notification waits until it is read or the receiver is dropped.
pub type Signal = std::sync::mpsc::Receiver<bool>;

pub(crate) type SignalSender = std::sync::mpsc::SyncSender<bool>;

pub trait KeyObservable {
    fn observe(&self, key: &dyn Key) -> Signal;

    fn notify(&self, key: &dyn Key);
}
