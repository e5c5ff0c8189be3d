mod concurrent_observable;
mod key;
mod key_observable;
mod observable_map;

pub use concurrent_observable::ConcurrentObservable;
pub use key::{Key, PlainKey};
pub use key_observable::{KeyObservable, Signal};
pub use observable_map::ObservableMap;
