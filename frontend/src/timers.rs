use std::collections::HashMap;
use std::hash::Hash;

use gloo_timers::callback::Timeout;

/// Timeout handles owned by a component, keyed by what they belong to.
///
/// Dropping a gloo handle cancels its timer, so clearing the set when the
/// component unmounts leaves nothing behind to fire into dropped state.
pub struct PendingTimeouts<K, T = Timeout> {
    handles: HashMap<K, T>,
}

impl<K: Eq + Hash, T> Default for PendingTimeouts<K, T> {
    fn default() -> Self {
        Self { handles: HashMap::new() }
    }
}

impl<K: Eq + Hash, T> PendingTimeouts<K, T> {
    /// Keeps `handle` under `key`, cancelling whatever was armed there.
    pub fn arm(&mut self, key: K, handle: T) {
        self.handles.insert(key, handle);
    }

    /// Releases the handle of a timer that has fired.
    pub fn settle(&mut self, key: &K) {
        self.handles.remove(key);
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_settle_releases_only_that_key() {
        let dropped = Rc::new(Cell::new(0));
        let mut timeouts = PendingTimeouts::default();
        timeouts.arm(1u32, Handle(dropped.clone()));
        timeouts.arm(2u32, Handle(dropped.clone()));

        timeouts.settle(&1);
        assert_eq!(dropped.get(), 1);
        timeouts.settle(&1);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_rearming_cancels_previous_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut timeouts = PendingTimeouts::default();
        timeouts.arm("lever", Handle(dropped.clone()));
        timeouts.arm("lever", Handle(dropped.clone()));
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_clear_cancels_everything_pending() {
        let dropped = Rc::new(Cell::new(0));
        let mut timeouts = PendingTimeouts::default();
        for id in 0..3u32 {
            timeouts.arm(id, Handle(dropped.clone()));
        }
        timeouts.clear();
        assert_eq!(dropped.get(), 3);

        timeouts.arm(7, Handle(dropped.clone()));
        drop(timeouts);
        assert_eq!(dropped.get(), 4);
    }
}
