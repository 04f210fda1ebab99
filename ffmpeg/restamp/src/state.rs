/*!
    Per-stream state shared between producer threads.
*/

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

/**
    Mutex-guarded map from stream index to per-stream state.

    Owned by a single restamper instance. Entries are created lazily the first
    time a stream index is seen and live as long as the container itself.
    Every operation runs in one critical section, so a lookup and the write
    that depends on it can never interleave with another thread.
*/
pub struct StreamStates<T> {
    states: Mutex<HashMap<usize, T>>,
}

impl<T: Copy> StreamStates<T> {
    pub fn new() -> Self {
        Self {
            states: Mutex::new(HashMap::new()),
        }
    }

    /**
        Get the state for a stream, computing it with `init` if absent.

        Returns the state and whether it was inserted by this call. `init` runs
        at most once per stream index.
    */
    pub fn get_or_insert_with<F>(&self, stream_index: usize, init: F) -> (T, bool)
    where
        F: FnOnce() -> T,
    {
        let mut states = self.states.lock();
        if let Some(state) = states.get(&stream_index) {
            return (*state, false);
        }
        let state = init();
        states.insert(stream_index, state);
        (state, true)
    }

    /**
        Replace the state for a stream based on its previous value.

        `f` receives the previous state (`None` on first sight) and returns the
        replacement together with a result handed back to the caller.
    */
    pub fn update<F, R>(&self, stream_index: usize, f: F) -> R
    where
        F: FnOnce(Option<T>) -> (T, R),
    {
        let mut states = self.states.lock();
        let previous = states.get(&stream_index).copied();
        let (next, result) = f(previous);
        states.insert(stream_index, next);
        result
    }

    /**
        Get the state for a stream without creating it.
    */
    pub fn get(&self, stream_index: usize) -> Option<T> {
        self.states.lock().get(&stream_index).copied()
    }

    /**
        Copy out every entry, sorted by stream index.
    */
    pub fn snapshot(&self) -> Vec<(usize, T)> {
        let mut entries: Vec<_> = self
            .states
            .lock()
            .iter()
            .map(|(index, state)| (*index, *state))
            .collect();
        entries.sort_unstable_by_key(|(index, _)| *index);
        entries
    }

    /**
        Number of streams seen so far.
    */
    pub fn len(&self) -> usize {
        self.states.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.lock().is_empty()
    }
}

impl<T: Copy> Default for StreamStates<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for StreamStates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.snapshot()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn get_or_insert_runs_init_once() {
        let states = StreamStates::new();
        assert_eq!(states.get_or_insert_with(0, || -100), (-100, true));
        assert_eq!(states.get_or_insert_with(0, || -999), (-100, false));
        assert_eq!(states.get(0), Some(-100));
    }

    #[test]
    fn update_sees_previous_state() {
        let states = StreamStates::new();
        let first = states.update(2, |prev: Option<i64>| (10, prev));
        assert_eq!(first, None);
        let second = states.update(2, |prev| (prev.unwrap_or(0) + 5, prev));
        assert_eq!(second, Some(10));
        assert_eq!(states.get(2), Some(15));
    }

    #[test]
    fn get_does_not_create_entries() {
        let states: StreamStates<i64> = StreamStates::new();
        assert_eq!(states.get(7), None);
        assert!(states.is_empty());
    }

    #[test]
    fn snapshot_is_sorted() {
        let states = StreamStates::new();
        for index in [3, 0, 2] {
            states.get_or_insert_with(index, || index as i64 * 10);
        }
        assert_eq!(states.len(), 3);
        assert_eq!(states.snapshot(), vec![(0, 0), (2, 20), (3, 30)]);
    }

    #[test]
    fn concurrent_init_runs_once_per_stream() {
        let states = StreamStates::new();
        let inits = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for index in 0..16 {
                        states.get_or_insert_with(index, || {
                            inits.fetch_add(1, Ordering::Relaxed);
                            index as i64
                        });
                    }
                });
            }
        });

        assert_eq!(inits.load(Ordering::Relaxed), 16);
        assert_eq!(states.len(), 16);
    }

    #[test]
    fn debug_lists_entries() {
        let states = StreamStates::new();
        states.get_or_insert_with(1, || 5i64);
        assert_eq!(format!("{states:?}"), "{1: 5}");
    }
}
