use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use arc_swap::ArcSwap;

use super::counts::{LogCounts, OpCounters};
use crate::memory;

type Entries = HashMap<TypeId, &'static OpCounters>;

/// Registry of operation counters keyed by specialization.
///
/// Lookups read an immutable snapshot of the map and never block. Registering
/// a new specialization copies the map under a mutex and publishes the copy.
/// Counter blocks live for the rest of the process, so handles stay valid
/// across [`CounterRegistry::reset_all`].
pub struct CounterRegistry {
    entries: ArcSwap<Entries>,
    insert_lock: Mutex<()>,
}

static GLOBAL: OnceLock<CounterRegistry> = OnceLock::new();

impl Default for CounterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(HashMap::new()),
            insert_lock: Mutex::new(()),
        }
    }

    /// The registry used by [`ValueLog`](super::ValueLog).
    pub fn global() -> &'static CounterRegistry {
        GLOBAL.get_or_init(|| memory::untracked(CounterRegistry::new))
    }

    /// Counters for key type `S`, registered with `label()` on first use.
    ///
    /// Registration allocates, but never shows up in the allocation counters.
    pub fn counters<S: 'static>(&self, label: impl FnOnce() -> String) -> &'static OpCounters {
        let key = TypeId::of::<S>();
        memory::untracked(|| self.lookup_or_insert(key, label))
    }

    fn lookup_or_insert(&self, key: TypeId, label: impl FnOnce() -> String) -> &'static OpCounters {
        if let Some(counters) = self.entries.load().get(&key).copied() {
            return counters;
        }

        let _insert = self
            .insert_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let current = self.entries.load_full();
        if let Some(counters) = current.get(&key).copied() {
            return counters;
        }

        let counters: &'static OpCounters = Box::leak(Box::new(OpCounters::new(label())));
        let mut next = Entries::clone(&current);
        next.insert(key, counters);
        self.entries.store(Arc::new(next));

        counters
    }

    /// Zeroes every registered specialization.
    pub fn reset_all(&self) {
        for counters in self.entries.load().values() {
            counters.reset();
        }
    }

    /// Labels and counts of every registered specialization, sorted by label.
    pub fn snapshot(&self) -> Vec<(String, LogCounts)> {
        let mut rows: Vec<(String, LogCounts)> = self
            .entries
            .load()
            .values()
            .map(|counters| (counters.label().to_string(), counters.snapshot()))
            .collect();
        rows.sort_by(|(a, _), (b, _)| a.cmp(b));
        rows
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CounterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterRegistry")
            .field("len", &self.len())
            .finish()
    }
}
