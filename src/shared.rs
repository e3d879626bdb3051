use parking_lot::Mutex;

use crate::cuckoo::CuckooTable;
use crate::error::TableError;
use crate::hash::SlotHash;

/// A `CuckooTable` behind a single lock. Each call holds the lock for the whole
/// operation, so no reader can observe a displacement chain halfway through.
#[derive(Debug)]
pub struct SharedTable<K, V, H1, H2> {
    inner: Mutex<CuckooTable<K, V, H1, H2>>,
}

impl<K, V, H1, H2> SharedTable<K, V, H1, H2>
where
    K: PartialEq,
    H1: SlotHash<K>,
    H2: SlotHash<K>,
{
    pub fn new(size: usize, h1: H1, h2: H2) -> Result<Self, TableError> {
        Ok(SharedTable::from(CuckooTable::new(size, h1, h2)?))
    }

    pub fn put(&self, key: K, value: V) -> bool {
        self.inner.lock().put(key, value)
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with the table locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut CuckooTable<K, V, H1, H2>) -> R) -> R {
        let mut table = self.inner.lock();
        f(&mut *table)
    }

    pub fn into_inner(self) -> CuckooTable<K, V, H1, H2> {
        self.inner.into_inner()
    }
}

impl<K, V, H1, H2> From<CuckooTable<K, V, H1, H2>> for SharedTable<K, V, H1, H2> {
    fn from(table: CuckooTable<K, V, H1, H2>) -> Self {
        SharedTable {
            inner: Mutex::new(table),
        }
    }
}
