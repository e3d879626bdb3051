use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::TableError;
use crate::hash::{LinearHash, SlotHash};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    H1,
    H2,
}

/// A fixed-capacity table where every key lives at `h1(key)` or `h2(key)`.
///
/// The capacity never changes. A `put` that cannot be placed within
/// `capacity()` displacements is rejected and leaves the table untouched.
#[derive(Clone, Debug)]
pub struct CuckooTable<K, V, H1, H2> {
    slots: Vec<Option<Entry<K, V>>>,
    len: usize,
    h1: H1,
    h2: H2,
}

impl<K, V, H1, H2> CuckooTable<K, V, H1, H2>
where
    K: PartialEq,
    H1: SlotHash<K>,
    H2: SlotHash<K>,
{
    pub fn new(size: usize, h1: H1, h2: H2) -> Result<Self, TableError> {
        if size == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(CuckooTable {
            slots: std::iter::repeat_with(|| None).take(size).collect(),
            len: 0,
            h1,
            h2,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn h1(&self, key: &K) -> usize {
        self.h1.slot(key) % self.slots.len()
    }

    fn h2(&self, key: &K) -> usize {
        self.h2.slot(key) % self.slots.len()
    }

    fn probe(&self, probe: Probe, key: &K) -> usize {
        match probe {
            Probe::H1 => self.h1(key),
            Probe::H2 => self.h2(key),
        }
    }

    fn holds(&self, loc: usize, key: &K) -> bool {
        matches!(&self.slots[loc], Some(entry) if entry.key == *key)
    }

    /// Inserts or updates `key`. Returns `false` when no displacement chain of
    /// at most `capacity()` probes reaches an empty slot; the table is then
    /// exactly as it was before the call.
    pub fn put(&mut self, key: K, value: V) -> bool {
        if let Some(loc) = self.position(&key) {
            if let Some(entry) = self.slots[loc].as_mut() {
                entry.value = value;
            }
            return true;
        }

        let (l1, l2) = (self.h1(&key), self.h2(&key));
        let vacant = if self.slots[l1].is_none() {
            Some(l1)
        } else if self.slots[l2].is_none() {
            Some(l2)
        } else {
            None
        };
        if let Some(loc) = vacant {
            self.slots[loc] = Some(Entry { key, value });
            self.len += 1;
            return true;
        }

        match self.plan_insert(&key) {
            Some(chain) => {
                self.apply(&chain, Entry { key, value });
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Dry run of the displacement walk for a key that is not yet stored.
    ///
    /// Returns the slots the walk visits, in order, ending with the empty slot
    /// that terminates it, or `None` if `capacity()` probes are not enough.
    /// The walk tracks its own virtual writes, so a later revisit of a slot sees
    /// the key that the committing pass would have put there.
    pub fn plan_insert(&self, key: &K) -> Option<Vec<usize>> {
        let mut written: HashMap<usize, &K> = HashMap::new();
        let mut chain = Vec::new();
        let mut current = key;
        let mut probe = Probe::H1;

        for _ in 0..self.slots.len() {
            let loc = self.probe(probe, current);
            chain.push(loc);
            let occupant = match written.get(&loc) {
                Some(&k) => k,
                None => match &self.slots[loc] {
                    Some(entry) => &entry.key,
                    None => return Some(chain),
                },
            };
            written.insert(loc, current);
            probe = if self.h1(occupant) == loc {
                Probe::H2
            } else {
                Probe::H1
            };
            current = occupant;
        }

        debug!(
            capacity = self.slots.len(),
            probes = chain.len(),
            "displacement budget exhausted"
        );
        None
    }

    fn apply(&mut self, chain: &[usize], entry: Entry<K, V>) {
        let mut cur = entry;
        for &loc in chain {
            match self.slots[loc].replace(cur) {
                Some(prev) => {
                    trace!(slot = loc, "displaced occupant");
                    cur = prev;
                }
                None => return,
            }
        }
        // plan_insert only returns chains that end on an empty slot
        debug_assert!(false, "displacement chain ended on an occupied slot");
    }

    /// The slot holding `key`, checking `h1(key)` before `h2(key)`.
    pub fn position(&self, key: &K) -> Option<usize> {
        let l1 = self.h1(key);
        if self.holds(l1, key) {
            return Some(l1);
        }
        let l2 = self.h2(key);
        if self.holds(l2, key) {
            return Some(l2);
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let loc = self.position(key)?;
        self.slots[loc].as_ref().map(|entry| &entry.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Removes `key` and returns its value.
    ///
    /// `h2(key)` is only consulted when `h1(key)` is empty. A key that sits at
    /// `h2(key)` while another key occupies `h1(key)` is reported as absent,
    /// even though `get` would find it.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let l1 = self.h1(key);
        let loc = match &self.slots[l1] {
            Some(entry) if entry.key == *key => l1,
            Some(_) => return None,
            None => {
                let l2 = self.h2(key);
                if !self.holds(l2, key) {
                    return None;
                }
                l2
            }
        };
        let entry = self.slots[loc].take()?;
        self.len -= 1;
        Some(entry.value)
    }

    pub fn slot(&self, index: usize) -> Option<(&K, &V)> {
        self.slots
            .get(index)?
            .as_ref()
            .map(|entry| (&entry.key, &entry.value))
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }
}

impl<K, V> CuckooTable<K, V, LinearHash, LinearHash>
where
    K: Copy + Into<u64> + PartialEq,
{
    /// A table over integer keys with two independently seeded linear hashes.
    pub fn with_seeds(size: usize, seed1: u64, seed2: u64) -> Result<Self, TableError> {
        CuckooTable::new(
            size,
            LinearHash::with_seed(size, seed1),
            LinearHash::with_seed(size, seed2),
        )
    }
}
