use anyhow::anyhow;
use tracing::{debug, info};

use crate::cuckoo::CuckooTable;
use crate::hash::SlotHash;

/// Builds a table of exactly `cap` slots holding every entry of `input`.
pub fn assemble<K, V, H1, H2, F>(
    input: &[(K, V)],
    cap: usize,
    hashers: &mut F,
) -> anyhow::Result<CuckooTable<K, V, H1, H2>>
where
    K: Clone + PartialEq + std::fmt::Debug,
    V: Clone,
    H1: SlotHash<K>,
    H2: SlotHash<K>,
    F: FnMut(usize) -> (H1, H2),
{
    let (h1, h2) = hashers(cap);
    let mut table = CuckooTable::new(cap, h1, h2)?;
    for (i, (k, v)) in input.iter().enumerate() {
        if !table.put(k.clone(), v.clone()) {
            return Err(anyhow::format_err!(
                "could not place entry {} ({:?}) in {} slots",
                i,
                k,
                cap
            ));
        }
    }
    debug!(cap, entries = input.len(), "assembled cuckoo table");
    Ok(table)
}

/// Tries each capacity in turn and returns the first table that holds all of
/// `input`. The table itself never grows; this is where a caller that needs
/// more room asks for it.
pub fn try_assemble<K, V, H1, H2, F>(
    input: &[(K, V)],
    cap: impl IntoIterator<Item = usize>,
    mut hashers: F,
) -> anyhow::Result<CuckooTable<K, V, H1, H2>>
where
    K: Clone + PartialEq + std::fmt::Debug,
    V: Clone,
    H1: SlotHash<K>,
    H2: SlotHash<K>,
    F: FnMut(usize) -> (H1, H2),
{
    let mut errs = Vec::new();
    for c in cap {
        match assemble(input, c, &mut hashers) {
            Ok(table) => return Ok(table),
            Err(err) => {
                info!(cap = c, "capacity too small, trying the next one");
                errs.push(err)
            }
        };
    }
    Err(anyhow!("could not assemble a cuckoo table: {:?}", errs))
}
