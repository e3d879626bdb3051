#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one slot for its hash functions to map into.
    #[error("cuckoo table capacity must be greater than zero")]
    ZeroCapacity,
}
