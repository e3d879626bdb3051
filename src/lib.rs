pub mod assemble;
pub mod cuckoo;
pub mod error;
pub mod hash;
pub mod shared;

pub use cuckoo::{CuckooTable, Entry};
pub use error::TableError;
pub use hash::{FarmHash, LinearHash, SlotHash};
pub use shared::SharedTable;
