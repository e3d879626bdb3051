use rand::{Rng, SeedableRng};

/// Maps a key to a slot index. Implementations must be deterministic for the
/// lifetime of the table they are bound to.
pub trait SlotHash<K: ?Sized> {
    fn slot(&self, key: &K) -> usize;
}

impl<K: ?Sized, F> SlotHash<K> for F
where
    F: Fn(&K) -> usize,
{
    fn slot(&self, key: &K) -> usize {
        self(key)
    }
}

// 2^61 - 1
const MERSENNE_61: u64 = (1 << 61) - 1;

/// Universal hash `((a * k + b) mod p) mod m` for integer keys, with `a` and `b`
/// drawn from a seeded PRNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearHash {
    a: u64,
    b: u64,
    m: u64,
}

impl LinearHash {
    pub fn new<R: Rng>(size: usize, prng: &mut R) -> LinearHash {
        LinearHash {
            a: prng.gen_range(1..MERSENNE_61),
            b: prng.gen_range(0..MERSENNE_61),
            m: size.max(1) as u64,
        }
    }

    pub fn with_seed(size: usize, seed: u64) -> LinearHash {
        LinearHash::new(size, &mut rand::rngs::SmallRng::seed_from_u64(seed))
    }
}

impl<K: Copy + Into<u64>> SlotHash<K> for LinearHash {
    fn slot(&self, key: &K) -> usize {
        let k: u64 = (*key).into();
        let h = (self.a as u128 * k as u128 + self.b as u128) % MERSENNE_61 as u128;
        (h % self.m as u128) as usize
    }
}

/// Seeded farmhash over the key's bytes. The table reduces the result to its
/// own size, so one instance works for any capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FarmHash {
    seed: u64,
}

impl FarmHash {
    pub fn new(seed: u64) -> FarmHash {
        FarmHash { seed }
    }
}

impl<K: AsRef<[u8]> + ?Sized> SlotHash<K> for FarmHash {
    fn slot(&self, key: &K) -> usize {
        farmhash::hash64_with_seed(key.as_ref(), self.seed) as usize
    }
}
