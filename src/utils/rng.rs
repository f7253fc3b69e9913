use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hands out deterministic RNG streams derived from an experiment's seed.
///
/// Every consumer asks for its stream by name, so the training loop, the
/// reference generator and any exploration noise stay reproducible and
/// independent of the order in which they are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// RNG for a named consumer, seeded from the hash of (master seed, name).
    ///
    /// The hash is 64-bit FNV-1a over the little-endian seed bytes followed by
    /// the name bytes, so a seed names the same streams on every toolchain.
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.derive_seed(name))
    }

    /// RNG for a single evaluation run, e.g. the `run`-th rollout after learning.
    pub fn run_rng(&self, run: usize) -> ChaCha8Rng {
        self.get_rng(&format!("run_{run}"))
    }

    fn derive_seed(&self, name: &str) -> u64 {
        self.master_seed
            .to_le_bytes()
            .iter()
            .chain(name.as_bytes())
            .fold(FNV_OFFSET_BASIS, |hash, &byte| {
                (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
            })
    }
}
