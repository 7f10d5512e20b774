use rand::rngs::StdRng;
use rand::{FromEntropy, Rng, SeedableRng};

/// Draws integers uniformly from `[low, high)`.
pub trait UniformSource {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
}

/// Adapts a `rand` generator into a `UniformSource`.
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    rng: R,
}

impl<R: Rng> RandSource<R> {
    pub fn new(rng: R) -> RandSource<R> {
        RandSource { rng }
    }
}

impl RandSource<StdRng> {
    pub fn seeded(seed: u64) -> RandSource<StdRng> {
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.chunks_mut(8).enumerate() {
            // fill all 32 key bytes from the one seed
            let word = seed.rotate_left(16 * i as u32) ^ (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        RandSource::new(StdRng::from_seed(bytes))
    }

    pub fn from_entropy() -> RandSource<StdRng> {
        RandSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource for RandSource<R> {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low, high)
    }
}
