use rand::RngCore;

/// Rng whose every `f64` draw yields the same value.
pub(crate) struct FixedRng(u64);

impl FixedRng {
    pub(crate) fn new(value: f64) -> Self {
        // `random::<f64>()` keeps the top 53 bits of one `next_u64`
        Self(((value * (1u64 << 53) as f64) as u64) << 11)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.0.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
