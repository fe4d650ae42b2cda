use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::generator::Generator;

impl RngCore for Generator {
    /// Two advances per word: each output carries only 31 random bits, so the
    /// first fills bits 31..1 and the top bit of the second fills bit 0.
    fn next_u32(&mut self) -> u32 {
        let high = self.advance() as u32;
        let low = self.advance() as u32;
        (high << 1) ^ (low >> 30)
    }

    fn next_u64(&mut self) -> u64 {
        let upper = self.next_u32() as u64;
        let lower = self.next_u32() as u64;
        (upper << 32) | lower
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Generator {
    type Seed = [u8; 4];

    /// Starts from the reset state and applies the seed as `randomSeed()` would.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Generator::new();
        rng.seed(i32::from_le_bytes(seed) as i64);
        rng
    }
}
