//! Opt-in validation on top of the silent platform semantics.

use core::fmt;

use crate::generator::{Generator, MODULUS};
use crate::range::Bounds;

/// Largest seed that keeps the generator on its canonical cycle.
pub const MAX_SEED: i64 = MODULUS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// `upper <= lower`
    EmptyRange { lower: i32, upper: i32 },
    NonPositiveSeed(i64),
    SeedOutOfRange(i64),
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::EmptyRange { lower, upper } => {
                write!(f, "empty range [{}, {})", lower, upper)
            }
            RandomError::NonPositiveSeed(seed) => {
                write!(f, "seed {} is not positive and would be ignored", seed)
            }
            RandomError::SeedOutOfRange(seed) => {
                write!(f, "seed {} exceeds the maximum of {}", seed, MAX_SEED)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RandomError {}

impl Bounds {
    /// Rejects empty or reversed intervals.
    pub fn validate(self) -> Result<Self, RandomError> {
        if self.is_empty() {
            return Err(RandomError::EmptyRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(self)
    }
}

impl Generator {
    /// Like [`Generator::random`], but fails on an empty interval without advancing.
    pub fn try_random(&mut self, a: i32, b: Option<i32>) -> Result<i64, RandomError> {
        let bounds = Bounds::resolve(a, b).validate()?;
        Ok(bounds.map(self.advance()))
    }

    pub fn try_random_below(&mut self, upper: i32) -> Result<i64, RandomError> {
        self.try_random(upper, None)
    }

    pub fn try_random_range(&mut self, lower: i32, upper: i32) -> Result<i64, RandomError> {
        self.try_random(lower, Some(upper))
    }

    /// Like [`Generator::seed`], but reports seeds the platform would ignore or that
    /// fall outside `[1, MAX_SEED]`. The state is untouched on error.
    pub fn try_seed(&mut self, seed: i64) -> Result<(), RandomError> {
        if seed <= 0 {
            return Err(RandomError::NonPositiveSeed(seed));
        }
        if seed > MAX_SEED {
            return Err(RandomError::SeedOutOfRange(seed));
        }
        self.seed(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_random_matches_default_path() {
        let mut strict = Generator::new();
        let mut silent = Generator::new();

        for _ in 0..50 {
            assert_eq!(
                strict.try_random_range(5, 15),
                Ok(silent.random_range(5, 15))
            );
            assert_eq!(strict.try_random_below(64), Ok(silent.random_below(64)));
        }
    }

    #[test]
    fn test_empty_range_does_not_advance() {
        let mut rng = Generator::new();

        assert_eq!(
            rng.try_random_range(10, 5),
            Err(RandomError::EmptyRange { lower: 10, upper: 5 })
        );
        assert_eq!(
            rng.try_random_below(0),
            Err(RandomError::EmptyRange { lower: 0, upper: 0 })
        );
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn test_try_seed() {
        let mut rng = Generator::new();

        assert_eq!(rng.try_seed(0), Err(RandomError::NonPositiveSeed(0)));
        assert_eq!(rng.try_seed(-5), Err(RandomError::NonPositiveSeed(-5)));
        assert_eq!(
            rng.try_seed(MODULUS),
            Err(RandomError::SeedOutOfRange(MODULUS))
        );
        assert_eq!(rng.state(), 1);

        assert_eq!(rng.try_seed(MAX_SEED), Ok(()));
        assert_eq!(rng.state(), MAX_SEED);
        assert_eq!(rng.try_seed(42), Ok(()));
        assert_eq!(rng.state(), 42);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        assert_eq!(
            RandomError::EmptyRange { lower: 3, upper: 1 }.to_string(),
            "empty range [3, 1)"
        );
        assert_eq!(
            RandomError::NonPositiveSeed(0).to_string(),
            "seed 0 is not positive and would be ignored"
        );
    }
}
