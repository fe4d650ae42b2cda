#![cfg_attr(not(feature = "std"), no_std)]

//! Bit-exact reproduction of the Arduino core `random()` / `randomSeed()` generator.
//!
//! The platform generator is the Park-Miller "minimal standard" LCG
//! (`x' = 16807 * x mod (2^31 - 1)`), evaluated with Schrage's factorization so the
//! product never needs more than 32 bits of headroom. Host-side code that seeds a
//! [`Generator`] the same way as the firmware observes the same sequence.
//!
//! ```
//! use arduino_rng_core::Generator;
//!
//! let mut rng = Generator::new();
//! assert_eq!(rng.advance(), 16807);
//! assert_eq!(rng.random_range(5, 15), 14);
//! ```

mod generator;
mod range;
mod strict;

#[cfg(feature = "rand")]
mod adapter;

#[cfg(feature = "std")]
pub mod global;

pub use generator::{Generator, INITIAL_STATE, MODULUS, ZERO_STATE_RESEED};
pub use range::Bounds;
pub use strict::{RandomError, MAX_SEED};
