//! Process-wide generator with the platform's free-function API.
//!
//! Every call locks a single mutex, so concurrent callers see a consistent sequence but
//! in an unspecified interleaving. Use [`with_generator`] to draw several values without
//! another thread advancing in between.

use std::sync::{Mutex, MutexGuard};

use crate::generator::Generator;

static GENERATOR: Mutex<Generator> = Mutex::new(Generator::new());

fn lock() -> MutexGuard<'static, Generator> {
    // A panic while holding the lock cannot leave the integer state half-written
    GENERATOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` with exclusive access to the shared generator.
pub fn with_generator<T>(f: impl FnOnce(&mut Generator) -> T) -> T {
    f(&mut lock())
}

pub fn advance() -> i64 {
    lock().advance()
}

pub fn random(a: i32, b: Option<i32>) -> i64 {
    lock().random(a, b)
}

pub fn random_below(upper: i32) -> i64 {
    lock().random_below(upper)
}

pub fn random_range(lower: i32, upper: i32) -> i64 {
    lock().random_range(lower, upper)
}

/// `randomSeed()`: only positive seeds take effect.
pub fn random_seed(seed: i64) {
    lock().seed(seed)
}

pub fn state() -> i64 {
    lock().state()
}
