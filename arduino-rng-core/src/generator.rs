use crate::range::Bounds;

/// Modulus of the generator, `2^31 - 1`.
pub const MODULUS: i64 = 0x7fff_ffff;

/// State every generator starts from, matching the firmware at reset.
pub const INITIAL_STATE: i64 = 1;

/// Value substituted for a zero state, which is a fixed point of the multiplication.
pub const ZERO_STATE_RESEED: i64 = 123_459_876;

const MULTIPLIER: i64 = 16_807;
// Schrage's decomposition of the modulus: MODULUS = MULTIPLIER * QUOTIENT + REMAINDER
const QUOTIENT: i64 = 127_773;
const REMAINDER: i64 = 2_836;

/// The platform LCG with its single state cell.
///
/// Not synchronized: every mutating call takes `&mut self`. Use
/// [`crate::global`] for a drop-in process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generator {
    state: i64,
}

impl Generator {
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
        }
    }

    /// Builds a generator with an arbitrary raw state, bypassing the reseed guard.
    ///
    /// Mostly useful to resume a captured sequence or to reach the zero state.
    pub const fn from_state(state: i64) -> Self {
        Self { state }
    }

    pub const fn state(&self) -> i64 {
        self.state
    }

    /// Advances the state and returns it.
    ///
    /// For any state in `[0, 2^31 - 2]` the result is in `[1, 2^31 - 2]`. A zero state is
    /// treated as [`ZERO_STATE_RESEED`]. Division and remainder truncate toward zero.
    pub fn advance(&mut self) -> i64 {
        let mut x = self.state;
        if x == 0 {
            log::trace!("zero state, substituting {}", ZERO_STATE_RESEED);
            x = ZERO_STATE_RESEED;
        }

        let hi = x / QUOTIENT;
        let lo = x % QUOTIENT;
        x = MULTIPLIER * lo - REMAINDER * hi;
        if x < 0 {
            x += MODULUS;
        }

        self.state = x;
        x
    }

    /// Reseeds with `seed` if it is positive. Zero and negative seeds are ignored.
    pub fn seed(&mut self, seed: i64) {
        if seed > 0 {
            self.state = seed;
        } else {
            log::trace!("ignoring non-positive seed {}", seed);
        }
    }

    /// Draws from `[0, a)` when `b` is `None`, otherwise from `[a, b)`.
    ///
    /// Always advances exactly once. Bounds are not validated, see [`Bounds::map`].
    pub fn random(&mut self, a: i32, b: Option<i32>) -> i64 {
        let bounds = Bounds::resolve(a, b);
        bounds.map(self.advance())
    }

    /// One-argument form, `random(upper)`.
    pub fn random_below(&mut self, upper: i32) -> i64 {
        self.random(upper, None)
    }

    /// Two-argument form, `random(lower, upper)`.
    pub fn random_range(&mut self, lower: i32, upper: i32) -> i64 {
        self.random(lower, Some(upper))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
