/// Half-open interval `[lower, upper)` for a range draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub lower: i32,
    pub upper: i32,
}

impl Bounds {
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Resolves the one/two-argument calling convention: `(a, None)` is `[0, a)`,
    /// `(a, Some(b))` is `[a, b)`.
    pub const fn resolve(a: i32, b: Option<i32>) -> Self {
        match b {
            Some(upper) => Self::new(a, upper),
            None => Self::new(0, a),
        }
    }

    /// Width of the interval. Negative or zero when `upper <= lower`.
    pub const fn span(&self) -> i64 {
        self.upper as i64 - self.lower as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.upper <= self.lower
    }

    /// Maps a raw generator value into the interval with a truncating remainder.
    ///
    /// No rejection sampling: the bias toward low values is part of the platform
    /// behaviour. When `upper < lower` the remainder keeps the sign of `raw`, and an empty
    /// interval (`upper == lower`) maps everything to `lower`.
    pub const fn map(&self, raw: i64) -> i64 {
        let offset = match raw.checked_rem(self.span()) {
            Some(rem) => rem,
            None => 0,
        };
        self.lower as i64 + offset
    }
}

impl From<i32> for Bounds {
    fn from(upper: i32) -> Self {
        Self::resolve(upper, None)
    }
}

impl From<(i32, i32)> for Bounds {
    fn from((lower, upper): (i32, i32)) -> Self {
        Self::new(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Bounds::resolve(10, None), Bounds::new(0, 10));
        assert_eq!(Bounds::resolve(5, Some(15)), Bounds::new(5, 15));
        assert_eq!(Bounds::from(7), Bounds::new(0, 7));
        assert_eq!(Bounds::from((-3, 3)), Bounds::new(-3, 3));
    }

    #[test]
    fn test_map_in_range() {
        let bounds = Bounds::new(5, 15);
        assert_eq!(bounds.map(16807), 12);
        assert_eq!(bounds.map(0), 5);
        assert_eq!(bounds.map(9), 14);
        assert_eq!(bounds.map(10), 5);
    }

    #[test]
    fn test_map_negative_lower() {
        let bounds = Bounds::new(-10, -2);
        assert_eq!(bounds.map(16807), -10 + 16807 % 8);
        assert!((-10..-2).contains(&bounds.map(2147483646)));
    }

    #[test]
    fn test_map_reversed_bounds() {
        // span is -5, truncating remainder of a positive value stays positive
        let bounds = Bounds::new(10, 5);
        assert!(bounds.is_empty());
        assert_eq!(bounds.span(), -5);
        assert_eq!(bounds.map(16807), 12);
        assert_eq!(bounds.map(282475249), 14);
    }

    #[test]
    fn test_map_zero_span() {
        let bounds = Bounds::new(3, 3);
        assert_eq!(bounds.map(16807), 3);
        assert_eq!(Bounds::resolve(0, None).map(16807), 0);
    }

    #[test]
    fn test_map_extreme_bounds_do_not_overflow() {
        let bounds = Bounds::new(i32::MIN, i32::MAX);
        assert_eq!(bounds.span(), u32::MAX as i64);
        assert_eq!(bounds.map(16807), i32::MIN as i64 + 16807);

        let reversed = Bounds::new(i32::MAX, i32::MIN);
        assert_eq!(reversed.map(16807), i32::MAX as i64 + 16807);
    }
}
