#![cfg(feature = "rand")]

use arduino_rng_core::Generator;
use rand::{Rng, RngCore, SeedableRng};

#[test]
fn test_drives_rand_helpers() {
    let mut a = Generator::seed_from_u64(99);
    let mut b = a.clone();

    for _ in 0..100 {
        let value: u8 = a.gen_range(0..10);
        assert!(value < 10);
        assert_eq!(value, b.gen_range(0..10));
    }
}

#[test]
fn test_range_draws_cover_upper_half() {
    let mut rng = Generator::from_seed(1234i32.to_le_bytes());
    let mut hist = [0usize; 10];
    for _ in 0..1_000 {
        hist[rng.gen_range(0..10usize)] += 1;
    }
    assert!(hist.iter().all(|&count| count > 50), "hist={:?}", hist);
}

#[test]
fn test_bool_and_float_helpers_are_balanced() {
    let mut rng = Generator::from_seed(1234i32.to_le_bytes());
    let trues = (0..1_000).filter(|_| rng.gen_bool(0.5)).count();
    assert!((400..600).contains(&trues), "trues={}", trues);

    let max = (0..1_000).map(|_| rng.gen::<f64>()).fold(0.0, f64::max);
    assert!(max > 0.9, "max={}", max);
}

#[test]
fn test_from_seed_matches_native_seeding() {
    let mut adapted = Generator::from_seed(1234i32.to_le_bytes());
    let mut native = Generator::new();
    native.seed(1234);

    assert_eq!(adapted.state(), native.state());
    assert_eq!(adapted.advance(), native.advance());
}
