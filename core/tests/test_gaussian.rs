//! Tests for the polar-method Gaussian and its cached spare

use jrandom_core::JavaRandom;

/// Count `next_double` draws needed for `probe` to reach `target`'s state
///
/// Each `next_double` is two `next` calls.
fn doubles_between(mut probe: JavaRandom, target: &JavaRandom) -> usize {
    let mut doubles = 0;
    while probe.state() != target.state() {
        probe.next_double();
        doubles += 1;
        assert!(doubles < 1_000, "target state unreachable");
    }
    doubles
}

#[test]
fn test_gaussian_pair_draw_counts() {
    for seed in [0, 7, 42, 12345] {
        let fresh = JavaRandom::new(seed);
        let mut rng = fresh.clone();

        // First call: one accepted polar attempt = two doubles = four `next`
        rng.next_gaussian();
        let after_first = rng.clone();
        assert_eq!(doubles_between(fresh.clone(), &after_first), 2, "seed {}", seed);

        // Second call: served from the cache, no draws
        rng.next_gaussian();
        assert_eq!(rng.state(), after_first.state(), "seed {}", seed);

        // Third call: fresh polar draws resume
        rng.next_gaussian();
        assert_ne!(rng.state(), after_first.state(), "seed {}", seed);
        assert_eq!(doubles_between(after_first, &rng), 2, "seed {}", seed);
    }
}

#[test]
fn test_reseed_discards_cached_gaussian() {
    let mut rng = JavaRandom::new(12345);
    let first = rng.next_gaussian();
    assert!(rng.has_pending_gaussian());

    rng.set_seed(12345);
    assert!(!rng.has_pending_gaussian());

    // A fresh draw reproduces the first deviate, not the stale spare
    let after_reseed = rng.next_gaussian();
    assert_eq!(after_reseed.to_bits(), first.to_bits());
}

#[test]
fn test_gaussian_matches_manual_polar_method() {
    let mut rng = JavaRandom::new(99);
    let mut manual = rng.clone();

    let (expected_first, expected_second) = loop {
        let v1 = 2.0 * manual.next_double() - 1.0;
        let v2 = 2.0 * manual.next_double() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s < 1.0 && s != 0.0 {
            let multiplier = (-2.0 * s.ln() / s).sqrt();
            break (v1 * multiplier, v2 * multiplier);
        }
    };

    assert_eq!(rng.next_gaussian().to_bits(), expected_first.to_bits());
    assert_eq!(rng.next_gaussian().to_bits(), expected_second.to_bits());
    assert_eq!(rng.state(), manual.state());
}

#[test]
fn test_gaussian_moments() {
    let mut rng = JavaRandom::new(2024);
    let n = 100_000;
    let samples: Vec<f64> = (0..n).map(|_| rng.next_gaussian()).collect();

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert!(mean.abs() < 0.02, "mean {} too far from 0", mean);
    assert!((variance - 1.0).abs() < 0.03, "variance {} too far from 1", variance);
}

#[test]
fn test_gaussian_always_finite() {
    let mut rng = JavaRandom::new(-5);
    for _ in 0..10_000 {
        assert!(rng.next_gaussian().is_finite());
    }
}
