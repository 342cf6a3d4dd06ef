//! Property tests for the statistics engine
//!
//! Run with: cargo test --test properties

use proptest::prelude::*;
use tempstats::statistics::{count, max, mean, min, sample_variance, sum, summarize, variance};
use tempstats::EmptyInputError;

/// Plausible sensor readings, including far-off outliers
fn reading() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -60.0..60.0f64,
        1 => -1e6..1e6f64,
    ]
}

fn readings(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(reading(), min_len..=max_len)
}

fn relative_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn count_is_length(data in readings(0, 200)) {
        prop_assert_eq!(count(&data), data.len());
    }

    #[test]
    fn extremes_bound_every_reading(data in readings(1, 200)) {
        let lo = min(&data).unwrap();
        let hi = max(&data).unwrap();
        for &x in &data {
            prop_assert!(lo <= x && x <= hi, "{} outside [{}, {}]", x, lo, hi);
        }
        prop_assert!(data.contains(&lo));
        prop_assert!(data.contains(&hi));
    }

    #[test]
    fn mean_within_extremes(data in readings(1, 200)) {
        let m = mean(&data).unwrap();
        prop_assert!(min(&data).unwrap() <= m && m <= max(&data).unwrap());
    }

    #[test]
    fn mean_within_extremes_for_constant(value in reading(), n in 1usize..100) {
        let data = vec![value; n];
        prop_assert_eq!(mean(&data).unwrap(), value);
        prop_assert_eq!(variance(&data).unwrap(), 0.0);
    }

    #[test]
    fn variance_non_negative(data in readings(1, 200)) {
        prop_assert!(variance(&data).unwrap() >= 0.0);
        prop_assert!(sample_variance(&data).unwrap() >= 0.0);
    }

    #[test]
    fn single_reading_has_zero_variance(x in any::<f64>()) {
        prop_assert_eq!(variance(&[x]).unwrap(), 0.0);
        prop_assert_eq!(sample_variance(&[x]).unwrap(), 0.0);
    }

    #[test]
    fn order_invariant(data in readings(1, 100), seed in any::<u64>()) {
        // Fisher-Yates with a xorshift stream
        let mut shuffled = data.clone();
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        prop_assert_eq!(count(&shuffled), count(&data));
        prop_assert_eq!(min(&shuffled), min(&data));
        prop_assert_eq!(max(&shuffled), max(&data));
        prop_assert!(relative_close(mean(&shuffled).unwrap(), mean(&data).unwrap()));
        prop_assert!(relative_close(variance(&shuffled).unwrap(), variance(&data).unwrap()));
    }

    #[test]
    fn mean_is_sum_over_count(data in readings(1, 200)) {
        let expected = sum(&data) / data.len() as f64;
        prop_assert!(relative_close(mean(&data).unwrap(), expected));
    }

    #[test]
    fn variance_shift_invariant(data in readings(2, 100), shift in -100.0..100.0f64) {
        // Keep magnitudes small so the shift itself adds little rounding
        let small: Vec<f64> = data.iter().map(|x| x % 100.0).collect();
        let shifted: Vec<f64> = small.iter().map(|x| x + shift).collect();
        let a = variance(&small).unwrap();
        let b = variance(&shifted).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "{} vs {}", a, b);
    }

    #[test]
    fn summary_matches_free_functions(data in readings(1, 100)) {
        let summary = summarize(&data).unwrap();
        prop_assert_eq!(summary.count, count(&data));
        prop_assert_eq!(Ok(summary.min), min(&data));
        prop_assert_eq!(Ok(summary.max), max(&data));
        prop_assert_eq!(Ok(summary.mean), mean(&data));
        prop_assert_eq!(Ok(summary.variance), variance(&data));
        prop_assert_eq!(Ok(summary.sample_variance), sample_variance(&data));
    }
}

#[test]
fn empty_always_rejected() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(min(&empty), Err(EmptyInputError));
    assert_eq!(max(&empty), Err(EmptyInputError));
    assert_eq!(mean(&empty), Err(EmptyInputError));
    assert_eq!(variance(&empty), Err(EmptyInputError));
}
