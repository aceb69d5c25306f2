use ministump::{find_threshold, Sign};

use rand::prelude::*;


/// Evaluates the weighted error of a concrete threshold directly:
/// an example whose value is at or above the threshold
/// is predicted as `sign`, the others as `-sign`.
fn error_of_threshold(
    values: &[f64],
    labels: &[f64],
    sign: f64,
    threshold: f64,
) -> f64
{
    let total_weight = labels.iter()
        .map(|y| y.abs())
        .sum::<f64>();

    values.iter()
        .zip(labels)
        .map(|(&v, &y)| {
            let prediction = if v >= threshold { sign } else { -sign };
            if y * prediction < 0.0 { y.abs() } else { 0.0 }
        })
        .sum::<f64>()
        / total_weight
}


/// The minimum weighted error over all `n + 1` candidate cuts,
/// evaluated by brute force.
fn brute_force_minimum(values: &[f64], labels: &[f64], sign: f64) -> f64 {
    let mut candidates = vec![f64::NEG_INFINITY, f64::INFINITY];
    candidates.extend_from_slice(values);

    candidates.into_iter()
        .map(|threshold| error_of_threshold(values, labels, sign, threshold))
        .min_by(|a, b| a.partial_cmp(b).unwrap())
        .unwrap()
}


#[test]
fn error_matches_brute_force_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let n = rng.gen_range(1..=30);

        // Integer-valued features so tied values occur often.
        let values = (0..n)
            .map(|_| rng.gen_range(0..10) as f64)
            .collect::<Vec<f64>>();

        // Class in {-1, +1} with an integer weight in [1, 5].
        let labels = (0..n)
            .map(|_| {
                let class = if rng.gen::<bool>() { 1.0 } else { -1.0 };
                let weight = rng.gen_range(1..=5) as f64;
                class * weight
            })
            .collect::<Vec<f64>>();

        for sign in [Sign::Negative, Sign::Positive] {
            let (threshold, error) = find_threshold(&values, &labels, sign);

            // Rounding in the sweep must never leak
            // outside the valid error range.
            assert!((0.0..=1.0).contains(&error));

            let expected = brute_force_minimum(
                &values, &labels, f64::from(sign)
            );
            assert!(
                (error - expected).abs() < 1e-9,
                "returned error {error} differs from \
                 the brute-force minimum {expected}"
            );

            // The returned threshold must realize the returned error.
            let realized = error_of_threshold(
                &values, &labels, f64::from(sign), threshold
            );
            assert!(
                (error - realized).abs() < 1e-9,
                "threshold {threshold} realizes error {realized}, \
                 but {error} was returned"
            );
        }
    }
}


#[test]
fn identical_inputs_produce_identical_outputs() {
    let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let labels = [1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, -1.0];

    for sign in [Sign::Negative, Sign::Positive] {
        let first = find_threshold(&values, &labels, sign);
        let second = find_threshold(&values, &labels, sign);
        assert_eq!(first, second);
    }
}


#[test]
fn separable_data_splits_between_the_classes() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let labels = [-1.0, -1.0, 1.0, 1.0];

    let (threshold, error) = find_threshold(&values, &labels, Sign::Positive);
    assert_eq!(error, 0.0);
    // The rule is `value >= threshold`,
    // so the cut lands on the smallest positive example.
    assert_eq!(threshold, 3.0);
}


#[test]
fn one_class_data_attains_zero_error() {
    let values = [1.0, 2.0, 3.0];
    let labels = [1.0, 1.0, 1.0];

    let (_, error) = find_threshold(&values, &labels, Sign::Positive);
    assert_eq!(error, 0.0);
}


#[test]
fn weights_move_the_optimal_threshold() {
    let values = [1.0, 2.0, 3.0, 4.0];

    // Count-based optimum: predict `-1` only below `2.0`,
    // misclassifying the single negative example at `4.0`.
    let unweighted = [-1.0, 1.0, 1.0, -1.0];
    let (threshold, error) = find_threshold(
        &values, &unweighted, Sign::Positive
    );
    assert_eq!(threshold, 2.0);
    assert_eq!(error, 0.25);

    // Putting weight 4 on the example at `4.0` flips the optimum:
    // it is now cheaper to predict everything as `-1`.
    let weighted = [-1.0, 1.0, 1.0, -4.0];
    let (threshold, error) = find_threshold(
        &values, &weighted, Sign::Positive
    );
    assert_eq!(threshold, f64::INFINITY);
    assert!((error - 2.0 / 7.0).abs() < 1e-9);
}
