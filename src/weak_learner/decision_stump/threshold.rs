//! Provides the threshold search for the decision stump.
use super::stump_classifier::Sign;


/// Given a feature vector and labels,
/// finds the threshold minimizing the weighted misclassification error
/// for the given polarity `sign`.
///
/// Each label encodes the class via its sign
/// and the example weight via its magnitude,
/// so a boosting algorithm passes `dist[i] * y[i]` as the i'th label.
/// The returned error is normalized by the total weight,
/// so it takes a value in `[0, 1]`.
///
/// The splitting rule is:
/// an example whose value is greater than or equals to the threshold
/// is predicted as `sign`, the others are predicted as `-sign`.
/// There are `n + 1` candidate cuts over the sorted feature values,
/// including the two unbounded ones;
/// the cut below the smallest value maps to threshold `-∞`
/// and the cut above the largest value maps to `+∞`.
/// Ties are broken by the earliest cut in sorted order.
///
/// This method panics if `values` and `labels` have different lengths,
/// if they are empty,
/// or if the total weight `Σ |labels[i]|` is zero.
///
/// # Example
/// ```
/// use ministump::{find_threshold, Sign};
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// let labels = [-1.0, -1.0, 1.0, 1.0];
///
/// let (threshold, error) = find_threshold(&values, &labels, Sign::Positive);
/// assert_eq!(threshold, 3.0);
/// assert_eq!(error, 0.0);
/// ```
pub fn find_threshold(values: &[f64], labels: &[f64], sign: Sign)
    -> (f64, f64)
{
    let n_sample = values.len();
    assert_eq!(
        n_sample, labels.len(),
        "`values` and `labels` must have the same length"
    );
    assert!(n_sample > 0, "Attempted to split an empty feature");


    let mut pairs = values.iter()
        .copied()
        .zip(labels.iter().copied())
        .collect::<Vec<(f64, f64)>>();
    pairs.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap());


    let total_weight = pairs.iter()
        .map(|(_, y)| y.abs())
        .sum::<f64>();
    assert!(total_weight > 0f64, "The total weight Σ |labels[i]| is zero");


    let sign = f64::from(sign);

    // The signed, normalized cost of moving the i'th sorted example
    // below the cut.
    // A positive entry agrees with `sign`,
    // so it becomes misclassified once it falls below the cut;
    // a negative entry is misclassified as long as it stays above.
    let costs = pairs.iter()
        .map(|(_, y)| sign * y / total_weight)
        .collect::<Vec<f64>>();


    // Error of the cut below the smallest value:
    // every example is predicted as `sign`,
    // so the examples disagreeing with `sign` are misclassified.
    let bottom_error = costs.iter()
        .map(|cost| f64::max(0f64, -cost))
        .sum::<f64>();

    // Error of the cut above the largest value:
    // every example is predicted as `-sign`.
    // Computed directly, like the bottom one,
    // so the endpoint carries no accumulated rounding drift.
    let top_error = costs.iter()
        .map(|cost| f64::max(0f64, *cost))
        .sum::<f64>();

    let mut error = bottom_error;
    let mut best_error = bottom_error;
    let mut best_cut = 0_usize;

    // Sweep the interior cuts from left to right.
    // The cut at position `k` predicts `pairs[..k]` as `-sign`
    // and `pairs[k..]` as `sign`.
    for k in 1..n_sample {
        error += costs[k - 1];

        // A cut inside a run of tied values separates nothing,
        // so it is not a valid candidate.
        if pairs[k - 1].0 == pairs[k].0 {
            continue;
        }

        if error < best_error {
            best_error = error;
            best_cut = k;
        }
    }

    if top_error < best_error {
        best_error = top_error;
        best_cut = n_sample;
    }


    let threshold = if best_cut == 0 {
        f64::NEG_INFINITY
    } else if best_cut == n_sample {
        f64::INFINITY
    } else {
        pairs[best_cut].0
    };

    // An interior cut accumulates rounding,
    // which must not push the error below zero.
    (threshold, f64::max(0f64, best_error))
}
