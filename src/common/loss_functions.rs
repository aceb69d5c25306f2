//! Loss functions for classification.

/// Zero-one loss for a single prediction.
/// A prediction with the correct sign incurs no loss.
pub fn zero_one_loss(true_label: f64, prediction: f64) -> f64 {
    let prediction = if prediction > 0.0 { 1.0 } else { -1.0 };
    if true_label * prediction > 0.0 { 0.0 } else { 1.0 }
}


/// Misclassification error:
/// the fraction of mismatched labels over the sample.
/// No weighting is applied at this boundary.
///
/// This method panics if `target` and `predictions`
/// have different lengths or are empty.
pub fn misclassification_error(target: &[f64], predictions: &[i64]) -> f64 {
    let n_sample = target.len();
    assert_eq!(
        n_sample, predictions.len(),
        "`target` and `predictions` must have the same length"
    );
    assert!(n_sample > 0);

    target.iter()
        .zip(predictions)
        .map(|(&y, &p)| zero_one_loss(y, p as f64))
        .sum::<f64>()
        / n_sample as f64
}
