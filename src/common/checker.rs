//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;


const SIMPLEX_TOLERANCE: f64 = 1e-5;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample)
{
    let (n_sample, n_feature) = sample.shape();


    // `data` and `target` must have the length greater than `0`.
    assert!(n_sample > 0);


    // `data` must have a feature.
    assert!(n_feature > 0);
}


/// Check whether `dist` is a distribution over `n_sample` examples.
#[inline(always)]
pub(crate) fn check_distribution(dist: &[f64], n_sample: usize) {
    assert_eq!(
        dist.len(), n_sample,
        "the distribution length differs from the number of examples"
    );

    let sum = dist.iter().sum::<f64>();
    assert!((sum - 1f64).abs() < SIMPLEX_TOLERANCE, "sum(dist[..]) = {sum}");

    assert!(
        dist.iter().all(|d| *d >= 0f64),
        "some element of dist[..] is negative"
    );
}
