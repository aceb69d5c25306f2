//! Provides the decision stump weak learner.
use rayon::prelude::*;


use crate::{Sample, WeakLearner};
use crate::checker;


use super::{
    threshold::find_threshold,
    stump_classifier::{Sign, StumpClassifier},
};

use std::fmt;


/// The Decision Stump algorithm.
/// Given a training sample and a distribution over its examples,
/// [`DecisionStump`] searches the pair of feature and polarity
/// whose best threshold attains
/// the minimal weighted misclassification error,
/// and returns the resulting [`StumpClassifier`].
///
/// # Example
/// ```no_run
/// use ministump::prelude::*;
///
/// // Read the training sample from a CSV file.
/// // We use the column named `class` as the label.
/// let sample = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Fit a stump with uniform example weights.
/// let stump = DecisionStump::new();
/// let f = stump.fit(&sample);
///
/// // Get the predictions on the training set.
/// let predictions = f.predict_all(&sample);
///
/// println!("Training loss is: {}", f.loss(&sample));
/// ```
pub struct DecisionStump;


impl DecisionStump {
    /// Construct a new instance of [`DecisionStump`].
    /// The learner has no parameter to set.
    pub fn new() -> Self {
        Self
    }


    /// Fits a stump to `sample` with the uniform distribution
    /// over the examples.
    /// Label magnitudes other than `1` still act as example weights,
    /// so a caller may encode weighted examples
    /// by scaling the target values.
    pub fn fit(&self, sample: &Sample) -> StumpClassifier {
        let n_sample = sample.shape().0;
        let dist = vec![1.0 / n_sample as f64; n_sample];

        self.produce(sample, &dist)
    }
}


impl Default for DecisionStump {
    fn default() -> Self {
        Self::new()
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = StumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Self::Hypothesis
    {
        checker::check_sample(sample);
        checker::check_distribution(dist, sample.shape().0);

        let target = sample.target();

        // Weighted labels.
        // The sign carries the class, the magnitude carries the weight.
        let labels = target.iter()
            .zip(dist)
            .map(|(y, d)| y * d)
            .collect::<Vec<f64>>();

        // For each feature, search the best threshold for both polarities.
        // Each search is independent,
        // so the feature loop runs in parallel.
        // Candidates are compared by the pair `(error, feature index)`
        // with the polarity loop kept sequential,
        // so the winner does not depend on the schedule:
        // ties resolve to the smallest feature index,
        // and to `Sign::Negative` within a feature.
        let (_, feature_index, threshold, sign) = sample.features()
            .par_iter()
            .enumerate()
            .map(|(j, feature)| {
                let values = feature.values();

                [Sign::Negative, Sign::Positive].into_iter()
                    .map(|sign| {
                        let (threshold, error) = find_threshold(
                            values, &labels, sign
                        );
                        (error, j, threshold, sign)
                    })
                    .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap())
                    .unwrap()
            })
            .min_by(|a, b| {
                (a.0, a.1).partial_cmp(&(b.0, b.1)).unwrap()
            })
            .expect("The sample has no feature");

        StumpClassifier { feature_index, threshold, sign, }
    }
}


impl fmt::Display for DecisionStump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Stump Weak Learner\n\n\
            - Search: every (feature, polarity) pair\n\
            - Criterion: weighted misclassification error\n\
            ----------\
            "
        )
    }
}
