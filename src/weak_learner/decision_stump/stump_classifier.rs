//! Defines the classifier produced by `DecisionStump`.
use crate::{Classifier, Sample};

use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::Neg;


/// The polarity of a stump:
/// the label predicted for the examples
/// whose feature value is greater than or equals to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    /// Predict `-1` at or above the threshold.
    Negative,
    /// Predict `+1` at or above the threshold.
    Positive,
}


impl From<Sign> for f64 {
    #[inline]
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }
}


impl Neg for Sign {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}


impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self {
            Sign::Negative => "-1",
            Sign::Positive => "+1",
        };
        write!(f, "{sign}")
    }
}


/// Decision stump classifier.
/// The fitted rule is the triple of
/// a feature index, a threshold, and a polarity:
/// an example is predicted as `sign`
/// if its value at the feature is greater than or equals to the threshold,
/// and as `-sign` otherwise.
/// The threshold may be `-∞` ("everything is at or above")
/// or `+∞` ("everything is below").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StumpClassifier {
    pub(super) feature_index: usize,
    pub(super) threshold: f64,
    pub(super) sign: Sign,
}


impl StumpClassifier {
    /// The index of the feature this stump splits on.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// The threshold this stump splits at.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// The polarity of this stump.
    pub fn sign(&self) -> Sign {
        self.sign
    }


    /// Training loss of this stump over `sample`,
    /// measured by the misclassification error
    /// (the unweighted fraction of mismatched labels).
    pub fn loss(&self, sample: &Sample) -> f64 {
        let predictions = self.predict_all(sample);
        crate::common::misclassification_error(sample.target(), &predictions)
    }
}


impl Classifier for StumpClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let value = sample.features()[self.feature_index][row];

        if value >= self.threshold {
            f64::from(self.sign)
        } else {
            f64::from(-self.sign)
        }
    }
}


impl fmt::Display for StumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let j = self.feature_index;
        write!(
            f,
            "h(x) = {} if x[{j}] >= {}, else {}",
            self.sign,
            self.threshold,
            -self.sign,
        )
    }
}
