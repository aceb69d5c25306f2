//! Defines the decision stump learner and its classifier.

/// Defines the decision stump weak learner.
pub mod stump_algorithm;
/// Defines the classifier produced by `DecisionStump`.
pub mod stump_classifier;
/// Defines the threshold search.
pub mod threshold;


pub use stump_algorithm::DecisionStump;
pub use stump_classifier::{StumpClassifier, Sign};
pub use threshold::find_threshold;
