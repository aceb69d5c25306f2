#![warn(missing_docs)]

//!
//! A crate that provides a decision stump weak learner
//! for binary classification.
//!
//! A decision stump is a one-level decision tree:
//! it splits the examples on a single feature at a single threshold
//! and predicts a label in `{-1, +1}`.
//! Despite its simplicity,
//! the decision stump is the standard weak learner
//! for boosting algorithms such as `AdaBoost`,
//! since boosting only requires a hypothesis
//! slightly better than random guessing.
//!
//! The learner [`DecisionStump`] searches,
//! over every pair of feature and polarity,
//! the threshold that minimizes the weighted misclassification error
//! and returns the best [`StumpClassifier`].

pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod common;
pub mod prelude;

pub(crate) use common::checker;

pub use sample::{
    Sample,
    SampleReader,
    Feature,
};

pub use hypothesis::Classifier;

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    StumpClassifier,
    Sign,
    find_threshold,
};

pub use common::misclassification_error;
