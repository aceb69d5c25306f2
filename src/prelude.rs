//! Exports the main structs and traits of this crate.
//!
pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,


    // The decision stump learner and its hypothesis
    DecisionStump,
    StumpClassifier,
    Sign,
};


pub use crate::hypothesis::Classifier;


pub use crate::sample::{
    Sample,
    SampleReader,
    Feature,
};


pub use crate::common::misclassification_error;
