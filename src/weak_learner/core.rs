//! Provides the `WeakLearner` trait.
use crate::Sample;


/// A trait that defines the behavior of weak learners.
/// Given a training sample and a distribution over its examples,
/// a weak learner produces a hypothesis
/// whose weighted error is slightly better than random guessing.
pub trait WeakLearner {
    /// The type of the hypothesis this learner produces.
    type Hypothesis;


    /// Name of this weak learner.
    fn name(&self) -> &str;


    /// A table of parameters of this weak learner.
    /// Weak learners with no parameter may keep the default `None`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produces a hypothesis for the given `sample`
    /// and distribution `dist` over the examples in it.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
