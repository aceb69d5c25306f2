use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;


const BUF_SIZE: usize = 256;


/// A named feature column.
/// Every example stores its value for this feature
/// at the same position of `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(super) name: String,
    /// Feature values, one per example.
    pub(super) values: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Convert `polars::Series` into `Feature`.
    pub fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();

        let values = series.f64()
            .expect("The series is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .expect("The series contains a null value");

        Self { name, values, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns an iterator over feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }


    /// Returns a slice over feature values.
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }


    pub(super) fn into_target(self) -> Vec<f64> {
        self.values
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.values.push(x);
    }


    /// Returns the number of items in `self.values`.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if `self.len()` is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl Index<usize> for Feature {
    type Output = f64;


    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
