//! Struct `Sample` represents a batch sample.

mod feature_struct;
mod sample_struct;
mod sample_reader;


pub use feature_struct::Feature;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
