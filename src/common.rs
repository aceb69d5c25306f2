//! Common utilities: precondition checks and loss functions.

pub(crate) mod checker;
pub mod loss_functions;


pub use loss_functions::{
    misclassification_error,
    zero_one_loss,
};
