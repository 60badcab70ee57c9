//! Cross-table validation of strings against classifications.

mod cross;
mod result;

pub use cross::{validate, MISSING_COMBINATION};
pub use result::{KeyFields, ValidationError, ValidationResult};
