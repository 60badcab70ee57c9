//! CLI command implementations.

pub mod inspect;
pub mod normalize;
pub mod serve;
pub mod validate;
