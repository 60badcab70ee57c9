//! API request handlers.

mod data;
mod export;
mod health;
mod rows;
mod save;
mod upload;
mod validate;

pub use data::*;
pub use export::*;
pub use health::*;
pub use save::*;
pub use upload::*;
pub use validate::*;
