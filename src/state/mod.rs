//! Application state module

mod field;
mod form;
mod signup;
mod submission;

pub use field::*;
pub use form::*;
pub use signup::*;
pub use submission::*;
