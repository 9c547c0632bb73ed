//! Output formatters for tool responses.

pub mod json;
pub mod markdown;

pub use markdown::*;
