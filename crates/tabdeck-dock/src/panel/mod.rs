//! The dock's tab bar: tab order and which tab is current.

mod operations;
mod types;

pub use types::*;
