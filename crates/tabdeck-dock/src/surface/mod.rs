//! The dock surface: owns live tabs and their containers, attaches once
//! to a host, and turns clicks into tab lifecycle transitions.

mod attach;
mod interaction;
mod types;

pub use types::*;
