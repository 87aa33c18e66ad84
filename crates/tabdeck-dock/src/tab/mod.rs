//! Tabs and their per-tab lifecycle state machine.

mod transitions;
mod types;

pub use types::*;
