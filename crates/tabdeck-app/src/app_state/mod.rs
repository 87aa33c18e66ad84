//! Top-level application state.
//!
//! Owns the store, the dock surface and the lifecycle bridge between them,
//! and runs the composition root that keeps the two in step. Console input
//! drives it through [`TabdeckApp::run`].

mod core;
mod dispatch;
mod event_loop;
mod init;
mod input;
mod polling;
mod render;
mod shutdown;
mod sync;
mod types;

pub use core::TabdeckApp;
