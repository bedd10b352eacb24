//! Remote Command Wrappers
//!
//! User actions that go over the wire, organized by domain.

mod task;

pub use task::*;
