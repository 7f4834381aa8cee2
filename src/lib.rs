//! Ingot: Closure-Based Instance Construction
//!
//! A construction protocol for function-shaped factories: a factory body
//! returns a descriptor whose procedure entries close over freshly built
//! private state, and `construct` validates the descriptor's shape, tags the
//! public interface with the factory's identity, and runs the one-time
//! constructor with the caller's arguments.

pub mod construct;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod instance;
pub mod logging;
pub mod state;
pub mod types;
pub mod value;
