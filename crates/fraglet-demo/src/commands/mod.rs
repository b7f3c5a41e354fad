//! Command handlers.
//!
//! Each submodule exposes a single `execute` function; `main.rs` dispatches
//! to it with the parsed arguments, the loaded config, and the output
//! manager.

pub mod render;
pub mod serve;
