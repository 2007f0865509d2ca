//! Building blocks for writing Trellis process tools in Rust.
//!
//! The Trellis orchestrator runs a tool as a standalone process: arguments
//! arrive through environment variables, the result leaves as a single JSON
//! line on stdout, and failures are a stderr diagnostic plus a non-zero exit
//! status. [`args::ArgumentSet`] decodes both argument conventions (the
//! single `TRELLIS_ARGS` payload and the older per-argument `TRELLIS_ARG_*`
//! variables); [`result::ToolResult`] emits the reply.

pub mod args;
pub mod error;
pub mod greet;
pub mod result;

pub use error::{Result, ToolError};
