//! Logging abstractions
//!
//! The server speaks MCP over stdout, so every logger in here must stay off it.

mod traits;
mod noop;
mod stderr;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use stderr::{LogLevel, StderrLogger};
