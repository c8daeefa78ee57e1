//! Shared utilities used by the greeting domain and the FFI surface.
pub mod config;
pub mod error;
pub mod log;

pub use error::{GreetCode, GreetError, GreetResult};
