//! Public entry points for the foreign function interface.
//!
//! TODO: Provide a smoke-test Java class under a demos/ tree for manual
//!       verification against a real JVM.

pub mod ffi;
