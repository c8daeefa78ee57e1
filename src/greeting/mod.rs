//! Greeting domain: the fixed payload and the helpers that hand it out.
pub mod domain;
pub mod service;

pub use domain::GREETING;
