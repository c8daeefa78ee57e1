// lib.rs - native greeting library loaded via System.loadLibrary("hello_native")
pub mod common;
pub mod greeting;
pub mod api;
