//! Error handling primitives shared across the library.
//!
//! The JNI methods themselves have no error channel (void or a nullable
//! `jstring`), so failures surface as a null handle plus a log line carrying
//! one of these codes.

/// Stable error codes emitted in log lines at the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GreetCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// The host string-construction facility failed.
    StringAlloc = 1,
    /// Writing the greeting to standard output failed.
    Io = 2,
    /// Catch-all for bugs.
    Internal = 3,
}

/// Canonical error type for the library.
#[derive(Copy, Clone, Debug)]
pub struct GreetError {
    /// Machine parsable error code.
    pub code: GreetCode,
    /// Developer facing message (keep &'static str for FFI safety).
    pub msg: &'static str,
}

/// Result alias used throughout the crate.
pub type GreetResult<T> = Result<T, GreetError>;

impl GreetError {
    /// Create a new error with the provided code and message.
    pub const fn new(code: GreetCode, msg: &'static str) -> Self {
        Self { code, msg }
    }

    /// Host string construction failed.
    pub const fn string_alloc(msg: &'static str) -> Self {
        Self::new(GreetCode::StringAlloc, msg)
    }

    /// IO error helper.
    pub const fn io() -> Self {
        Self::new(GreetCode::Io, "io")
    }

    /// Internal error helper.
    pub const fn internal(msg: &'static str) -> Self {
        Self::new(GreetCode::Internal, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(GreetCode::Ok as u32, 0);
        assert_eq!(GreetCode::StringAlloc as u32, 1);
        assert_eq!(GreetCode::Io as u32, 2);
        assert_eq!(GreetCode::Internal as u32, 3);
    }

    #[test]
    fn helpers_carry_their_code() {
        assert_eq!(
            GreetError::string_alloc("new_string").code,
            GreetCode::StringAlloc
        );
        assert_eq!(GreetError::io().code, GreetCode::Io);
        assert_eq!(GreetError::internal("bug").code, GreetCode::Internal);
    }
}
