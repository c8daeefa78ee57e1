//! The fixed greeting payload and its invariants.
//!
//! The text is dictated by the host-side method contracts; changing it is an
//! observable interface break, which is why the invariants are pinned by
//! tests rather than left implicit.

/// The payload every exported method prints or returns.
///
/// Pure ASCII, so the UTF-8 bytes are also valid JNI modified UTF-8 and the
/// JVM copy is byte-for-byte identical.
pub const GREETING: &str = "Hello, World from C++!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_the_pinned_literal() {
        assert_eq!(GREETING, "Hello, World from C++!");
        assert_eq!(GREETING.len(), 22);
    }

    #[test]
    fn greeting_has_no_surrounding_whitespace_or_line_breaks() {
        assert_eq!(GREETING.trim(), GREETING);
        assert!(!GREETING.contains('\n'));
        assert!(!GREETING.contains('\r'));
    }

    #[test]
    fn greeting_is_plain_ascii() {
        assert!(GREETING.is_ascii());
    }
}
