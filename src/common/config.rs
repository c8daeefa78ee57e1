//! Runtime configuration loaded from the process environment.
//!
//! The host JVM owns the process, so the environment is the only
//! configuration surface this library has.

use std::env;

/// Snapshot of configuration values consumed by the library.
#[derive(Clone, Debug)]
pub struct AppCfg {
    /// 0 = silent, 1 = warnings, 2 = per-call debug events.
    pub log_level: u8,
}

impl AppCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> Self {
        let raw = env::var("HELLO_NATIVE_LOG_LEVEL").unwrap_or_default();
        Self {
            log_level: parse_level(&raw),
        }
    }
}

fn parse_level(raw: &str) -> u8 {
    raw.parse().unwrap_or(1)
}

/// Convenience wrapper used at the FFI call sites.
pub fn load_cfg() -> AppCfg {
    AppCfg::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_garbage_level_falls_back_to_warnings() {
        assert_eq!(parse_level(""), 1);
        assert_eq!(parse_level("verbose"), 1);
        assert_eq!(parse_level("-1"), 1);
    }

    #[test]
    fn explicit_levels_parse() {
        assert_eq!(parse_level("0"), 0);
        assert_eq!(parse_level("2"), 2);
    }
}
