//! Lightweight logging utilities emitting JSON lines.
//!
//! Lines go to stderr: stdout belongs to the print stub's contract and must
//! carry nothing but the greeting.
//!
//! TODO: Add sampling if the host ever calls these methods in tight loops.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::config::AppCfg;
use crate::common::error::GreetCode;

/// Minimum levels, ordered so a numeric config knob can gate them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Level {
    Warn,
    Debug,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Warn => "warn",
            Level::Debug => "debug",
        }
    }

    /// Smallest `log_level` config value at which this level is emitted.
    fn threshold(self) -> u8 {
        match self {
            Level::Warn => 1,
            Level::Debug => 2,
        }
    }
}

/// Emit a JSON line matching the documented schema, subject to the
/// configured level.
pub fn log_json(cfg: &AppCfg, level: Level, module: &str, event: &str, code: GreetCode) {
    if cfg.log_level < level.threshold() {
        return;
    }
    let ts = now_ms();
    let level = level.as_str();
    let code = code as u32;
    eprintln!("{{\"ts\":{ts},\"level\":\"{level}\",\"mod\":\"{module}\",\"ev\":\"{event}\",\"code\":{code}}}");
}

/// Current timestamp in milliseconds since the Unix epoch.
fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_passes_default_level_and_debug_does_not() {
        let cfg = AppCfg {
            log_level: 1,
        };
        assert!(cfg.log_level >= Level::Warn.threshold());
        assert!(cfg.log_level < Level::Debug.threshold());
    }

    #[test]
    fn level_zero_silences_everything() {
        let cfg = AppCfg {
            log_level: 0,
        };
        assert!(cfg.log_level < Level::Warn.threshold());
    }
}
