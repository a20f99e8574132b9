use std::time::Duration;

use compact_str::CompactString;

use crate::format::DEFAULT_PRECISION;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(140);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fractional digits used for fixed-point results.
    pub precision: usize,
    /// Quiet period before a live evaluation runs.
    pub debounce: Duration,
    /// Shown while the buffer has no value to preview.
    pub no_value: CompactString,
    /// Shown when finalizing fails.
    pub error: CompactString,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            debounce: DEFAULT_DEBOUNCE,
            no_value: "—".into(),
            error: "Error".into(),
        }
    }
}
