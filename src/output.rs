//! Output abstraction for quiet mode support.
//!
//! Confirmation sentences ("Login successful.", "A/B test started.") go
//! through [`Output`] and disappear under `--quiet`. Requested data
//! (records, ids, file paths) is printed directly and never suppressed.

/// Output handler that respects quiet mode.
///
/// Quiet mode is enabled if either `--quiet` is passed or `--json-errors` is used.
#[derive(Debug, Clone)]
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create new Output handler.
    #[must_use]
    pub const fn new(quiet: bool, json_errors: bool) -> Self {
        Self {
            quiet: quiet || json_errors,
        }
    }

    /// Print success message (suppressed in quiet mode).
    pub fn success(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_from_quiet_flag() {
        let output = Output::new(true, false);
        assert!(output.quiet);
    }

    #[test]
    fn test_quiet_mode_from_json_errors() {
        let output = Output::new(false, true);
        assert!(output.quiet);
    }

    #[test]
    fn test_not_quiet_when_no_flags() {
        let output = Output::new(false, false);
        assert!(!output.quiet);
    }
}
