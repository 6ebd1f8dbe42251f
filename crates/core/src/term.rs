//! Terminal probing and escape-sequence setup
//!
//! The renderer itself never touches the terminal; these helpers are the
//! only place the process asks questions about it. Width detection feeds
//! the box width resolution, and `ensure_ansi` performs the one-time
//! platform setup needed before colored output is written.

use console::Term;
use std::sync::Once;

static ANSI_SETUP: Once = Once::new();

/// Prepare the terminal for ANSI escape sequences
///
/// On legacy Windows consoles the escape-sequence machinery must be
/// switched on before styled text is written; on every other platform this
/// is a no-op. Safe to call any number of times; only the first call does
/// work.
pub fn ensure_ansi() {
    ANSI_SETUP.call_once(|| {
        // Probing terminal features routes through the console crate's
        // platform setup, which enables virtual terminal processing on
        // Windows consoles that support it.
        let term = Term::stdout();
        let _ = term.features().colors_supported();
    });
}

/// Column count of the terminal attached to stdout
///
/// Returns `None` when stdout is not a terminal (pipes, CI, tests), in
/// which case callers fall back to a fixed default width.
pub fn detect_columns() -> Option<usize> {
    Term::stdout()
        .size_checked()
        .map(|(_rows, columns)| columns as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_ansi_idempotent() {
        // Multiple calls must not panic or re-run setup.
        ensure_ansi();
        ensure_ansi();
        assert!(ANSI_SETUP.is_completed());
    }

    #[test]
    fn test_detect_columns_without_terminal() {
        // Under `cargo test` stdout is captured, so detection either fails
        // (None) or reports a positive width when a real terminal leaks
        // through. Both are acceptable; zero columns is not.
        if let Some(columns) = detect_columns() {
            assert!(columns > 0);
        }
    }
}
