#![deny(missing_docs)]
//! Shared logging utilities for the DocLens workspace.
//!
//! This crate provides the `doclens_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line logged
//! through the macros carries the number of the submission currently being
//! processed on this thread, if any.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the submission currently in flight (0 = none).
    static SUBMISSION: Cell<u64> = const { Cell::new(0) };
}

/// Tags the current thread with the given submission number.
/// Called by the orchestrator right before a request is dispatched.
pub fn set_submission(number: u64) {
    SUBMISSION.with(|v| v.set(number));
}

/// Removes the submission tag from the current thread.
pub fn clear_submission() {
    SUBMISSION.with(|v| v.set(0));
}

/// Retrieves the submission number tagged on the current thread.
/// Returns `None` if no submission is in flight.
pub fn current_submission() -> Option<u64> {
    match SUBMISSION.with(|v| v.get()) {
        0 => None,
        number => Some(number),
    }
}

/// Prefix used by the macros; empty when no submission is tagged.
#[doc(hidden)]
pub fn submission_prefix() -> String {
    current_submission()
        .map(|number| format!("[submit #{number}] "))
        .unwrap_or_default()
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! doclens_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::submission_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! doclens_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::submission_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! doclens_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::submission_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! doclens_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::submission_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! doclens_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::submission_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
