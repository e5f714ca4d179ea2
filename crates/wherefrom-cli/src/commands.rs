//! Command implementations.
//!
//! Exit code contract: 0 = resolved, 1 = resolution miss, 2 = environment
//! failure (no package boundary, unreadable manifest).

pub mod check;
pub mod resolve;
pub mod version;

use wherefrom_core::Error;

/// Exit code for a resolution miss.
pub const EXIT_MISS: u8 = 1;

/// Exit code for an environment/configuration failure.
pub const EXIT_ENV: u8 = 2;

/// Report a fatal environment error on stderr and yield its exit code.
///
/// Misses flow through command output; only the fatal class lands here.
pub fn report_env_error(err: &Error, json: bool) -> u8 {
    if json {
        let payload = serde_json::json!({
            "error": err.to_string(),
            "fatal": true,
        });
        eprintln!("{payload}");
    } else {
        eprintln!("error: {err}");
    }
    EXIT_ENV
}
