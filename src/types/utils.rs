//! Shared utility functions.

use std::fmt::Display;

/// Convert a Result into an Option, logging the error at debug level.
///
/// Used for best-effort iteration where a single bad item must not abort
/// the whole pass.
pub fn log_filter_error<T, E: Display>(result: Result<T, E>, context: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!("{}: {}", context, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_error_passes_ok() {
        let ok: Result<i32, String> = Ok(3);
        assert_eq!(log_filter_error(ok, "ctx"), Some(3));
    }

    #[test]
    fn test_log_filter_error_drops_err() {
        let err: Result<i32, String> = Err("bad".to_string());
        assert_eq!(log_filter_error(err, "ctx"), None);
    }
}
