//! Log callback plumbing.
//!
//! The library performs no I/O, so diagnostics flow through an optional
//! host-installed callback instead of a logging backend. The render engine
//! reports cycle aborts at [`LogLevel::Error`] and per-call summaries at
//! [`LogLevel::Debug`]; with no callback installed, logging is a no-op.

use std::sync::{Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_log_callback() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        // The callback is process-global and other tests may log through it
        // concurrently, so only count the message this test emits.
        set_log_callback(move |level, msg| {
            if level == LogLevel::Info && msg == "hello from event test" {
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "hello from event test");
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
