//! Small crate-wide logging macros.
//!
//! All of them format like `format!` and forward to [`crate::logging::emit`],
//! which writes to the browser console and keeps a short in-memory tail for
//! the log drawer.
//!
//! ```rust,ignore
//! debug_log!("Probing {}", url);
//! warn_log!("localStorage unavailable, using in-memory settings");
//! error_log!("Failed to parse saved Ollama config: {}", err);
//! ```

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Debug, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Warn, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Error, format!($($arg)*))
    };
}
