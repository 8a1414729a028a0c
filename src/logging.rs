//! Diagnostic channel.
//!
//! Lines go to `console.*` in the browser (stderr on native targets) and the
//! most recent ones are kept in a bounded ring that the log drawer renders.
//! Debug and warning lines are dropped while verbose logging is switched off
//! from the settings form; errors are always recorded.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Maximum number of lines kept for the log drawer.
pub const MAX_LOG_LINES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

thread_local! {
    static RECENT: RefCell<VecDeque<LogLine>> = RefCell::new(VecDeque::new());
    static VERBOSE: Cell<bool> = Cell::new(true);
}

pub fn set_verbose(enabled: bool) {
    VERBOSE.with(|v| v.set(enabled));
}

pub fn is_verbose() -> bool {
    VERBOSE.with(|v| v.get())
}

pub fn emit(level: Level, text: String) {
    if level != Level::Error && !is_verbose() {
        return;
    }

    write_console(level, &text);

    RECENT.with(|recent| {
        let mut recent = recent.borrow_mut();
        if recent.len() == MAX_LOG_LINES {
            recent.pop_front();
        }
        recent.push_back(LogLine { level, text });
    });
}

/// Snapshot of the recorded lines, oldest first.
pub fn recent() -> Vec<LogLine> {
    RECENT.with(|recent| recent.borrow().iter().cloned().collect())
}

pub fn clear() {
    RECENT.with(|recent| recent.borrow_mut().clear());
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, text: &str) {
    let value = wasm_bindgen::JsValue::from_str(text);
    match level {
        Level::Debug => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, text: &str) {
    eprintln!("[{}] {}", level.as_str(), text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_keeps_only_the_newest_lines() {
        clear();
        for i in 0..(MAX_LOG_LINES + 10) {
            emit(Level::Debug, format!("line {}", i));
        }

        let lines = recent();
        assert_eq!(lines.len(), MAX_LOG_LINES);
        assert_eq!(lines[0].text, "line 10");
        assert_eq!(
            lines.last().map(|l| l.text.clone()),
            Some(format!("line {}", MAX_LOG_LINES + 9))
        );
    }

    #[test]
    fn quiet_mode_still_records_errors() {
        clear();
        set_verbose(false);
        crate::debug_log!("hidden {}", 1);
        crate::warn_log!("hidden too");
        crate::error_log!("kept {}", 2);
        set_verbose(true);

        let lines = recent();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
        assert_eq!(lines[0].text, "kept 2");
    }
}
