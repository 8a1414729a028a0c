//! Formatting helpers shared by the panel components.

use chrono::{DateTime, Local};

/// Human-readable model size such as `"2.0 GB"` or `"274 MB"`.
///
/// Ollama reports sizes in bytes; decimal units match what `ollama list` prints.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1_000.0;
    const MB: f64 = KB * 1_000.0;
    const GB: f64 = MB * 1_000.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.0} MB", b / MB)
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Wall-clock time of a probe for the status line.
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// `"name (size)"` when the size is known.
pub fn model_label(name: &str, size: Option<u64>) -> String {
    match size {
        Some(bytes) if bytes > 0 => format!("{} ({})", name, format_size(bytes)),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sizes_use_decimal_units() {
        assert_eq!(format_size(2_019_393_189), "2.0 GB");
        assert_eq!(format_size(274_302_450), "274 MB");
        assert_eq!(format_size(512), "512 B");
    }

    #[test]
    fn labels_skip_unknown_sizes() {
        assert_eq!(model_label("gemma", None), "gemma");
        assert_eq!(model_label("gemma", Some(0)), "gemma");
        assert_eq!(model_label("gemma", Some(5_000_000_000)), "gemma (5.0 GB)");
    }

    #[test]
    fn clock_is_hours_minutes_seconds() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 4, 7).unwrap();
        assert_eq!(format_clock(&at), "09:04:07");
    }
}
