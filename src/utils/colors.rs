/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Bank / delta color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_minutes(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Returns GREY for empty placeholder values ("" or "--:--"),
/// RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--:--" => RESET,
        _ => GREY,
    }
}

/// Day-kind color used by `status` and `list`.
pub fn color_for_day_label(holiday: bool, bridge: bool) -> &'static str {
    if holiday {
        MAGENTA
    } else if bridge {
        CYAN
    } else {
        RESET
    }
}
