use serde::Serialize;

/// The four daily punch kinds, in canonical order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    ClockIn,
    LunchOut,
    LunchIn,
    ClockOut,
}

/// Canonical punch order for a working day. `append` walks this sequence;
/// index 4 means the day is complete.
pub const PUNCH_SEQUENCE: [PunchKind; 4] = [
    PunchKind::ClockIn,
    PunchKind::LunchOut,
    PunchKind::LunchIn,
    PunchKind::ClockOut,
];

impl PunchKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "clock_in",
            PunchKind::LunchOut => "lunch_out",
            PunchKind::LunchIn => "lunch_in",
            PunchKind::ClockOut => "clock_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(PunchKind::ClockIn),
            "lunch_out" => Some(PunchKind::LunchOut),
            "lunch_in" => Some(PunchKind::LunchIn),
            "clock_out" => Some(PunchKind::ClockOut),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (several accepted spellings).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "in" | "clock-in" | "clock_in" => Some(PunchKind::ClockIn),
            "lunch-out" | "lunch_out" => Some(PunchKind::LunchOut),
            "lunch-in" | "lunch_in" => Some(PunchKind::LunchIn),
            "out" | "clock-out" | "clock_out" => Some(PunchKind::ClockOut),
            _ => None,
        }
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "Clock-in",
            PunchKind::LunchOut => "Lunch-out",
            PunchKind::LunchIn => "Lunch-in",
            PunchKind::ClockOut => "Clock-out",
        }
    }

    pub fn is_clock_in(&self) -> bool {
        matches!(self, PunchKind::ClockIn)
    }

    pub fn is_clock_out(&self) -> bool {
        matches!(self, PunchKind::ClockOut)
    }
}
