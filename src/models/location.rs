use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    OnSite, // O
    Field,  // F
}

impl Location {
    pub fn code(&self) -> &str {
        match self {
            Location::OnSite => "O",
            Location::Field => "F",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Location::OnSite),
            "F" => Some(Location::Field),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        Location::from_db_str(&code.to_uppercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::OnSite => "On-site",
            Location::Field => "Field",
        }
    }
}
