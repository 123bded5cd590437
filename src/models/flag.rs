use serde::{Deserialize, Serialize};

/// YES/NO cell used by the "complementary ticket opened?" column and the
/// computed breach column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplFlag {
    Yes,
    No,
}

impl ComplFlag {
    /// Convert enum → stored cell value
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ComplFlag::Yes => "YES",
            ComplFlag::No => "NO",
        }
    }

    /// Convert stored cell value → enum.
    /// Accepts the legacy Portuguese spellings still present in old sheets.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "YES" | "SIM" => Some(ComplFlag::Yes),
            "NO" | "NAO" | "NÃO" => Some(ComplFlag::No),
            _ => None,
        }
    }

    /// Helper: parse CLI input (case-insensitive, Y/N shortcuts allowed).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "Y" => Some(ComplFlag::Yes),
            "N" => Some(ComplFlag::No),
            other => ComplFlag::from_db_str(other),
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, ComplFlag::Yes)
    }
}

impl Default for ComplFlag {
    fn default() -> Self {
        ComplFlag::No
    }
}
