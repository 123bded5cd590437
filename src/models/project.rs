use serde::{Deserialize, Serialize};

/// Closed set of customer projects a ticket can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Project {
    Ambev,
    SaquePague,
    Tokio,
    Rumo,
    Outros,
}

impl Project {
    pub const ALL: [Project; 5] = [
        Project::Ambev,
        Project::SaquePague,
        Project::Tokio,
        Project::Rumo,
        Project::Outros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Project::Ambev => "Ambev",
            Project::SaquePague => "Saque e Pague",
            Project::Tokio => "Tokio",
            Project::Rumo => "Rumo",
            Project::Outros => "Outros",
        }
    }

    /// Convert enum → stored cell value
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Strict label → enum, used for CLI input.
    pub fn from_label(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Project::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == needle)
    }

    /// Lenient cell → enum, used when loading the table: unknown labels
    /// collapse into Outros rather than failing the load.
    pub fn from_db_str(s: &str) -> Self {
        Project::from_label(s).unwrap_or(Project::Outros)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::Outros
    }
}
