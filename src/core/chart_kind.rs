use serde::{Deserialize, Serialize};

/// Geometric rendering mode applied uniformly to every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Bar, Self::Line, Self::Pie];

    /// Label shown on the segmented control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
        }
    }

    /// Parses a case-insensitive label such as `"pie"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}
