use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level selecting which catalog seeds the daily task tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Parse a level identifier. Unknown identifiers fall back to the
    /// least demanding level.
    pub fn parse(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "beginner" => Self::Beginner,
            other => {
                tracing::debug!(level = other, "unknown level, using beginner");
                Self::Beginner
            }
        }
    }

    /// Identifier used in persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Get all levels as a list
    pub fn all() -> &'static [Level] {
        &[Level::Beginner, Level::Intermediate, Level::Advanced]
    }
}

impl From<String> for Level {
    fn from(id: String) -> Self {
        Self::parse(&id)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
