//! Named casing conventions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingStyle {
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "UPPER_CASE")]
    UpperCase,
    #[serde(rename = "Title Case")]
    TitleCase,
    #[serde(rename = "any")]
    Any,
}

impl NamingStyle {
    /// All conventions, in the order they are documented.
    pub const ALL: [NamingStyle; 6] = [
        NamingStyle::SnakeCase,
        NamingStyle::CamelCase,
        NamingStyle::PascalCase,
        NamingStyle::UpperCase,
        NamingStyle::TitleCase,
        NamingStyle::Any,
    ];

    /// The canonical name used in configuration and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SnakeCase => "snake_case",
            Self::CamelCase => "camelCase",
            Self::PascalCase => "PascalCase",
            Self::UpperCase => "UPPER_CASE",
            Self::TitleCase => "Title Case",
            Self::Any => "any",
        }
    }
}

impl FromStr for NamingStyle {
    type Err = String;

    /// Parse a canonical style name. Matching is exact: `pascalcase` is not
    /// a style name and will be treated as a pattern by [`StyleChecker`].
    ///
    /// [`StyleChecker`]: super::StyleChecker
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown naming style: {}", s))
    }
}

impl std::fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
