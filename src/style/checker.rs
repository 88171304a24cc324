//! Style checker construction and classification.

use regex::Regex;
use std::sync::LazyLock;

use super::acronym;
use super::naming::NamingStyle;
use crate::error::{LintError, Result};

// --- Compiled conventions (one-time via LazyLock) ---

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_SNAKE, r"^[a-z][a-z0-9_]*$");
lazy_regex!(
    RE_CAMEL,
    r"^[a-z][a-z0-9]*(([A-Z][a-z0-9]+)*[A-Z]?|([a-z0-9]+[A-Z])*|[A-Z])$"
);
lazy_regex!(RE_PASCAL, r"^[A-Z](([a-z0-9]+[A-Z]?)*)$");
lazy_regex!(RE_UPPER, r"^[A-Z0-9_]+$");
lazy_regex!(RE_TITLE, r"^[A-Z][a-z0-9]+(?:\s(?:[A-Z][a-z0-9]+|\d+))*$");
lazy_regex!(
    RE_TITLE_ACRONYMS,
    r"^(?:[A-Z]+|[A-Z][a-z0-9]+)(?:\s(?:[A-Z]+|\d+[A-Za-z]*|[A-Z][a-z0-9]+))*$"
);

/// The rule a [`StyleChecker`] applies.
#[derive(Debug, Clone)]
pub enum StyleRule {
    /// One of the named conventions.
    Named {
        style: NamingStyle,
        allow_acronyms: bool,
    },
    /// A user-supplied pattern, matched from the start of the name.
    Custom(Regex),
}

impl StyleRule {
    /// Compile a custom pattern.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Custom)
            .map_err(|e| LintError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }
}

/// Checks names against a single [`StyleRule`].
#[derive(Debug, Clone)]
pub struct StyleChecker {
    rule: StyleRule,
}

impl StyleChecker {
    /// Build a checker from a style selector.
    ///
    /// A canonical convention name selects that convention; any other string
    /// is compiled as a pattern.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the selector is neither a convention name
    /// nor a valid regular expression.
    pub fn new(selector: &str, allow_acronyms: bool) -> Result<Self> {
        match selector.parse::<NamingStyle>() {
            Ok(style) => Ok(Self::named(style, allow_acronyms)),
            Err(_) => Self::pattern(selector),
        }
    }

    /// Build a checker for a named convention.
    pub fn named(style: NamingStyle, allow_acronyms: bool) -> Self {
        Self {
            rule: StyleRule::Named {
                style,
                allow_acronyms,
            },
        }
    }

    /// Build a checker for a custom pattern.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            rule: StyleRule::pattern(pattern)?,
        })
    }

    /// The rule this checker applies.
    pub fn rule(&self) -> &StyleRule {
        &self.rule
    }

    /// Whether `name` follows the rule.
    pub fn is_correct(&self, name: &str) -> bool {
        match &self.rule {
            StyleRule::Named {
                style,
                allow_acronyms,
            } => matches_style(*style, *allow_acronyms, name),
            StyleRule::Custom(regex) => regex.find(name).is_some_and(|m| m.start() == 0),
        }
    }

    /// Phrase used in reports: "be in PascalCase" or "follow pattern '...'".
    pub fn describe(&self) -> String {
        match &self.rule {
            StyleRule::Named { style, .. } => format!("be in {}", style),
            StyleRule::Custom(regex) => format!("follow pattern '{}'", regex.as_str()),
        }
    }
}

fn matches_style(style: NamingStyle, allow_acronyms: bool, name: &str) -> bool {
    match (style, allow_acronyms) {
        (NamingStyle::SnakeCase, _) => RE_SNAKE.is_match(name),
        (NamingStyle::CamelCase, false) => RE_CAMEL.is_match(name),
        (NamingStyle::CamelCase, true) => acronym::is_camel_case(name),
        (NamingStyle::PascalCase, false) => RE_PASCAL.is_match(name),
        (NamingStyle::PascalCase, true) => acronym::is_pascal_case(name),
        (NamingStyle::UpperCase, _) => RE_UPPER.is_match(name),
        (NamingStyle::TitleCase, false) => RE_TITLE.is_match(name),
        (NamingStyle::TitleCase, true) => RE_TITLE_ACRONYMS.is_match(name),
        (NamingStyle::Any, _) => true,
    }
}
