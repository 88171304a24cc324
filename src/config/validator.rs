//! Configuration validation.
//!
//! Resolves each region's selector into a [`StyleChecker`]:
//! - Exactly one of the named style and the pattern must be given
//! - Title Case is not accepted for parameter keys
//! - Patterns must compile

use crate::config::schema::LintConfig;
use crate::error::{LintError, Result};
use crate::style::{NamingStyle, StyleChecker};

/// The checkers for both regions of a view.
#[derive(Debug, Clone)]
pub struct ResolvedStyles {
    pub component: StyleChecker,
    pub parameter: StyleChecker,
}

/// Validate the style selectors of `config`.
///
/// Selector conflicts are reported before missing selectors, components
/// before parameters.
pub fn resolve_styles(config: &LintConfig) -> Result<ResolvedStyles> {
    let component = Selector::new(
        "component",
        "Component",
        &config.component_style,
        &config.component_style_rgx,
    );
    let parameter = Selector::new(
        "parameter",
        "Parameter",
        &config.parameter_style,
        &config.parameter_style_rgx,
    );

    component.check_conflict()?;
    parameter.check_conflict()?;
    component.check_present()?;
    parameter.check_present()?;

    if parameter.style == Some(NamingStyle::TitleCase.as_str()) {
        return Err(LintError::DisallowedStyle {
            region: parameter.region,
            style: NamingStyle::TitleCase.to_string(),
        });
    }

    let resolved = ResolvedStyles {
        component: component.build(config.allow_acronyms)?,
        parameter: parameter.build(config.allow_acronyms)?,
    };
    tracing::debug!(
        "Components should {}, parameters should {}",
        resolved.component.describe(),
        resolved.parameter.describe()
    );
    Ok(resolved)
}

/// Validate `config` without keeping the checkers.
pub fn validate(config: &LintConfig) -> Result<()> {
    resolve_styles(config).map(|_| ())
}

struct Selector<'a> {
    region: &'static str,
    label: &'static str,
    style: Option<&'a str>,
    pattern: Option<&'a str>,
}

impl<'a> Selector<'a> {
    fn new(
        region: &'static str,
        label: &'static str,
        style: &'a Option<String>,
        pattern: &'a Option<String>,
    ) -> Self {
        // Empty strings count as "not given".
        Self {
            region,
            label,
            style: style.as_deref().filter(|s| !s.is_empty()),
            pattern: pattern.as_deref().filter(|s| !s.is_empty()),
        }
    }

    fn check_conflict(&self) -> Result<()> {
        match (self.style, self.pattern) {
            (Some(style), Some(pattern)) => Err(LintError::ConflictingStyles {
                region: self.region,
                style: style.to_string(),
                pattern: pattern.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn check_present(&self) -> Result<()> {
        if self.style.is_none() && self.pattern.is_none() {
            return Err(LintError::MissingStyle {
                region: self.region,
                label: self.label,
            });
        }
        Ok(())
    }

    fn build(&self, allow_acronyms: bool) -> Result<StyleChecker> {
        match (self.style, self.pattern) {
            (_, Some(pattern)) => StyleChecker::pattern(pattern),
            (Some(style), None) => StyleChecker::new(style, allow_acronyms),
            (None, None) => Err(LintError::MissingStyle {
                region: self.region,
                label: self.label,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleRule;

    fn is_named(checker: &StyleChecker) -> bool {
        matches!(checker.rule(), StyleRule::Named { .. })
    }

    fn config(component: Option<&str>, parameter: Option<&str>) -> LintConfig {
        LintConfig {
            component_style: component.map(str::to_string),
            parameter_style: parameter.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_named_styles() {
        let styles = resolve_styles(&config(Some("PascalCase"), Some("camelCase"))).unwrap();
        assert!(is_named(&styles.component));
        assert!(styles.component.is_correct("MyButton"));
        assert!(styles.parameter.is_correct("myParam"));
    }

    #[test]
    fn resolves_patterns() {
        let mut cfg = config(None, Some("camelCase"));
        cfg.component_style_rgx = Some("^[A-Z][a-zA-Z]*$".to_string());
        let styles = resolve_styles(&cfg).unwrap();
        assert!(!is_named(&styles.component));
        assert!(styles.component.is_correct("MyButton"));
        assert!(!styles.component.is_correct("my_button"));
    }

    #[test]
    fn unknown_style_name_is_a_pattern() {
        let styles = resolve_styles(&config(Some("^btn"), Some("camelCase"))).unwrap();
        assert!(!is_named(&styles.component));
        assert!(styles.component.is_correct("btnSave"));
    }

    #[test]
    fn conflicting_selectors_are_rejected() {
        let mut cfg = config(Some("PascalCase"), Some("camelCase"));
        cfg.component_style_rgx = Some("^[A-Z]".to_string());
        let err = resolve_styles(&cfg).unwrap_err();
        assert!(matches!(
            err,
            LintError::ConflictingStyles {
                region: "component",
                ..
            }
        ));
        assert!(err.to_string().contains("Cannot specify both"));
    }

    #[test]
    fn missing_selector_is_rejected() {
        let err = resolve_styles(&config(Some("PascalCase"), None)).unwrap_err();
        assert!(matches!(
            err,
            LintError::MissingStyle {
                region: "parameter",
                ..
            }
        ));
        assert!(err
            .to_string()
            .starts_with("Parameter naming style not specified"));
    }

    #[test]
    fn empty_selector_counts_as_missing() {
        let err = resolve_styles(&config(Some(""), Some("camelCase"))).unwrap_err();
        assert!(matches!(err, LintError::MissingStyle { .. }));
    }

    #[test]
    fn conflicts_are_reported_before_missing() {
        let mut cfg = config(None, Some("camelCase"));
        cfg.parameter_style_rgx = Some("^p".to_string());
        let err = resolve_styles(&cfg).unwrap_err();
        assert!(matches!(err, LintError::ConflictingStyles { .. }));
    }

    #[test]
    fn title_case_is_not_a_parameter_style() {
        let err = resolve_styles(&config(Some("Title Case"), Some("Title Case"))).unwrap_err();
        assert!(matches!(
            err,
            LintError::DisallowedStyle {
                region: "parameter",
                ..
            }
        ));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let mut cfg = config(Some("PascalCase"), None);
        cfg.parameter_style_rgx = Some("([a-z".to_string());
        let err = validate(&cfg).unwrap_err();
        assert!(matches!(err, LintError::InvalidPattern { .. }));
    }
}
