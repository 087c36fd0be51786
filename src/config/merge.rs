//! Merge command-line flags with the config file
//!
//! Precedence per field:
//! - `locale`, `enable_rule`, `disable_rule`: config file > CLI > default.
//!   The file wins over the flag for these three keys.
//! - `html_entity`: CLI values first, then each key the config file sets
//!   overwrites the CLI one.
//! - `lint`: CLI only.

use crate::domain::{EntityKind, HtmlEntity, HtmlEntityLayer, PreferenceSet, PrefsLayer};
use crate::engine::Engine;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: required parameter locale.")]
    MissingLocale,
    #[error("Error: locale \"{0}\" is not supported.")]
    UnsupportedLocale(String),
    #[error("Error: mode \"{0}\" is not supported.")]
    UnsupportedEntityType(String),
}

/// Merged preferences that have not been checked against the engine yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UncheckedPrefs {
    pub lint: bool,
    pub locale: Vec<String>,
    pub enabled_rules: Option<Vec<String>>,
    pub disabled_rules: Option<Vec<String>>,
    pub html_entity: HtmlEntityLayer,
}

fn layered(cli: &Option<Vec<String>>, config: Option<&Option<Vec<String>>>) -> Option<Vec<String>> {
    match config {
        Some(Some(value)) => Some(value.clone()),
        _ => cli.clone(),
    }
}

/// Merge the CLI layer and the optional config layer over the defaults.
pub fn resolve_prefs(cli: &PrefsLayer, lint: bool, config: Option<&PrefsLayer>) -> UncheckedPrefs {
    let mut html_entity = cli.html_entity.clone().unwrap_or_default();
    if let Some(overlay) = config.and_then(|c| c.html_entity.as_ref()) {
        if overlay.kind.is_some() {
            html_entity.kind = overlay.kind.clone();
        }
        if overlay.only_invisible.is_some() {
            html_entity.only_invisible = overlay.only_invisible;
        }
    }

    UncheckedPrefs {
        lint,
        locale: layered(&cli.locale, config.map(|c| &c.locale)).unwrap_or_default(),
        enabled_rules: layered(&cli.enable_rule, config.map(|c| &c.enable_rule)),
        disabled_rules: layered(&cli.disable_rule, config.map(|c| &c.disable_rule)),
        html_entity,
    }
}

impl UncheckedPrefs {
    /// Check locales and entity mode against `engine`.
    ///
    /// Stops at the first problem: missing locale, then each locale in order,
    /// then the entity type.
    pub fn validate(self, engine: &dyn Engine) -> Result<PreferenceSet, ValidationError> {
        if self.locale.is_empty() {
            return Err(ValidationError::MissingLocale);
        }
        if let Some(unsupported) = self.locale.iter().find(|l| !engine.has_locale(l)) {
            return Err(ValidationError::UnsupportedLocale(unsupported.clone()));
        }

        let kind_name = self.html_entity.kind.as_deref().unwrap_or("default");
        let kind = EntityKind::parse(kind_name)
            .ok_or_else(|| ValidationError::UnsupportedEntityType(kind_name.to_string()))?;

        Ok(PreferenceSet {
            lint: self.lint,
            locale: self.locale,
            enabled_rules: self.enabled_rules,
            disabled_rules: self.disabled_rules,
            html_entity: HtmlEntity {
                kind,
                only_invisible: self.html_entity.only_invisible.unwrap_or(false),
            },
            filename: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BuiltinEngine;

    fn list(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn cli_layer() -> PrefsLayer {
        PrefsLayer {
            locale: list(&["en-US"]),
            enable_rule: list(&["cli/enabled"]),
            disable_rule: None,
            html_entity: Some(HtmlEntityLayer { kind: Some("digit".into()), only_invisible: Some(true) }),
        }
    }

    #[test]
    fn cli_only() {
        let prefs = resolve_prefs(&cli_layer(), true, None);
        assert!(prefs.lint);
        assert_eq!(prefs.locale, vec!["en-US"]);
        assert_eq!(prefs.enabled_rules, list(&["cli/enabled"]));
        assert_eq!(prefs.disabled_rules, None);
        assert_eq!(prefs.html_entity.kind.as_deref(), Some("digit"));
        assert_eq!(prefs.html_entity.only_invisible, Some(true));
    }

    #[test]
    fn config_overrides_cli_for_lists() {
        let config = PrefsLayer {
            locale: list(&["ru"]),
            enable_rule: list(&["cfg/enabled"]),
            disable_rule: list(&["cfg/disabled"]),
            html_entity: None,
        };
        let prefs = resolve_prefs(&cli_layer(), false, Some(&config));
        assert_eq!(prefs.locale, vec!["ru"]);
        assert_eq!(prefs.enabled_rules, list(&["cfg/enabled"]));
        assert_eq!(prefs.disabled_rules, list(&["cfg/disabled"]));
    }

    #[test]
    fn config_without_key_keeps_cli_value() {
        let config = PrefsLayer { disable_rule: list(&["x"]), ..PrefsLayer::default() };
        let prefs = resolve_prefs(&cli_layer(), false, Some(&config));
        assert_eq!(prefs.locale, vec!["en-US"]);
        assert_eq!(prefs.enabled_rules, list(&["cli/enabled"]));
    }

    #[test]
    fn html_entity_merges_per_key() {
        let config = PrefsLayer {
            html_entity: Some(HtmlEntityLayer { kind: Some("name".into()), only_invisible: None }),
            ..PrefsLayer::default()
        };
        let prefs = resolve_prefs(&cli_layer(), false, Some(&config));
        assert_eq!(prefs.html_entity.kind.as_deref(), Some("name"));
        assert_eq!(prefs.html_entity.only_invisible, Some(true));
    }

    #[test]
    fn defaults_when_nothing_set() {
        let prefs = resolve_prefs(&PrefsLayer::default(), false, None);
        assert_eq!(prefs, UncheckedPrefs::default());
    }

    #[test]
    fn validate_requires_locale() {
        let engine = BuiltinEngine::new();
        let err = UncheckedPrefs::default().validate(&engine).expect_err("missing locale");
        assert_eq!(err, ValidationError::MissingLocale);
        assert_eq!(err.to_string(), "Error: required parameter locale.");
    }

    #[test]
    fn validate_reports_first_unsupported_locale() {
        let engine = BuiltinEngine::new();
        let prefs = UncheckedPrefs {
            locale: vec!["en-US".into(), "xx-YY".into(), "zz".into()],
            ..UncheckedPrefs::default()
        };
        let err = prefs.validate(&engine).expect_err("bad locale");
        assert_eq!(err.to_string(), "Error: locale \"xx-YY\" is not supported.");
    }

    #[test]
    fn validate_rejects_unknown_entity_type() {
        let engine = BuiltinEngine::new();
        let prefs = UncheckedPrefs {
            locale: vec!["ru".into()],
            html_entity: HtmlEntityLayer { kind: Some("hex".into()), only_invisible: None },
            ..UncheckedPrefs::default()
        };
        let err = prefs.validate(&engine).expect_err("bad mode");
        assert_eq!(err.to_string(), "Error: mode \"hex\" is not supported.");
    }

    #[test]
    fn validate_builds_preference_set() {
        let engine = BuiltinEngine::new();
        let set = resolve_prefs(&cli_layer(), false, None).validate(&engine).expect("valid");
        assert_eq!(set.locale, vec!["en-US"]);
        assert_eq!(set.html_entity, HtmlEntity { kind: EntityKind::Digit, only_invisible: true });
        assert_eq!(set.filename, None);
    }
}
