//! The engine shipped with the binary

use super::entity;
use super::rules::{Rule, DEFAULT_RULES};
use super::{Diagnostic, Engine};
use crate::domain::{HtmlEntity, PreferenceSet};
use globset::{GlobBuilder, GlobMatcher};

const LOCALES: &[&str] = &[
    "be", "bg", "ca", "cs", "da", "de", "el", "en-GB", "en-US", "eo", "es", "et", "fi", "fr", "ga",
    "hu", "it", "lv", "nl", "no", "pl", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk",
];

pub struct BuiltinEngine {
    rules: Vec<Rule>,
}

impl Default for BuiltinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinEngine {
    pub fn new() -> Self {
        Self { rules: DEFAULT_RULES.clone() }
    }

    /// Rules that apply under `prefs`, in execution order.
    ///
    /// An explicit enable beats an explicit disable, which beats the rule's
    /// default.
    fn active_rules(&self, prefs: &PreferenceSet) -> Vec<&Rule> {
        let enabled = compile_patterns(prefs.enabled_rules.as_deref());
        let disabled = compile_patterns(prefs.disabled_rules.as_deref());

        for (pattern, matcher) in enabled.iter().chain(disabled.iter()) {
            if !self.rules.iter().any(|rule| matcher.is_match(rule.name)) {
                tracing::warn!("Rule pattern '{}' does not match any rule", pattern);
            }
        }

        self.rules
            .iter()
            .filter(|rule| {
                if enabled.iter().any(|(_, m)| m.is_match(rule.name)) {
                    true
                } else if disabled.iter().any(|(_, m)| m.is_match(rule.name)) {
                    false
                } else {
                    rule.enabled_by_default
                }
            })
            .collect()
    }
}

fn compile_patterns(patterns: Option<&[String]>) -> Vec<(&str, GlobMatcher)> {
    patterns
        .unwrap_or_default()
        .iter()
        .filter_map(|pattern| {
            match GlobBuilder::new(pattern).literal_separator(false).build() {
                Ok(glob) => Some((pattern.as_str(), glob.compile_matcher())),
                Err(err) => {
                    tracing::warn!("Ignoring invalid rule pattern '{}': {}", pattern, err);
                    None
                }
            }
        })
        .collect()
}

/// Name reported for spans the entity renderer rewrites.
const ENTITY_RULE: &str = "html/entity";

/// Turns increasing byte offsets into 1-based line and character columns in a
/// single pass over the text.
struct Cursor<'a> {
    text: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, offset: 0, line: 1, column: 1 }
    }

    fn advance_to(&mut self, at: usize) -> (usize, usize) {
        if at > self.offset {
            for ch in self.text[self.offset..at].chars() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = at;
        }
        (self.line, self.column)
    }
}

/// Strip the leading and trailing characters a replacement leaves as they
/// were. Returns the byte length of the kept prefix with the narrowed pair.
fn changed_part<'a>(found: &'a str, suggestion: &'a str) -> (usize, &'a str, &'a str) {
    let prefix: usize = found
        .chars()
        .zip(suggestion.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();
    let (found, suggestion) = (&found[prefix..], &suggestion[prefix..]);
    let suffix: usize = found
        .chars()
        .rev()
        .zip(suggestion.chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();
    (prefix, &found[..found.len() - suffix], &suggestion[..suggestion.len() - suffix])
}

impl Engine for BuiltinEngine {
    fn has_locale(&self, locale: &str) -> bool {
        LOCALES.iter().any(|known| *known == locale)
    }

    fn locales(&self) -> Vec<String> {
        LOCALES.iter().map(|l| l.to_string()).collect()
    }

    fn execute(&self, text: &str, prefs: &PreferenceSet) -> String {
        let rules = self.active_rules(prefs);
        tracing::debug!("Applying {} rules for locale {:?}", rules.len(), prefs.locale);

        let mut out = entity::decode(text).into_owned();
        for rule in rules {
            let replaced = rule.pattern.replace_all(&out, rule.replacement);
            if let std::borrow::Cow::Owned(changed) = replaced {
                tracing::debug!("Rule {} changed the text", rule.name);
                out = changed;
            }
        }

        entity::render(&out, prefs.html_entity.kind, prefs.html_entity.only_invisible)
    }

    /// Walks the same steps as [`Engine::execute`]. Entity diagnostics point
    /// into the input. Rule diagnostics point into the text as that rule sees
    /// it, after entity decoding and the earlier rules.
    fn lint(&self, text: &str, prefs: &PreferenceSet) -> Vec<Diagnostic> {
        let HtmlEntity { kind, only_invisible } = prefs.html_entity;
        let mut diagnostics = Vec::new();

        let mut cursor = Cursor::new(text);
        for change in entity::changes(text, kind, only_invisible) {
            let (line, column) = cursor.advance_to(change.start);
            diagnostics.push(Diagnostic {
                rule: ENTITY_RULE.to_string(),
                line,
                column,
                found: change.found,
                suggestion: change.replacement,
            });
        }

        let mut current = entity::decode(text).into_owned();
        for rule in self.active_rules(prefs) {
            let mut cursor = Cursor::new(&current);
            for caps in rule.pattern.captures_iter(&current) {
                let Some(whole) = caps.get(0) else { continue };
                let mut expanded = String::new();
                caps.expand(rule.replacement, &mut expanded);
                let (skip, found, suggestion) = changed_part(whole.as_str(), &expanded);
                if found.is_empty() && suggestion.is_empty() {
                    continue;
                }
                let (line, column) = cursor.advance_to(whole.start() + skip);
                diagnostics.push(Diagnostic {
                    rule: rule.name.to_string(),
                    line,
                    column,
                    found: found.to_string(),
                    suggestion: entity::render(suggestion, kind, only_invisible),
                });
            }

            let replaced = rule.pattern.replace_all(&current, rule.replacement);
            if let std::borrow::Cow::Owned(changed) = replaced {
                current = changed;
            }
        }

        diagnostics.sort_by_key(|d| (d.line, d.column));
        diagnostics
    }
}
