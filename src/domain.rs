//! Preference types shared by the config layer, the router and the engine.

use crate::utils::split_list;
use serde::{Deserialize, Deserializer};

/// How typographic characters are written in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    /// `&#160;`
    Digit,
    /// `&nbsp;`, falling back to digits for characters without a name.
    Name,
    /// Plain UTF-8.
    #[default]
    Default,
}

impl EntityKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "digit" => Some(Self::Digit),
            "name" => Some(Self::Name),
            "default" => Some(Self::Default),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlEntity {
    pub kind: EntityKind,
    pub only_invisible: bool,
}

/// Fully resolved and validated preferences. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSet {
    pub lint: bool,
    pub locale: Vec<String>,
    pub enabled_rules: Option<Vec<String>>,
    pub disabled_rules: Option<Vec<String>>,
    pub html_entity: HtmlEntity,
    /// Logical name of the input, used in lint output.
    pub filename: Option<String>,
}

impl PreferenceSet {
    pub fn for_locale(locale: &str) -> Self {
        Self {
            lint: false,
            locale: vec![locale.to_string()],
            enabled_rules: None,
            disabled_rules: None,
            html_entity: HtmlEntity::default(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: Option<String>) -> Self {
        self.filename = filename;
        self
    }
}

/// `htmlEntity` as it appears in one precedence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HtmlEntityKeys")]
pub struct HtmlEntityLayer {
    pub kind: Option<String>,
    pub only_invisible: Option<bool>,
}

/// Raw `htmlEntity` keys. Older configs spell `onlyInvisible` as
/// `onlyVisible`; when both are present `onlyInvisible` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HtmlEntityKeys {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    only_invisible: Option<bool>,
    #[serde(default)]
    only_visible: Option<bool>,
}

impl From<HtmlEntityKeys> for HtmlEntityLayer {
    fn from(keys: HtmlEntityKeys) -> Self {
        Self { kind: keys.kind, only_invisible: keys.only_invisible.or(keys.only_visible) }
    }
}

/// One precedence layer (config file or command line). Unset fields defer to
/// the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefsLayer {
    #[serde(default, deserialize_with = "list_or_string")]
    pub locale: Option<Vec<String>>,
    #[serde(default, deserialize_with = "list_or_string")]
    pub enable_rule: Option<Vec<String>>,
    #[serde(default, deserialize_with = "list_or_string")]
    pub disable_rule: Option<Vec<String>>,
    #[serde(default)]
    pub html_entity: Option<HtmlEntityLayer>,
}

/// Accept `["a", "b"]` as well as `"a, b"`.
fn list_or_string<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrString {
        List(Vec<String>),
        Joined(String),
    }

    Ok(Option::<ListOrString>::deserialize(deserializer)?.map(|value| match value {
        ListOrString::List(items) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        ListOrString::Joined(joined) => split_list(&joined),
    }))
}
