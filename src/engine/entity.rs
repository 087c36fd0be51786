//! HTML entity decoding and rendering

use crate::domain::EntityKind;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

struct Entity {
    ch: char,
    /// Named reference without `&`/`;`, if HTML has one.
    name: Option<&'static str>,
    invisible: bool,
}

const fn entity(ch: char, name: &'static str, invisible: bool) -> Entity {
    Entity { ch, name: Some(name), invisible }
}

static ENTITIES: &[Entity] = &[
    entity('\u{00A0}', "nbsp", true),
    entity('\u{00AD}', "shy", true),
    entity('\u{2002}', "ensp", true),
    entity('\u{2003}', "emsp", true),
    entity('\u{2009}', "thinsp", true),
    entity('\u{200C}', "zwnj", true),
    entity('\u{200D}', "zwj", true),
    entity('\u{200E}', "lrm", true),
    entity('\u{200F}', "rlm", true),
    Entity { ch: '\u{202F}', name: None, invisible: true },
    entity('\u{2013}', "ndash", false),
    entity('\u{2014}', "mdash", false),
    entity('\u{2026}', "hellip", false),
    entity('\u{00AB}', "laquo", false),
    entity('\u{00BB}', "raquo", false),
    entity('\u{201C}', "ldquo", false),
    entity('\u{201D}', "rdquo", false),
    entity('\u{201E}', "bdquo", false),
    entity('\u{2018}', "lsquo", false),
    entity('\u{2019}', "rsquo", false),
    entity('\u{00A9}', "copy", false),
    entity('\u{00AE}', "reg", false),
    entity('\u{2122}', "trade", false),
    entity('\u{00D7}', "times", false),
    entity('\u{2212}', "minus", false),
    entity('\u{00B0}', "deg", false),
    entity('\u{00A7}', "sect", false),
    entity('\u{2116}', "numero", false),
];

static ENTITY_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#(\d{1,7})|#[xX]([0-9a-fA-F]{1,6})|([a-zA-Z]+));").expect("valid regex")
});

fn lookup(ch: char) -> Option<&'static Entity> {
    ENTITIES.iter().find(|e| e.ch == ch)
}

/// The table entry an entity reference points at, if any.
fn resolve(caps: &Captures<'_>) -> Option<&'static Entity> {
    let ch = if let Some(dec) = caps.get(1) {
        dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
    } else if let Some(hex) = caps.get(2) {
        u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
    } else {
        caps.get(3).and_then(|name| {
            ENTITIES.iter().find(|e| e.name == Some(name.as_str())).map(|e| e.ch)
        })
    };
    ch.and_then(lookup)
}

/// How `e` is written under `kind`, or `None` to keep the plain character.
fn reference(e: &Entity, kind: EntityKind, only_invisible: bool) -> Option<String> {
    if kind == EntityKind::Default || (only_invisible && !e.invisible) {
        return None;
    }
    Some(match (kind, e.name) {
        (EntityKind::Name, Some(name)) => format!("&{};", name),
        _ => format!("&#{};", e.ch as u32),
    })
}

/// Replace references to characters in the entity table with the characters
/// themselves. Anything else (`&amp;`, `&#60;`, unknown names) is left alone.
pub fn decode(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    ENTITY_REF.replace_all(text, |caps: &Captures<'_>| match resolve(caps) {
        Some(e) => e.ch.to_string(),
        None => caps[0].to_string(),
    })
}

/// Render table characters as HTML references according to `kind`.
pub fn render(text: &str, kind: EntityKind, only_invisible: bool) -> String {
    if kind == EntityKind::Default {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match lookup(ch).and_then(|e| reference(e, kind, only_invisible)) {
            Some(written) => out.push_str(&written),
            None => out.push(ch),
        }
    }
    out
}

/// A span whose spelling changes when the text is decoded and rendered again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Byte offset into the scanned text.
    pub start: usize,
    pub found: String,
    pub replacement: String,
}

/// Every reference or table character in `text` that `render(decode(text))`
/// would spell differently, in text order.
pub fn changes(text: &str, kind: EntityKind, only_invisible: bool) -> Vec<Change> {
    let mut out = Vec::new();
    let literal = |from: usize, slice: &str, out: &mut Vec<Change>| {
        for (at, ch) in slice.char_indices() {
            if let Some(written) = lookup(ch).and_then(|e| reference(e, kind, only_invisible)) {
                out.push(Change { start: from + at, found: ch.to_string(), replacement: written });
            }
        }
    };

    let mut last = 0;
    for caps in ENTITY_REF.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        literal(last, &text[last..whole.start()], &mut out);
        if let Some(e) = resolve(&caps) {
            let written = reference(e, kind, only_invisible).unwrap_or_else(|| e.ch.to_string());
            if written != whole.as_str() {
                out.push(Change {
                    start: whole.start(),
                    found: whole.as_str().to_string(),
                    replacement: written,
                });
            }
        }
        last = whole.end();
    }
    literal(last, &text[last..], &mut out);
    out
}
