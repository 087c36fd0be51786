//! Built-in typography rules
//!
//! ORDER MATTERS: whitespace cleanup runs before the punctuation rules so that
//! `a  -  b` collapses to single spaces before the dash rule sees it.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
    pub enabled_by_default: bool,
}

pub static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // ── Spaces ───────────────────────────────────────────────────────────────
        Rule {
            name: "common/space/replaceTab",
            pattern: Regex::new(r"\t").expect("valid regex"),
            replacement: " ",
            enabled_by_default: true,
        },
        Rule {
            name: "common/space/delLeadingBlanks",
            pattern: Regex::new(r"(?m)^[ \t]+").expect("valid regex"),
            replacement: "",
            enabled_by_default: false,
        },
        Rule {
            name: "common/space/delTrailingBlanks",
            pattern: Regex::new(r"(?m)[ \t]+$").expect("valid regex"),
            replacement: "",
            enabled_by_default: true,
        },
        Rule {
            name: "common/space/delRepeatSpace",
            pattern: Regex::new(r"(\S) {2,}").expect("valid regex"),
            replacement: "${1} ",
            enabled_by_default: true,
        },
        // ── Punctuation ──────────────────────────────────────────────────────────
        Rule {
            name: "common/punctuation/hellip",
            pattern: Regex::new(r"\.{3}").expect("valid regex"),
            replacement: "\u{2026}",
            enabled_by_default: true,
        },
        // ── Dashes ───────────────────────────────────────────────────────────────
        Rule {
            name: "common/dash/main",
            pattern: Regex::new(r"(\S) +[-\u{2013}\u{2014}] +").expect("valid regex"),
            replacement: "${1}\u{00A0}\u{2014} ",
            enabled_by_default: true,
        },
        // ── Symbols ──────────────────────────────────────────────────────────────
        Rule {
            name: "common/symbols/copy",
            pattern: Regex::new(r"(?i)\(c\)").expect("valid regex"),
            replacement: "\u{00A9}",
            enabled_by_default: true,
        },
        Rule {
            name: "common/symbols/reg",
            pattern: Regex::new(r"(?i)\(r\)").expect("valid regex"),
            replacement: "\u{00AE}",
            enabled_by_default: true,
        },
        Rule {
            name: "common/symbols/trade",
            pattern: Regex::new(r"(?i)\(tm\)").expect("valid regex"),
            replacement: "\u{2122}",
            enabled_by_default: true,
        },
        // ── Numbers ──────────────────────────────────────────────────────────────
        Rule {
            name: "common/number/times",
            pattern: Regex::new(r"\b(\d+) ?[x\u{0445}] ?(\d+)\b").expect("valid regex"),
            replacement: "${1}\u{00D7}${2}",
            enabled_by_default: true,
        },
    ]
});
