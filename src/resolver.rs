use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of resolving a line-item label against extracted statement text.
///
/// `Missing` and `Ambiguous` are domain outcomes, not errors: resolution
/// always succeeds with one of the three variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase", tag = "status", content = "value")]
pub enum Resolution {
    #[schemars(
        description = "Exactly one distinct numeric value was found on lines mentioning the label. The value has currency symbols and thousands separators stripped; sign and decimal point are preserved."
    )]
    Resolved(String),

    #[schemars(description = "No numeric value was found on any line mentioning the label")]
    Missing,

    #[schemars(
        description = "Two or more distinct numeric values were found on lines mentioning the label; no disambiguation is attempted"
    )]
    Ambiguous,
}

impl Resolution {
    /// Text placed in the spreadsheet value column for this outcome.
    pub fn cell_text(&self) -> &str {
        match self {
            Resolution::Resolved(value) => value,
            Resolution::Missing => "MISSING",
            Resolution::Ambiguous => "AMBIGUOUS",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Locates the numeric value associated with a line-item label in extracted
/// statement text.
///
/// The search is line-oriented: every line that mentions the label
/// (case-insensitive, literal substring) contributes all of its numeric
/// tokens to a candidate set. A single distinct candidate resolves cleanly;
/// zero is `Missing`; more than one is `Ambiguous`. Restated values collapse
/// because candidates are deduplicated after normalization, so a total that
/// appears on two lines still resolves.
pub struct ValueResolver {
    number_re: Regex,
}

impl ValueResolver {
    pub fn new() -> Self {
        Self {
            // Shapes like -$ 1,234.56 / $100 / 42: sign, currency symbol, thousands
            // separators, optional decimal part
            number_re: Regex::new(r"-?\$?\s*\d[\d,]*(?:\.\d+)?").unwrap(),
        }
    }

    /// Resolve `label` against `text`.
    ///
    /// Empty text or an empty label short-circuits to `Missing`; no scan is
    /// performed. The label is matched as literal text, never as a pattern,
    /// so names like "Net Income (Loss)" behave the same as plain ones.
    pub fn resolve(&self, text: &str, label: &str) -> Resolution {
        if text.is_empty() || label.is_empty() {
            return Resolution::Missing;
        }

        let needle = label.to_lowercase();
        let mut candidates: BTreeSet<String> = BTreeSet::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if !line.to_lowercase().contains(&needle) {
                continue;
            }

            for token in self.number_re.find_iter(line) {
                candidates.insert(normalize_token(token.as_str()));
            }
        }

        match candidates.len() {
            0 => Resolution::Missing,
            1 => Resolution::Resolved(candidates.into_iter().next().unwrap()),
            _ => Resolution::Ambiguous,
        }
    }
}

impl Default for ValueResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips currency symbols, thousands separators, and surrounding
/// whitespace; sign and decimal point survive. "$ 1,234.56" and "1234.56"
/// normalize identically, so restatements collapse to one candidate.
fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect::<String>()
        .trim()
        .to_string()
}
