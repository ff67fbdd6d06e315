use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One structured line item recovered from raw extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatementLine {
    pub line_item: String,
    pub value: String,
}

/// Parses raw extracted statement text into `(line item, value)` pairs.
///
/// Intended for previewing a document before any mapping pass: each line of
/// the form "label: value" (or "label  value") yields one entry. Lines that
/// do not fit that shape fall back to stripping every numeric token out of
/// the line and pairing the remainder with the first number found.
pub struct StatementParser {
    item_re: Regex,
    number_re: Regex,
}

impl StatementParser {
    pub fn new() -> Self {
        Self {
            // "Accounts receivable, net: $1,234.56" (label, separator, value)
            item_re: Regex::new(r"^([A-Za-z\s()&,.-]+?)\s*[:|\s]\s*(-?\$?\s*\d[\d,]*\.?\d*)\s*$")
                .unwrap(),
            number_re: Regex::new(r"-?\$?\s*\d[\d,]*\.?\d*").unwrap(),
        }
    }

    pub fn parse(&self, text: &str) -> Vec<StatementLine> {
        let mut lines = Vec::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = self.item_re.captures(line) {
                lines.push(StatementLine {
                    line_item: caps[1].trim().to_string(),
                    value: normalize_value(&caps[2]),
                });
                continue;
            }

            // Fallback: pull the numbers out and treat whatever is left as the label
            let numbers: Vec<&str> = self
                .number_re
                .find_iter(line)
                .map(|m| m.as_str())
                .collect();

            if numbers.is_empty() || line.len() <= 3 {
                continue;
            }

            let line_item = self.number_re.replace_all(line, "").trim().to_string();
            if line_item.is_empty() {
                continue;
            }

            lines.push(StatementLine {
                line_item,
                value: normalize_value(numbers[0]),
            });
        }

        lines
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_value(raw: &str) -> String {
    raw.trim().replace(['$', ','], "")
}
