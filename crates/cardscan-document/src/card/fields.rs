// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Labelled field parsing over a card's text layer.

use std::collections::BTreeMap;

use cardscan_core::error::{CardScanError, Result};
use cardscan_core::types::{FieldKind, FieldLayout, FieldValue, field_key};
use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, instrument};

/// Date format printed on cards.
const DATE_FORMAT: &str = "%d.%m.%Y";

struct FieldPattern {
    kind: FieldKind,
    label: String,
    regex: Regex,
}

/// Compiled matchers for every label in a [`FieldLayout`].
///
/// Build once per layout and reuse across cards.
pub struct FieldParser {
    patterns: Vec<FieldPattern>,
    order: Vec<String>,
    order_regex: Option<Regex>,
}

impl FieldParser {
    pub fn new(layout: &FieldLayout) -> Result<Self> {
        let patterns = layout
            .labels()
            .map(|(kind, label)| {
                Ok(FieldPattern {
                    kind,
                    label: label.to_string(),
                    regex: compile(&value_pattern(kind, label))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let order_regex = if layout.order.is_empty() {
            None
        } else {
            let alternatives: Vec<String> =
                layout.order.iter().map(|label| regex::escape(label)).collect();
            Some(compile(&alternatives.join("|"))?)
        };

        Ok(Self {
            patterns,
            order: layout.order.clone(),
            order_regex,
        })
    }

    /// Read every configured field out of `text`, keyed by [`field_key`].
    #[instrument(skip_all, fields(fields = self.patterns.len()))]
    pub fn parse(&self, text: &str) -> Result<BTreeMap<String, FieldValue>> {
        let mut values = BTreeMap::new();
        for pattern in &self.patterns {
            let raw = pattern
                .regex
                .captures(text)
                .and_then(|caps| caps.get(1))
                .ok_or_else(|| CardScanError::MissingField(pattern.label.clone()))?
                .as_str();
            let value = convert(pattern.kind, &pattern.label, raw)?;
            debug!(label = %pattern.label, ?value, "Field parsed");
            values.insert(field_key(&pattern.label), value);
        }
        Ok(values)
    }

    /// Labels must appear in `text` in exactly the configured order.
    pub fn check_order(&self, text: &str) -> Result<()> {
        let Some(regex) = &self.order_regex else {
            return Ok(());
        };
        let found: Vec<String> = regex.find_iter(text).map(|m| m.as_str().to_string()).collect();
        if found != self.order {
            return Err(CardScanError::FieldOrder {
                expected: self.order.clone(),
                found,
            });
        }
        Ok(())
    }
}

/// The card's title: its first line of text.
pub fn card_label(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

fn value_pattern(kind: FieldKind, label: &str) -> String {
    let label = regex::escape(label);
    match kind {
        FieldKind::Text => format!(r"{label} ?:\s(\w+)"),
        FieldKind::Integer => format!(r"{label} ?:\s(\d+)"),
        FieldKind::Date => format!(r"{label} ?:\s(\d{{2}}\.\d{{2}}\.\d{{4}})"),
        // One bare word per line, ending at the first line that is anything else.
        FieldKind::List => format!(r"(?m){label} ?:[ \t]*((?:\n[ \t]*\w+[ \t]*$)+)"),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|err| CardScanError::Config(format!("bad field pattern `{}`: {}", pattern, err)))
}

fn convert(kind: FieldKind, label: &str, raw: &str) -> Result<FieldValue> {
    let parse_error = || CardScanError::FieldParse {
        field: label.to_string(),
        value: raw.to_string(),
    };
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => raw.parse().map(FieldValue::Integer).map_err(|_| parse_error()),
        FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(FieldValue::Date)
            .map_err(|_| parse_error()),
        FieldKind::List => Ok(FieldValue::List(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_TEXT: &str = "SERVICEABLE TAG
P/N: AB123
Qty: 12
Exp Date: 01.02.2025
Notes:
first
second
Batch#: 77
";

    fn layout(order: &[&str]) -> FieldLayout {
        let mut fields = BTreeMap::new();
        fields.insert(FieldKind::Text, vec!["P/N".to_string()]);
        fields.insert(FieldKind::Integer, vec!["Qty".to_string(), "Batch#".to_string()]);
        fields.insert(FieldKind::Date, vec!["Exp Date".to_string()]);
        fields.insert(FieldKind::List, vec!["Notes".to_string()]);
        FieldLayout {
            fields,
            order: order.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn parses_each_kind() {
        let parser = FieldParser::new(&layout(&[])).expect("patterns compile");
        let values = parser.parse(CARD_TEXT).expect("all fields present");

        assert_eq!(values["p/n"], FieldValue::Text("AB123".into()));
        assert_eq!(values["qty"], FieldValue::Integer(12));
        assert_eq!(values["batch"], FieldValue::Integer(77));
        assert_eq!(
            values["exp_date"],
            FieldValue::Date(NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"))
        );
        assert_eq!(
            values["notes"],
            FieldValue::List(vec!["first".into(), "second".into()])
        );
    }

    #[test]
    fn missing_label_reported() {
        let parser = FieldParser::new(&layout(&[])).expect("patterns compile");
        let err = parser.parse("SERVICEABLE TAG\nQty: 3\n").unwrap_err();
        assert!(matches!(err, CardScanError::MissingField(_)));
    }

    #[test]
    fn impossible_date_is_a_parse_error() {
        let parser = FieldParser::new(&layout(&[])).expect("patterns compile");
        let text = CARD_TEXT.replace("01.02.2025", "31.02.2025");
        match parser.parse(&text).unwrap_err() {
            CardScanError::FieldParse { field, value } => {
                assert_eq!(field, "Exp Date");
                assert_eq!(value, "31.02.2025");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn order_matches_text() {
        let parser =
            FieldParser::new(&layout(&["P/N", "Qty", "Exp Date", "Notes", "Batch#"]))
                .expect("patterns compile");
        assert!(parser.check_order(CARD_TEXT).is_ok());
    }

    #[test]
    fn order_mismatch_reported() {
        let parser =
            FieldParser::new(&layout(&["Qty", "P/N", "Exp Date", "Notes", "Batch#"]))
                .expect("patterns compile");
        match parser.check_order(CARD_TEXT).unwrap_err() {
            CardScanError::FieldOrder { found, .. } => {
                assert_eq!(found, vec!["P/N", "Qty", "Exp Date", "Notes", "Batch#"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_order_always_passes() {
        let parser = FieldParser::new(&layout(&[])).expect("patterns compile");
        assert!(parser.check_order("anything").is_ok());
    }

    #[test]
    fn label_is_first_line() {
        assert_eq!(card_label(CARD_TEXT), "SERVICEABLE TAG");
        assert_eq!(card_label(""), "");
    }
}
