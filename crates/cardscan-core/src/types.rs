// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for card fields.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the value printed after a field label is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// A single word.
    #[serde(rename = "str_fields")]
    Text,
    /// A run of digits.
    #[serde(rename = "int_fields")]
    Integer,
    /// A `dd.mm.yyyy` date.
    #[serde(rename = "date_fields")]
    Date,
    /// One word per line below the label.
    #[serde(rename = "list_fields")]
    List,
}

/// A parsed field value. Serialized as the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Which labels a card carries, how to read each one, and the order they
/// must appear in on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Labels grouped by value kind, as written on the card (e.g. `"P/N"`).
    pub fields: BTreeMap<FieldKind, Vec<String>>,
    /// Labels in the order they are printed.
    #[serde(default)]
    pub order: Vec<String>,
}

impl FieldLayout {
    /// Load a layout from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Iterate `(kind, label)` pairs.
    pub fn labels(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        self.fields
            .iter()
            .flat_map(|(kind, labels)| labels.iter().map(move |l| (*kind, l.as_str())))
    }
}

/// Record key for a printed label: lowercase, `#` dropped, spaces and dots
/// become underscores (`"Rec. Date"` -> `"rec__date"`).
pub fn field_key(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| *c != '#')
        .map(|c| if c == ' ' || c == '.' { '_' } else { c })
        .collect()
}
