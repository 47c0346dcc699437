use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Value of one column in a parsed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Present(String),
    /// The row ended before this column.
    Absent,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Present(value) => Some(value),
            FieldValue::Absent => None,
        }
    }
}

/// One source row, keyed by the header names in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, FieldValue::Present(value.into()));
        self
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value for `key`, or `None` when the key is unknown or absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(FieldValue::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RecordKind {
    Plan,
    Offer,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Plan, RecordKind::Offer];

    pub fn default_source_name(self) -> &'static str {
        match self {
            RecordKind::Plan => "SingaPlingPlanDetails.csv",
            RecordKind::Offer => "SingaPlingRetentionOffers.csv",
        }
    }

    pub fn default_output_name(self) -> &'static str {
        match self {
            RecordKind::Plan => "SingaPlingPlanDetails.txt",
            RecordKind::Offer => "SingaPlingRetentionOffers.txt",
        }
    }

    /// Human label used in progress output.
    pub fn description(self) -> &'static str {
        match self {
            RecordKind::Plan => "Plan Details",
            RecordKind::Offer => "Retention Offers",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Plan => f.write_str("plan"),
            RecordKind::Offer => f.write_str("offer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub kind: RecordKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub delimiter: u8,
}

impl ConversionJob {
    pub fn new(kind: RecordKind, source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            source: source.into(),
            destination: destination.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
