use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::primitives::{date_to_unix_millis, parse_date};
use crate::error::{ChartError, ChartResult};

/// One raw field value as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn display(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Flat record keyed by field name; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, RawValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Parses a JSON array of flat objects whose values are strings or numbers.
///
/// A `null`, boolean, array or object value is a parse error naming the
/// record index and field.
pub fn records_from_json(json: &str) -> ChartResult<Vec<Record>> {
    let objects: Vec<IndexMap<String, Value>> = serde_json::from_str(json).map_err(|err| {
        ChartError::InvalidData(format!("records must be a JSON array of objects: {err}"))
    })?;
    objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            object
                .into_iter()
                .map(|(field, value)| {
                    let raw = raw_from_json(&value).ok_or_else(|| ChartError::Parse {
                        field: field.clone(),
                        index,
                        value: value.to_string(),
                        expected: "string or number",
                    })?;
                    Ok((field, raw))
                })
                .collect::<ChartResult<Record>>()
        })
        .collect()
}

fn raw_from_json(value: &Value) -> Option<RawValue> {
    match value {
        Value::String(text) => Some(RawValue::Text(text.clone())),
        Value::Number(number) => number.as_f64().map(RawValue::Number),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// How a field's raw values are interpreted on a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Decimal numbers, given as numbers or numeric strings.
    #[default]
    Numeric,
    /// Calendar dates in `%Y-%m-%d` form, plotted as UTC-midnight milliseconds.
    Date,
}

impl ValueKind {
    fn expected(self) -> &'static str {
        match self {
            Self::Numeric => "finite number",
            Self::Date => "date in %Y-%m-%d form",
        }
    }

    fn parse_raw(self, raw: &RawValue) -> Option<f64> {
        match (self, raw) {
            (Self::Numeric, RawValue::Number(value)) => Some(*value).filter(|v| v.is_finite()),
            (Self::Numeric, RawValue::Text(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            (Self::Date, RawValue::Text(text)) => parse_date(text).ok().map(date_to_unix_millis),
            (Self::Date, RawValue::Number(_)) => None,
        }
    }
}

/// Extracts and parses one field from every record.
///
/// Parsing is all-or-nothing: the first missing or malformed value aborts
/// the whole pass so no partial series ever reaches the chart.
pub fn parse_field(records: &[Record], field: &str, kind: ValueKind) -> ChartResult<Vec<f64>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record_field(record, index, field, kind))
        .collect()
}

/// Extracts an `(x, y)` pair per record; `y` is always numeric.
pub fn parse_pairs(
    records: &[Record],
    x_field: &str,
    x_kind: ValueKind,
    y_field: &str,
) -> ChartResult<Vec<(f64, f64)>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let x = parse_record_field(record, index, x_field, x_kind)?;
            let y = parse_record_field(record, index, y_field, ValueKind::Numeric)?;
            Ok((x, y))
        })
        .collect()
}

fn parse_record_field(
    record: &Record,
    index: usize,
    field: &str,
    kind: ValueKind,
) -> ChartResult<f64> {
    let raw = record.get(field).ok_or_else(|| ChartError::MissingField {
        field: field.to_owned(),
        index,
    })?;
    kind.parse_raw(raw).ok_or_else(|| ChartError::Parse {
        field: field.to_owned(),
        index,
        value: raw.display(),
        expected: kind.expected(),
    })
}
