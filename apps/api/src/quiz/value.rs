//! Dynamic answer values.
//!
//! Quiz answers come from mixed widgets (single choice, multi-select, slider, free text)
//! and model output is loosely typed, so both are carried as a `DynamicValue`.
//!
//! Decoding picks the first variant that structurally matches, in the fixed order
//! String → Integer → Float → Boolean → List → Map. Numeric-looking and boolean-looking
//! strings therefore stay strings, and a whole-valued float such as `12.0` lands in
//! `Integer`. JSON `null` matches nothing: it is rejected at the top level, dropped from
//! lists, and treated as an absent key inside maps.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DynamicValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<DynamicValue>),
    Map(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    /// Short variant name, used in log lines and validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DynamicValue::String(_) => "string",
            DynamicValue::Integer(_) => "integer",
            DynamicValue::Float(_) => "float",
            DynamicValue::Boolean(_) => "boolean",
            DynamicValue::List(_) => "list",
            DynamicValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view. Floats are truncated toward zero; nothing else converts.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DynamicValue::Integer(i) => Some(*i),
            DynamicValue::Float(f) => Some(f.trunc() as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Integer(i) => Some(*i as f64),
            DynamicValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, DynamicValue>> {
        match self {
            DynamicValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The string elements of a list, in order. Non-string elements are dropped.
    /// Returns `None` when the value is not a list at all.
    pub fn string_items(&self) -> Option<Vec<String>> {
        self.as_list().map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::String(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::String(value)
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> Self {
        DynamicValue::Integer(value)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Float(value)
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Boolean(value)
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(values: Vec<T>) -> Self {
        DynamicValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}

/// Null-tolerant wrapper used for list elements and map values.
struct NullableValue(Option<DynamicValue>);

impl<'de> Deserialize<'de> for NullableValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<DynamicValue>::deserialize(deserializer).map(NullableValue)
    }
}

struct DynamicValueVisitor;

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, boolean, list, or string-keyed map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(match i64::try_from(v) {
            Ok(i) => DynamicValue::Integer(i),
            Err(_) => DynamicValue::Float(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Integer wins over Float whenever the number is whole and in range.
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(DynamicValue::Integer(v as i64))
        } else {
            Ok(DynamicValue::Float(v))
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Boolean(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(NullableValue(item)) = seq.next_element()? {
            if let Some(item) = item {
                items.push(item);
            }
        }
        Ok(DynamicValue::List(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = BTreeMap::new();
        while let Some((key, NullableValue(value))) = access.next_entry::<String, NullableValue>()? {
            if let Some(value) = value {
                map.insert(key, value);
            }
        }
        Ok(DynamicValue::Map(map))
    }
}

/// A user's quiz answers keyed by question field key.
///
/// At most one value per key. A missing key means the question was not answered, and
/// a `null` answer decodes the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, DynamicValue>);

impl AnswerSet {
    pub fn get(&self, field_key: &str) -> Option<&DynamicValue> {
        self.0.get(field_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DynamicValue)> {
        self.0.iter()
    }
}

#[cfg(test)]
impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous answer for the same key.
    pub fn record(&mut self, field_key: impl Into<String>, value: impl Into<DynamicValue>) {
        self.0.insert(field_key.into(), value.into());
    }

    /// Builder-style variant of [`AnswerSet::record`].
    pub fn with(mut self, field_key: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        self.record(field_key, value);
        self
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, NullableValue>::deserialize(deserializer)?;
        Ok(AnswerSet(
            raw.into_iter()
                .filter_map(|(key, NullableValue(value))| value.map(|v| (key, v)))
                .collect(),
        ))
    }
}
