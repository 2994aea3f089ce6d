//! Base implementation of records for logging.
use crate::error::CoreError;
use std::collections::{
    hash_map::{Iter, Keys},
    HashMap,
};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, typically a reward or a rate.
    Scalar(f32),

    /// A text value, such as the outcome of a step.
    String(String),
}

/// A container for storing key-value pairs of various data types.
///
/// ```rust
/// use bricknbash_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("episode_return", -12.0);
/// record.insert("num_wins", RecordValue::Scalar(3.0));
/// assert_eq!(record.get_scalar("num_wins").unwrap(), 3.0);
/// ```
#[derive(Debug, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from the second record
    /// overwrites the value from the first record.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges another record into this one in place.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, CoreError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(CoreError::RecordValueTypeError("Scalar".to_string())),
            None => Err(CoreError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, CoreError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(CoreError::RecordValueTypeError("String".to_string())),
            None => Err(CoreError::RecordKeyError(k.to_string())),
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_second_record() {
        let a = Record::from_slice(&[
            ("reward", RecordValue::Scalar(1.0)),
            ("outcome", RecordValue::String("moved".to_string())),
        ]);
        let b = Record::from_scalar("reward", -20.0);
        let merged = a.merge(b);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get_scalar("reward").unwrap(), -20.0);
        assert_eq!(merged.get_string("outcome").unwrap(), "moved");
    }

    #[test]
    fn test_get_errors() {
        let record = Record::from_scalar("reward", 1.0);
        assert!(matches!(
            record.get_scalar("missing"),
            Err(CoreError::RecordKeyError(_))
        ));
        assert!(matches!(
            record.get_string("reward"),
            Err(CoreError::RecordValueTypeError(_))
        ));
    }
}
