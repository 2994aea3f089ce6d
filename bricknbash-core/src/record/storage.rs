//! Record storage and aggregation.
use super::{Record, RecordValue};
use std::collections::BTreeSet;

/// A storage of records with aggregation.
///
/// Scalars stored under the same key are reduced to their min, max, mean and
/// median. For strings and datetimes the most recent value is kept.
#[derive(Debug, Default)]
pub struct RecordStorage {
    data: Vec<Record>,
}

fn min(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::INFINITY, f32::min))
}

fn max(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::NEG_INFINITY, f32::max))
}

fn mean(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().sum::<f32>() / vs.len() as f32)
}

fn median(mut vs: Vec<f32>) -> RecordValue {
    vs.sort_by(|x, y| x.total_cmp(y));
    RecordValue::Scalar(vs[vs.len() / 2])
}

impl RecordStorage {
    /// Creates a new empty record storage.
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Stores a record in the storage.
    pub fn store(&mut self, record: Record) {
        self.data.push(record);
    }

    /// Returns `true` if no record is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn keys(&self) -> BTreeSet<String> {
        self.data
            .iter()
            .flat_map(|record| record.keys().cloned())
            .collect()
    }

    fn latest(&self, key: &str) -> Option<&RecordValue> {
        self.data.iter().rev().find_map(|record| record.get(key))
    }

    fn scalar(&self, key: &str) -> Record {
        let vs: Vec<f32> = self
            .data
            .iter()
            .filter_map(|record| match record.get(key) {
                Some(RecordValue::Scalar(v)) => Some(*v),
                _ => None,
            })
            .collect();

        if vs.len() == 1 {
            Record::from_scalar(key, vs[0])
        } else {
            Record::from_slice(&[
                (format!("{}_min", key), min(&vs)),
                (format!("{}_max", key), max(&vs)),
                (format!("{}_mean", key), mean(&vs)),
                (format!("{}_median", key), median(vs)),
            ])
        }
    }

    /// Aggregates all stored records and clears the storage.
    pub fn aggregate(&mut self) -> Record {
        let mut record = Record::empty();

        for key in self.keys().iter() {
            match self.latest(key) {
                Some(RecordValue::Scalar(..)) => record.merge_inplace(self.scalar(key)),
                Some(value) => record.insert(key.clone(), value.clone()),
                None => {}
            }
        }

        self.data.clear();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_scalars() {
        let mut storage = RecordStorage::new();
        for r in [3.0, -1.0, 1.0] {
            storage.store(Record::from_scalar("reward", r));
        }
        storage.store(Record::from_scalar("episode_length", 7.0));

        let record = storage.aggregate();
        assert_eq!(record.get_scalar("reward_min").unwrap(), -1.0);
        assert_eq!(record.get_scalar("reward_max").unwrap(), 3.0);
        assert_eq!(record.get_scalar("reward_mean").unwrap(), 1.0);
        assert_eq!(record.get_scalar("reward_median").unwrap(), 1.0);
        assert_eq!(record.get_scalar("episode_length").unwrap(), 7.0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_aggregate_keeps_latest_string() {
        let mut storage = RecordStorage::new();
        storage.store(Record::from_slice(&[(
            "outcome",
            RecordValue::String("moved".into()),
        )]));
        storage.store(Record::from_slice(&[(
            "outcome",
            RecordValue::String("won".into()),
        )]));
        let record = storage.aggregate();
        assert_eq!(record.get_string("outcome").unwrap(), "won");
    }
}
