use super::{AggregateRecorder, Record, RecordStorage, RecordValue};
use log::info;

/// Writes aggregated records through the `log` facade.
///
/// Records are kept in a [`RecordStorage`] until [`flush`], which emits one
/// `info` line with every aggregated value sorted by key.
///
/// [`flush`]: AggregateRecorder::flush
#[derive(Debug, Default)]
pub struct LogRecorder {
    storage: RecordStorage,
}

impl LogRecorder {
    /// Constructs the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn format(record: &Record) -> String {
        let mut entries: Vec<_> = record.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(k, v)| match v {
                RecordValue::Scalar(v) => format!("{}={:.4}", k, v),
                RecordValue::String(s) => format!("{}={}", k, s),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AggregateRecorder for LogRecorder {
    fn store(&mut self, record: Record) {
        self.storage.store(record);
    }

    fn flush(&mut self, step: i64) {
        if self.storage.is_empty() {
            return;
        }
        let record = self.storage.aggregate();
        info!("step {}: {}", step, Self::format(&record));
    }
}
