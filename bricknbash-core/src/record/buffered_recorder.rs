use super::{AggregateRecorder, Record};

/// Buffered recorder.
///
/// Keeps every record in memory. Used for inspecting the sequence of records
/// produced by a training or evaluation run.
#[derive(Debug, Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
    n_flushes: usize,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.buf.iter()
    }

    /// Returns the number of records kept.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no record was kept.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns how many times [`AggregateRecorder::flush`] was called.
    pub fn n_flushes(&self) -> usize {
        self.n_flushes
    }
}

impl AggregateRecorder for BufferedRecorder {
    fn store(&mut self, record: Record) {
        self.buf.push(record);
    }

    fn flush(&mut self, _step: i64) {
        self.n_flushes += 1;
    }
}
