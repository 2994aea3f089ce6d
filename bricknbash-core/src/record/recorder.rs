use super::Record;

/// Stores records and writes values aggregated from them on [`flush`].
///
/// [`flush`]: AggregateRecorder::flush
pub trait AggregateRecorder {
    /// Store the record.
    fn store(&mut self, record: Record);

    /// Writes values aggregated from the stored records.
    ///
    /// `step` is the number of environment steps done so far.
    fn flush(&mut self, step: i64);
}
