//! Types and traits for recording metrics of the training loop.
//!
//! The loop produces a [`Record`] at every step: the reward, the exploration
//! rate used by the agent, and at the end of an episode its return, length
//! and the cumulative win/loss counts. Records are handed to an
//! [`AggregateRecorder`], which decides where they end up.
//!
//! # Core Components
//!
//! * [`Record`] - A container of key-value pairs
//! * [`RecordValue`] - The values a record can hold
//! * [`AggregateRecorder`] - Destination of records
//! * [`RecordStorage`] - Aggregation of stored records into one record
//! * [`LogRecorder`] - Writes aggregated records through the `log` facade
//! * [`BufferedRecorder`] - Keeps records in memory, for tests and evaluation
//! * [`NullRecorder`] - Discards all records
//!
//! # Basic Usage
//!
//! ```rust
//! use bricknbash_core::record::{Record, RecordValue};
//!
//! let mut record = Record::from_scalar("reward", 1.0);
//! record.insert("outcome", RecordValue::String("moved".to_string()));
//! assert_eq!(record.get_scalar("reward").unwrap(), 1.0);
//! ```
mod base;
mod buffered_recorder;
mod log_recorder;
mod null_recorder;
mod recorder;
mod storage;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use log_recorder::LogRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::AggregateRecorder;
pub use storage::RecordStorage;
