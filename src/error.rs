//! Defines the crate level error type.
//!
//! The engines in this crate never fail on a valid snapshot. Errors only come
//! from the edges: loading snapshots, applying mutations, writing exports and
//! resolving configuration.

use crate::record::RecordId;

/// The errors that may occur in the dashboard.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The snapshot file could not be read.
    ///
    /// Callers should pass in the path and the original error as a string.
    #[error("could not read the snapshot at \"{0}\": {1}")]
    SnapshotReadError(String, String),

    /// The snapshot could not be decoded as a JSON array of records.
    #[error("could not parse the snapshot as JSON: {0}")]
    InvalidSnapshot(String),

    /// An error occurred while serializing records as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while writing rows to a CSV sink.
    #[error("could not write CSV: {0}")]
    CsvWriteError(String),

    /// A record was created with an ID that already exists in the snapshot.
    #[error("a record with the ID \"{0}\" already exists")]
    DuplicateRecordId(RecordId),

    /// Tried to update a record that does not exist in the snapshot.
    #[error("tried to update the record \"{0}\" which is not in the snapshot")]
    UpdateMissingRecord(RecordId),

    /// Tried to delete a record that does not exist in the snapshot.
    #[error("tried to delete the record \"{0}\" which is not in the snapshot")]
    DeleteMissingRecord(RecordId),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// A configuration value is outside of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidSnapshot(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        tracing::error!("an unhandled CSV error occurred: {}", value);
        Error::CsvWriteError(value.to_string())
    }
}
