//! Immutable snapshots of the records fetched from the remote service.
//!
//! A [Snapshot] is never modified in place. Create, update and delete calls
//! mirrored from the service produce a new snapshot, and views re-derive their
//! filtered, sorted and bucketed data from the latest one.

use std::{fs, path::PathBuf, sync::Arc};

use crate::{
    Error,
    record::{FinancialRecord, RecordId, RecordKind},
};

/// A complete collection of records at a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Arc<[FinancialRecord]>,
}

/// A change confirmed by the remote service.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// A record was created.
    Create(FinancialRecord),
    /// The record with the same ID was replaced.
    Update(FinancialRecord),
    /// The record with this ID was removed.
    Delete(RecordId),
}

impl Snapshot {
    /// Create a snapshot from a complete fetch.
    pub fn new(records: Vec<FinancialRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Every record, in the order the service returned them.
    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    /// The number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by ID.
    pub fn get(&self, id: &RecordId) -> Option<&FinancialRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// The records of one kind, in snapshot order.
    pub fn of_kind(&self, kind: RecordKind) -> Vec<FinancialRecord> {
        self.records
            .iter()
            .filter(|record| record.kind == kind)
            .cloned()
            .collect()
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    /// Returns a new snapshot with `mutation` applied.
    ///
    /// Created records are appended. Updates replace the record with the same
    /// ID where it stands and deletes remove it.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::DuplicateRecordId] if a created record's ID already exists,
    /// - [Error::UpdateMissingRecord] or [Error::DeleteMissingRecord] if the
    ///   ID is not in the snapshot.
    pub fn apply(&self, mutation: Mutation) -> Result<Snapshot, Error> {
        let mut records = self.records.to_vec();

        match mutation {
            Mutation::Create(record) => {
                if self.position(&record.id).is_some() {
                    return Err(Error::DuplicateRecordId(record.id));
                }

                records.push(record);
            }
            Mutation::Update(record) => {
                let index = self
                    .position(&record.id)
                    .ok_or_else(|| Error::UpdateMissingRecord(record.id.clone()))?;

                records[index] = record;
            }
            Mutation::Delete(id) => {
                let index = self
                    .position(&id)
                    .ok_or(Error::DeleteMissingRecord(id))?;

                records.remove(index);
            }
        }

        Ok(Snapshot::new(records))
    }
}

/// The boundary to the remote service that owns the records.
pub trait RecordSource {
    /// Fetch a complete snapshot, or fail outright.
    fn fetch(&self) -> Result<Vec<FinancialRecord>, Error>;
}

/// Reads a snapshot saved as a JSON array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<FinancialRecord>, Error> {
        let text = fs::read_to_string(&self.path).map_err(|error| {
            Error::SnapshotReadError(self.path.display().to_string(), error.to_string())
        })?;

        let records: Vec<FinancialRecord> = serde_json::from_str(&text)?;
        tracing::info!("Loaded {} records from {}", records.len(), self.path.display());

        Ok(records)
    }
}

/// Writes `records` as the JSON array read by [JsonFileSource].
pub fn records_to_json(records: &[FinancialRecord]) -> Result<String, Error> {
    serde_json::to_string_pretty(records)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))
}

/// Holds the latest snapshot for the views of the dashboard.
#[derive(Debug, Default)]
pub struct RecordStore {
    snapshot: Snapshot,
}

impl RecordStore {
    /// A store holding `snapshot`.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a store with a fresh fetch from `source`.
    pub fn load(source: &impl RecordSource) -> Result<Self, Error> {
        let records = source
            .fetch()
            .inspect_err(|error| tracing::error!("Could not fetch records: {error}"))?;

        Ok(Self::new(Snapshot::new(records)))
    }

    /// The latest snapshot. Cloning it is cheap and the clone is unaffected
    /// by later changes to the store.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Replace the snapshot with a fresh fetch from `source`.
    ///
    /// The current snapshot is kept if the fetch fails.
    pub fn refresh(&mut self, source: &impl RecordSource) -> Result<(), Error> {
        let records = source
            .fetch()
            .inspect_err(|error| tracing::error!("Could not refresh records: {error}"))?;
        self.snapshot = Snapshot::new(records);
        Ok(())
    }

    /// Mirror a change confirmed by the service.
    ///
    /// The current snapshot is kept if the mutation is rejected.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), Error> {
        self.snapshot = self.snapshot.apply(mutation).inspect_err(|error| {
            tracing::warn!("Could not apply mutation to snapshot: {error}")
        })?;
        Ok(())
    }
}
