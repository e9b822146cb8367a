//! Customer activity log
//!
//! Records who changed what through the API. Mutating handlers append one
//! record after the change is persisted.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::logger::Logger;

/// One activity entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Activity type, e.g. `AddNewShipment`
    pub system_keyword: String,
    pub comment: String,
    pub entity_name: &'static str,
    pub entity_id: u32,
}

impl ActivityRecord {
    pub fn new(
        system_keyword: impl Into<String>,
        comment: impl Into<String>,
        entity_name: &'static str,
        entity_id: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            system_keyword: system_keyword.into(),
            comment: comment.into(),
            entity_name,
            entity_id,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Activity sink
pub trait ActivityLog: Send + Sync {
    fn insert_activity(&self, record: ActivityRecord) -> io::Result<()>;
}

/// Emits activity as `ACTIVITY` log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggerActivityLog;

impl ActivityLog for LoggerActivityLog {
    fn insert_activity(&self, record: ActivityRecord) -> io::Result<()> {
        let id = record.id.to_string();
        let entity_id = record.entity_id.to_string();
        Logger::info(
            "ACTIVITY",
            &[
                ("activity_id", id.as_str()),
                ("keyword", record.system_keyword.as_str()),
                ("comment", record.comment.as_str()),
                ("entity", record.entity_name),
                ("entity_id", entity_id.as_str()),
            ],
        );
        Ok(())
    }
}

/// Keeps activity in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryActivityLog {
    records: Arc<Mutex<Vec<ActivityRecord>>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ActivityRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ActivityLog for MemoryActivityLog {
    fn insert_activity(&self, record: ActivityRecord) -> io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        Ok(())
    }
}
