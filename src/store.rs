use crate::events::EventRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event log read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a JSON Lines event-log snapshot. Blank lines and lines that fail
/// to deserialize (including unknown event types) are skipped so a
/// degraded line never poisons the snapshot; only I/O failures surface.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<EventRecord>, StoreError> {
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(event) = serde_json::from_str::<EventRecord>(trimmed) {
            events.push(event);
        }
    }
    Ok(events)
}

pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<EventRecord>, StoreError> {
    let file = File::open(path)?;
    read_events(BufReader::new(file))
}
