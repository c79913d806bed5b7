//! Loading bubbles and programs from JSON
//!
//! A bubble file is a JSON array of bubble records; a program file is a JSON
//! array of statement records.

use crate::error::{Error, Result};
use shine_bubbles::{Bubble, BubbleRecord, Universe};
use shine_expr::{ExprRecord, Program};
use std::path::Path;

/// Parse bubble records and build a universe in record order.
///
/// Identifiers must be unique within the file.
pub fn universe_from_json(json: &str) -> Result<Universe> {
    let records: Vec<BubbleRecord> = serde_json::from_str(json)?;
    let mut universe = Universe::new();
    for record in &records {
        if universe.insert(Bubble::from_record(record)).is_some() {
            return Err(Error::DuplicateIdentifier(record.identifier.clone()));
        }
    }
    tracing::debug!(bubbles = universe.len(), "loaded universe");
    Ok(universe)
}

/// Read a bubble file
pub fn load_universe<P: AsRef<Path>>(path: P) -> Result<Universe> {
    let json = std::fs::read_to_string(path)?;
    universe_from_json(&json)
}

/// Parse a program from its statement records
pub fn program_from_json(json: &str) -> Result<Program> {
    let records: Vec<ExprRecord> = serde_json::from_str(json)?;
    Ok(Program::from_records(&records))
}

/// Read a program file
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Program> {
    let json = std::fs::read_to_string(path)?;
    program_from_json(&json)
}
