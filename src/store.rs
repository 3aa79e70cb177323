use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::schemas::{ExpenseSet, PersistedState};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),
}

// Overwrites in place, no atomic rename. A failed write is reported by the
// caller and the session carries on.
pub fn save(expenses: &ExpenseSet, total_members: u32, path: &Path) -> Result<(), StoreError> {
    let state = PersistedState {
        expenses: expenses.clone(),
        total_members,
    };
    let json = serde_json::to_string_pretty(&state)?;
    fs::write(path, json)?;
    Ok(())
}

// A missing file is not an error, only an unreadable or unparseable one is.
pub fn load(path: &Path) -> Result<Option<PersistedState>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let state = serde_json::from_str(&contents)?;
    Ok(Some(state))
}
