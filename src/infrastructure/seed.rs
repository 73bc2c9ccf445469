use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::repositories::{StoreError, TeamStore};
use crate::domain::team::{Flag, Team, TeamCode};

/// One team record as it appears in a seed file
#[derive(Debug, Deserialize)]
struct SeedTeam {
    code: String,
    flag: String,
    name: String,
}

/// Errors that can occur while seeding the team collection
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not a valid team list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed record rejected: {0}")]
    Invalid(#[from] DomainError),

    #[error("seeding write failed: {0}")]
    Store(#[from] StoreError),
}

/// Loads team records from a JSON file into the store
///
/// The file holds an array of `{code, flag, name}` objects. Records run
/// through the same value object validation as API input; the first bad
/// record aborts the load. Returns how many teams were inserted.
pub async fn load_teams(store: &dyn TeamStore, path: impl AsRef<Path>) -> Result<usize, SeedError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;
    let records: Vec<SeedTeam> = serde_json::from_str(&raw)?;

    let mut inserted = 0;
    for record in records {
        let code = TeamCode::new(record.code)?;
        let flag = Flag::new(record.flag)?;
        store.insert(Team::new(code, flag, record.name)).await?;
        inserted += 1;
    }

    Ok(inserted)
}
