//! CSV sponsor import.
//!
//! # Purpose
//! Parses a comma-delimited text blob with a required header row into sponsor
//! records and applies them to the store, one `add_sponsor` call per row.
//!
//! # Format
//! The header must name the `name`, `industry`, `category`, and
//! `accountManager` columns (any order; extra columns are ignored). A header
//! missing any of them rejects the whole blob in one error; there is no
//! per-row recovery. Cells are trimmed, blank lines are skipped, and an empty
//! category cell falls back to "Uncategorized".
use crate::model::{Address, Contact, PLACEHOLDER_LOGO, Sponsor, UNCATEGORIZED};
use crate::store::{SponsorshipStore, StoreError};
use thiserror::Error;
use tracing::{info, warn};

/// Header columns every import blob must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "industry", "category", "accountManager"];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("empty import input")]
    EmptyInput,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("import of {rows} rows exceeds the {limit} row limit")]
    TooManyRows { rows: usize, limit: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Imports sponsors from `text`, returning how many rows were applied.
///
/// Rows become sponsors with a store-minted id, placeholder logo, and empty
/// contact/address blocks; only the four required columns carry data.
pub async fn import_sponsors_csv(
    store: &dyn SponsorshipStore,
    text: &str,
    max_rows: usize,
) -> Result<usize, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }
    let mut lines = text.lines();
    let headers: Vec<&str> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.contains(column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        warn!(missing = ?missing, "sponsor csv rejected");
        return Err(ImportError::MissingColumns(missing));
    }

    let rows: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
    if rows.len() > max_rows {
        warn!(rows = rows.len(), max_rows, "sponsor csv rejected");
        return Err(ImportError::TooManyRows {
            rows: rows.len(),
            limit: max_rows,
        });
    }

    let mut imported = 0usize;
    for row in rows {
        let values: Vec<&str> = row.split(',').map(str::trim).collect();
        // A short row simply leaves its trailing columns empty, like the rest
        // of the dashboard's free-text fields.
        let cell = |column: &str| {
            headers
                .iter()
                .position(|header| *header == column)
                .and_then(|index| values.get(index))
                .copied()
                .unwrap_or_default()
        };
        let category = match cell("category") {
            "" => UNCATEGORIZED,
            value => value,
        };
        let sponsor = Sponsor {
            id: String::new(),
            name: cell("name").to_string(),
            logo: PLACEHOLDER_LOGO.to_string(),
            industry: cell("industry").to_string(),
            category: category.to_string(),
            account_manager: cell("accountManager").to_string(),
            contact: Contact::default(),
            address: Address::default(),
            billing_address: Address::default(),
            files: Vec::new(),
        };
        store.add_sponsor(sponsor).await?;
        imported += 1;
    }
    info!(imported, "sponsor csv import complete");
    Ok(imported)
}
