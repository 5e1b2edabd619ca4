//! Loading the initial set of books from a JSON file.

use crate::{errors::SeedError, model::Book};
use serde_json::{Value, from_slice, from_value};
use std::{fs::read, path::Path};
use tracing::{error, info, warn};

/// Read and parse a seed file containing a JSON array of books.
///
/// Entries that are not book objects at all are logged and skipped, so one broken entry does not
/// discard the rest of the file.
///
/// # Errors
///
/// Returns [`SeedError::Read`] if the file cannot be read and [`SeedError::Parse`] if its
/// contents are not a JSON array.
#[inline]
pub fn load(path: &Path) -> Result<Vec<Book>, SeedError> {
    let content = read(path).map_err(|source| SeedError::Read {
        path: path.to_owned(),
        source,
    })?;

    let entries: Vec<Value> = from_slice(&content).map_err(|source| SeedError::Parse {
        path: path.to_owned(),
        source,
    })?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match from_value::<Book>(entry) {
            Ok(book) => Some(book),
            Err(err) => {
                warn!(path = %path.display(), index, error = %err, "skipping seed entry");
                None
            },
        })
        .collect())
}

/// Like [`load`], but a seed file that cannot be loaded is not fatal: the error is logged and no
/// books are returned.
#[inline]
#[must_use]
pub fn load_or_empty(path: &Path) -> Vec<Book> {
    match load(path) {
        Ok(books) => {
            info!(path = %path.display(), books = books.len(), "loaded seed data");
            books
        },
        Err(err) => {
            error!(error = %err, "continuing without seed data");
            Vec::new()
        },
    }
}
