//! Error types used by the store and the seed loader.

use serde_json::Error as JsonError;
use std::{io::Error as IoError, path::PathBuf};
use thiserror::Error;

/// Errors that may occur when loading seed data. Created by [`load`](crate::seed::load).
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("could not read seed file {}: {source}", path.display())]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The seed file was read, but its contents are not a list of books.
    #[error("could not parse seed file {}: {source}", path.display())]
    Parse {
        /// The path that was read.
        path: PathBuf,
        /// The source error.
        #[source]
        source: JsonError,
    },
}

/// Errors that may occur when mutating the store. Created by
/// [`BookStore::append`](crate::store::BookStore::append).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// Every id representable by a GraphQL `Int` has already been handed out.
    #[error("No more book ids are available.")]
    IdsExhausted,
}
