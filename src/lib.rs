//! An in-memory collection of books exposed through a small GraphQL API.
//!
//! The [`BookStore`] owns every record and the id counter. The [`Query`] and [`Mutation`] roots
//! resolve operations against a shared store handle, and [`build_schema`] binds both to the same
//! store. Serving the schema over HTTP is left to the `bookshelf-server` binary.

pub mod errors;
pub use errors::{SeedError, StoreError};

pub mod model;
pub use model::{Author, Book, BookGenre, BookPatch, NewBook, Review, Reviewer};

pub mod store;
pub use store::BookStore;

pub mod queries;
pub use queries::{Mutation, Query};

pub mod schema;
pub use schema::{BookSchema, build_schema};

pub mod seed;
