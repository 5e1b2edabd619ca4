//! Binding the query and mutation roots to a store.

use crate::{
    queries::{Mutation, Query},
    store::BookStore,
};
use async_graphql::{EmptySubscription, Schema};

/// The full GraphQL schema served by the API.
pub type BookSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema, with both roots reading from and writing to `store`.
#[inline]
#[must_use]
pub fn build_schema(store: BookStore) -> BookSchema {
    let query = Query {
        store: store.clone(),
    };
    let mutation = Mutation { store };
    Schema::build(query, mutation, EmptySubscription).finish()
}
