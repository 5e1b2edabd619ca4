//! The query and mutation roots. Each resolver is a single step against the [`BookStore`].

use crate::{
    model::{Book, BookPatch, NewBook},
    store::BookStore,
};
use async_graphql::{Object, Result};
use tracing::{debug, info};

/// The query root.
#[derive(Clone, Debug)]
pub struct Query {
    /// The store queries read from.
    pub store: BookStore,
}

#[Object(name = "RootQuery")]
impl Query {
    /// Get single book
    async fn book(&self, name: Option<String>) -> Option<Book> {
        // No name means nothing can match.
        let book = self.store.find_by_name(&name?);
        if book.is_none() {
            debug!("no book matched the requested name");
        }
        book
    }

    /// List of books
    async fn book_list(&self, name: Option<String>) -> Vec<Book> {
        match name {
            Some(name) => self.store.filter_by_name(&name),
            None => self.store.list(),
        }
    }
}

/// The mutation root.
#[derive(Clone, Debug)]
pub struct Mutation {
    /// The store mutations write to.
    pub store: BookStore,
}

#[Object(name = "RootMutation")]
impl Mutation {
    /// add a new book
    async fn add_book(&self, name: String, pages: i32) -> Result<Book> {
        let book = self.store.append(NewBook { name, pages })?;
        info!(id = book.id, name = %book.name, pages = book.pages, "added book");
        Ok(book)
    }

    /// Update existing book
    async fn update_book(
        &self,
        id: i32,
        name: Option<String>,
        pages: Option<i32>,
    ) -> Option<Book> {
        let patch = BookPatch { name, pages };
        if patch.is_empty() {
            debug!(id, "update carries no fields, nothing to write");
            return self.store.find_by_id(id);
        }

        let book = self.store.update(id, &patch);
        match &book {
            Some(book) => info!(id, name = %book.name, pages = book.pages, "updated book"),
            None => debug!(id, "no book to update"),
        }
        book
    }
}
