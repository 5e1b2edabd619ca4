//! The in-memory record store holding every [`Book`] for the lifetime of the process.

use crate::{
    errors::StoreError,
    model::{Book, BookPatch, NewBook},
};
use parking_lot::Mutex;
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, warn};

/// The books and the id counter. Kept behind one lock so that assigning an id and appending the
/// book happen as a single step.
#[derive(Debug, Default)]
struct Shelf {
    /// All books, in insertion order.
    books: Vec<Book>,
    /// The highest id handed out or seeded so far. Never decreases.
    last_id: i32,
}

/// A handle to the record store.
///
/// Cloning the handle is cheap and every clone refers to the same records, so one store can be
/// shared between the query and mutation roots.
#[derive(Clone, Debug, Default)]
pub struct BookStore {
    /// The shared records.
    shelf: Arc<Mutex<Shelf>>,
}

impl BookStore {
    /// The lowest value the id counter starts from. Ids up to and including this one are reserved
    /// for the bundled seed file.
    pub const DEFAULT_ID_FLOOR: i32 = 5;

    /// Create a store holding the given books, in order. New books are assigned ids above both
    /// [`DEFAULT_ID_FLOOR`](Self::DEFAULT_ID_FLOOR) and every seeded id.
    #[inline]
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self::with_id_floor(books, Self::DEFAULT_ID_FLOOR)
    }

    /// Create a store holding the given books, in order, with a custom id floor. The counter
    /// starts at the larger of `floor` and the highest seeded id.
    #[inline]
    #[must_use]
    pub fn with_id_floor(books: Vec<Book>, floor: i32) -> Self {
        let last_id = books
            .iter()
            .map(|book| book.id)
            .fold(floor, i32::max);

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id) {
                warn!(id = book.id, name = %book.name, "seeded book reuses an id");
            }
        }

        debug!(books = books.len(), last_id, "created book store");
        Self {
            shelf: Arc::new(Mutex::new(Shelf { books, last_id })),
        }
    }

    /// Returns a copy of every book, in insertion order.
    #[inline]
    #[must_use]
    pub fn list(&self) -> Vec<Book> {
        self.shelf.lock().books.clone()
    }

    /// The number of books in the store.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shelf.lock().books.len()
    }

    /// Whether the store holds no books at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shelf.lock().books.is_empty()
    }

    /// The highest id handed out or seeded so far.
    #[inline]
    #[must_use]
    pub fn last_id(&self) -> i32 {
        self.shelf.lock().last_id
    }

    /// Returns the first book with the given id, if any.
    #[inline]
    #[must_use]
    pub fn find_by_id(&self, id: i32) -> Option<Book> {
        self.shelf
            .lock()
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Returns the first book whose name is exactly `name`, if any. The comparison is
    /// case-sensitive.
    #[inline]
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<Book> {
        self.shelf
            .lock()
            .books
            .iter()
            .find(|book| book.name == name)
            .cloned()
    }

    /// Returns every book whose name is exactly `name`, in insertion order.
    #[inline]
    #[must_use]
    pub fn filter_by_name(&self, name: &str) -> Vec<Book> {
        self.shelf
            .lock()
            .books
            .iter()
            .filter(|book| book.name == name)
            .cloned()
            .collect()
    }

    /// Add a book at the end of the store, assigning it the next id, and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] if the id counter cannot be incremented. The store is
    /// left unchanged in that case.
    #[inline]
    pub fn append(&self, new_book: NewBook) -> Result<Book, StoreError> {
        let mut shelf = self.shelf.lock();
        let id = shelf
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;

        let book = Book {
            id,
            ..Book::from(new_book)
        };
        shelf.last_id = id;
        shelf.books.push(book.clone());
        drop(shelf);

        Ok(book)
    }

    /// Apply `patch` to the first book with the given id and return the updated book. Returns
    /// [`None`] and leaves the store untouched if there is no such book.
    #[inline]
    #[must_use]
    pub fn update(&self, id: i32, patch: &BookPatch) -> Option<Book> {
        let mut shelf = self.shelf.lock();
        let book = shelf.books.iter_mut().find(|book| book.id == id)?;
        patch.apply_to(book);
        Some(book.clone())
    }
}
