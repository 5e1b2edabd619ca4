//! The entity shapes exposed through the GraphQL schema and read from the seed file.
use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use tracing::debug;

/// The representation of a book.
///
/// Every field may be missing or `null` in the seed file, in which case it takes its zero or blank
/// value. Unrecognized genres are dropped rather than rejected.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SeedBook")]
pub struct Book {
    /// The identifier of the book, unique within the store.
    pub id: i32,
    /// The title of the book.
    pub name: String,
    /// The number of pages.
    pub pages: i32,
    /// The genre of the book, if known.
    pub genre: Option<BookGenre>,
    /// The person who wrote the book, if known.
    pub author: Option<Author>,
    /// Reviews of the book, in the order they were written.
    pub reviews: Vec<Review>,
}

/// A book as written in a seed file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedBook {
    /// The current name of the identifier.
    id: Option<i32>,
    /// The name older seed files use for the identifier.
    #[serde(rename = "bookId")]
    book_id: Option<i32>,
    /// See [`Book::name`].
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    /// See [`Book::pages`].
    #[serde(deserialize_with = "null_as_default")]
    pages: i32,
    /// See [`Book::genre`].
    genre: Option<SeedGenre>,
    /// See [`Book::author`].
    author: Option<Author>,
    /// See [`Book::reviews`].
    #[serde(deserialize_with = "null_as_default")]
    reviews: Vec<Review>,
}

/// A genre as written in a seed file. Anything that is not a known genre is kept as
/// [`Unknown`](Self::Unknown) instead of failing the whole file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedGenre {
    /// One of the genres the schema knows.
    Known(BookGenre),
    /// Any other value.
    Unknown(IgnoredAny),
}

impl From<SeedBook> for Book {
    #[inline]
    fn from(value: SeedBook) -> Self {
        let genre = match value.genre {
            Some(SeedGenre::Known(genre)) => Some(genre),
            Some(SeedGenre::Unknown(_)) => {
                debug!(name = %value.name, "ignoring unrecognized genre");
                None
            },
            None => None,
        };

        Self {
            // `id` wins when a file carries both spellings.
            id: value.id.or(value.book_id).unwrap_or_default(),
            name: value.name,
            pages: value.pages,
            genre,
            author: value.author,
            reviews: value.reviews,
        }
    }
}

/// Deserialize a value, treating `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The genre of a book.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
// Seed files spell genres in lowercase, GraphQL clients in uppercase. Accept both.
#[serde(rename_all = "lowercase")]
pub enum BookGenre {
    /// Horror.
    #[serde(alias = "HORROR")]
    Horror,
    /// Fantasy.
    #[serde(alias = "FANTASY")]
    Fantasy,
    /// Drama.
    #[serde(alias = "DRAMA")]
    Drama,
    /// Mystery.
    #[serde(alias = "MYSTERY")]
    Mystery,
}

/// The author of a book.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// The identifier of the author.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    /// The name of the author.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Someone who has reviewed a book.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviewer {
    /// The identifier of the reviewer.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    /// The name of the reviewer.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single review of a book.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// The identifier of the review.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    /// The text of the review.
    #[serde(deserialize_with = "null_as_default")]
    pub review: String,
    /// The rating given by the reviewer.
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
    /// The person who wrote the review.
    #[serde(deserialize_with = "null_as_default")]
    pub reviewer: Reviewer,
}

// --- Needed for mutations ---
/// The arguments needed to create a book. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBook {
    /// The title of the book.
    pub name: String,
    /// The number of pages.
    pub pages: i32,
}

/// A partial update of a book. Fields left as [`None`] are not touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookPatch {
    /// The new title, if it should change.
    pub name: Option<String>,
    /// The new number of pages, if it should change.
    pub pages: Option<i32>,
}

impl BookPatch {
    /// Overwrite the fields of `book` that are present in this patch.
    #[inline]
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(name) = &self.name {
            book.name.clone_from(name);
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
    }

    /// Whether applying this patch would change nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.pages.is_none()
    }
}

impl From<NewBook> for Book {
    #[inline]
    fn from(value: NewBook) -> Self {
        Self {
            name: value.name,
            pages: value.pages,
            ..Self::default()
        }
    }
}
