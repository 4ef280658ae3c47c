//! Book catalog and user directory
//!
//! The catalog starts from the mock dataset. The CLI keeps a working copy on
//! disk so borrows and edits carry over between invocations.

pub mod mock;
mod models;

pub use mock::{mock_books, mock_users};
pub use models::*;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::storage::write_atomic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(mock_books())
    }
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Load the working copy, seeding from the mock dataset when none exists yet
    pub fn load_or_seed(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::new(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No catalog at {}, seeding", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, &serde_json::to_string_pretty(&self.books)?)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Member dashboard search: title, author or genre, narrowed by availability
    pub fn browse(&self, search: &str, availability: Availability) -> Vec<&Book> {
        let needle = search.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                let matches = book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book
                        .genre
                        .as_ref()
                        .is_some_and(|g| g.to_lowercase().contains(&needle));
                matches && availability.admits(book)
            })
            .collect()
    }

    /// Admin search: title, author or ISBN
    pub fn search_admin(&self, search: &str) -> Vec<&Book> {
        if search.is_empty() {
            return self.books.iter().collect();
        }
        let needle = search.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book
                        .isbn
                        .as_ref()
                        .is_some_and(|i| i.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let available = self.books.iter().filter(|b| b.available).count();
        CatalogStats {
            total: self.books.len(),
            available,
            borrowed: self.books.len() - available,
        }
    }

    /// Borrow a copy. The book is marked unavailable and its quantity drops by one.
    pub fn borrow(&mut self, id: u64) -> Result<&Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;

        if !book.available {
            return Err(Error::BookUnavailable(id));
        }

        book.available = false;
        book.quantity = Some(book.quantity.unwrap_or(1).saturating_sub(1));
        tracing::info!("Borrowed book {} ({})", book.id, book.title);
        Ok(&*book)
    }

    pub fn add(&mut self, draft: BookDraft) -> Result<&Book> {
        validate(&draft)?;
        let id = self
            .books
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| Error::InvalidBook("no book ids left".to_string()))?;
        self.books.push(build(id, draft));
        tracing::info!("Added book {}", id);
        Ok(&self.books[self.books.len() - 1])
    }

    pub fn update(&mut self, id: u64, draft: BookDraft) -> Result<&Book> {
        validate(&draft)?;
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;
        *book = build(id, draft);
        tracing::info!("Updated book {}", id);
        Ok(&*book)
    }

    pub fn delete(&mut self, id: u64) -> Result<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;
        tracing::info!("Deleted book {}", id);
        Ok(self.books.remove(index))
    }
}

fn validate(draft: &BookDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(Error::InvalidBook("title is required".to_string()));
    }
    if draft.author.trim().is_empty() {
        return Err(Error::InvalidBook("author is required".to_string()));
    }
    Ok(())
}

// Blank optional text fields are stored as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn build(id: u64, draft: BookDraft) -> Book {
    Book {
        id,
        title: draft.title.trim().to_string(),
        author: draft.author.trim().to_string(),
        isbn: non_blank(draft.isbn),
        genre: non_blank(draft.genre),
        available: draft.available,
        quantity: draft.quantity,
        published_year: draft.published_year,
        description: non_blank(draft.description),
    }
}

/// Number of administrators in a user list
pub fn admin_count(users: &[LibraryUser]) -> usize {
    users
        .iter()
        .filter(|u| u.role == crate::auth::Role::Admin)
        .count()
}
