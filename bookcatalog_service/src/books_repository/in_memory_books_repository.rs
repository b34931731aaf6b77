use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::api::{Book, BookDetails, BookId};
use crate::books_repository::{BookRepository, BookRepositoryError, BookSession};

type BooksTable = parking_lot::RwLock<BTreeMap<BookId, BookDetails>>;

pub struct InMemoryBookRepository {
    book_sequence_generator: Arc<AtomicI32>,
    books: Arc<BooksTable>,
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self {
            book_sequence_generator: Arc::new(AtomicI32::new(1)),
            books: Default::default(),
        }
    }
}

#[async_trait::async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn session(&self) -> Result<Box<dyn BookSession>, BookRepositoryError> {
        Ok(Box::new(InMemoryBookSession {
            book_sequence_generator: self.book_sequence_generator.clone(),
            books: self.books.clone(),
        }))
    }
}

struct InMemoryBookSession {
    book_sequence_generator: Arc<AtomicI32>,
    books: Arc<BooksTable>,
}

#[async_trait::async_trait]
impl BookSession for InMemoryBookSession {
    async fn insert_book(&self, details: BookDetails) -> Result<Book, BookRepositoryError> {
        let id = self.book_sequence_generator.fetch_add(1, Ordering::Relaxed);
        self.books.write().insert(id, details.clone());
        Ok(Book::new(id, details))
    }

    async fn find_book(&self, book_id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        Ok(self
            .books
            .read()
            .get(&book_id)
            .map(|details| Book::new(book_id, details.clone())))
    }

    async fn list_books(&self, skip: u32, limit: u32) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self
            .books
            .read()
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|(&book_id, details)| Book::new(book_id, details.clone()))
            .collect())
    }

    async fn replace_book(&self, book: Book) -> Result<Book, BookRepositoryError> {
        let mut locked_books = self.books.write();
        let stored = locked_books
            .get_mut(&book.id)
            .ok_or(BookRepositoryError::NotFound(book.id))?;
        *stored = book.details();
        Ok(book)
    }

    async fn remove_book(&self, book_id: BookId) -> Result<bool, BookRepositoryError> {
        Ok(self.books.write().remove(&book_id).is_some())
    }

    async fn search_books(&self, keyword: &str) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self
            .books
            .read()
            .iter()
            .filter(|(_, details)| details.title.contains(keyword) || details.author.contains(keyword))
            .map(|(&book_id, details)| Book::new(book_id, details.clone()))
            .collect())
    }
}
