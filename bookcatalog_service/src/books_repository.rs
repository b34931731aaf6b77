pub use in_memory_books_repository::InMemoryBookRepository;
pub use postgres_books_repository::{PostgresBooksRepository, PostgresBooksRepositoryConfig};

use crate::api::{Book, BookDetails, BookId};

mod in_memory_books_repository;
mod postgres_books_repository;

#[derive(thiserror::Error, Debug)]
pub enum BookRepositoryError {
    #[error("Book {0} not found")]
    NotFound(BookId),

    #[error("DatabaseFailure failure {0}")]
    DatabaseFailure(#[from] tokio_postgres::Error),

    #[error("Other error {0}")]
    Other(String),
}

/// Source of sessions, one session is acquired for every unit of work
#[async_trait::async_trait]
pub trait BookRepository: Send + Sync {
    /// Opens a new session, it is released when dropped
    async fn session(&self) -> Result<Box<dyn BookSession>, BookRepositoryError>;
}

/// Single-statement operations on the books table, each one commits on its own
#[async_trait::async_trait]
pub trait BookSession: Send + Sync {
    /// Inserts a book, returns it with an id assigned by the store
    async fn insert_book(&self, details: BookDetails) -> Result<Book, BookRepositoryError>;
    /// Looks up a book by its id
    async fn find_book(&self, book_id: BookId) -> Result<Option<Book>, BookRepositoryError>;
    /// Lists books in store order (ascending id), skipping `skip` and returning at most `limit`
    async fn list_books(&self, skip: u32, limit: u32) -> Result<Vec<Book>, BookRepositoryError>;
    /// Overwrites all fields of an existing book, returns the stored row
    async fn replace_book(&self, book: Book) -> Result<Book, BookRepositoryError>;
    /// Removes a book, returns false if it was not there
    async fn remove_book(&self, book_id: BookId) -> Result<bool, BookRepositoryError>;
    /// Books whose title or author contains keyword (case sensitive)
    async fn search_books(&self, keyword: &str) -> Result<Vec<Book>, BookRepositoryError>;
}
