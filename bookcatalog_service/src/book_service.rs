use crate::api::{Book, BookDetails, BookDetailsPatch, BookId};
use crate::books_repository::{BookRepository, BookRepositoryError, BookSession};

/// Catalog operations bound to one store session.
///
/// The session is released together with the service, so a service should live
/// no longer than the request it was created for.
pub struct BookService {
    session: Box<dyn BookSession>,
}

impl BookService {
    /// Acquires a fresh session from the repository
    pub async fn start(books_repository: &dyn BookRepository) -> Result<Self, BookRepositoryError> {
        Ok(Self {
            session: books_repository.session().await?,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_book(&self, details: BookDetails) -> Result<Book, BookRepositoryError> {
        let book = self.session.insert_book(details).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_book_by_id(&self, book_id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        self.session.find_book(book_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_books(&self, skip: u32, limit: u32) -> Result<Vec<Book>, BookRepositoryError> {
        self.session.list_books(skip, limit).await
    }

    /// Returns None when there is no book with given id
    #[tracing::instrument(skip(self))]
    pub async fn update_book(
        &self,
        book_id: BookId,
        patch: BookDetailsPatch,
    ) -> Result<Option<Book>, BookRepositoryError> {
        let Some(book) = self.session.find_book(book_id).await? else {
            return Ok(None);
        };

        let mut details = book.details();
        details.apply(patch);

        match self.session.replace_book(Book::new(book_id, details)).await {
            Ok(book) => Ok(Some(book)),
            // removed between lookup and write
            Err(BookRepositoryError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Returns false when there is no book with given id
    #[tracing::instrument(skip(self))]
    pub async fn delete_book(&self, book_id: BookId) -> Result<bool, BookRepositoryError> {
        if self.session.find_book(book_id).await?.is_none() {
            return Ok(false);
        }
        let removed = self.session.remove_book(book_id).await?;
        if removed {
            tracing::info!("Book deleted");
        }
        Ok(removed)
    }

    #[tracing::instrument(skip(self))]
    pub async fn search_books(&self, keyword: &str) -> Result<Vec<Book>, BookRepositoryError> {
        self.session.search_books(keyword).await
    }
}
