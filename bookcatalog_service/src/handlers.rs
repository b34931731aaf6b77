use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{Error, HttpResponse, ResponseError};
use paperclip::actix::{
    api_v2_operation,
    web::{self},
};

use crate::api::{
    BookDetails, BookDetailsPatch, BookId, ErrorResponse, ListBooksQuery, SearchBooksQuery,
};
use crate::book_service::BookService;
use crate::books_repository::{BookRepository, BookRepositoryError};

fn book_not_found(book_id: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        detail: format!("Book {} not found", book_id),
    })
}

impl ResponseError for BookRepositoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookRepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            BookRepositoryError::NotFound(book_id) => book_not_found(*book_id),
            err => {
                tracing::error!("Books store failure {}", err);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

/// Ids outside of the `SERIAL` range are valid numbers that no book can have
fn stored_book_id(book_id: i64) -> Option<BookId> {
    BookId::try_from(book_id).ok()
}

async fn book_service(
    books_repository: &Data<Arc<dyn BookRepository>>,
) -> Result<BookService, BookRepositoryError> {
    BookService::start(books_repository.get_ref().as_ref()).await
}

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

#[api_v2_operation]
pub async fn get_all_books(
    books_repository: Data<Arc<dyn BookRepository>>,
    query: web::Query<ListBooksQuery>,
) -> Result<HttpResponse, Error> {
    let book_service = book_service(&books_repository).await?;
    Ok(
        match book_service.list_books(query.skip(), query.limit()).await {
            Ok(books) => HttpResponse::Ok().json(books),
            Err(err) => {
                tracing::error!("Get all books failed {}", err);
                HttpResponse::InternalServerError().finish()
            }
        },
    )
}

#[api_v2_operation]
pub async fn add_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    details: web::Json<BookDetails>,
) -> Result<HttpResponse, Error> {
    let book_service = book_service(&books_repository).await?;
    Ok(
        match book_service.create_book(details.into_inner()).await {
            Ok(book) => HttpResponse::Created().json(book),
            Err(err) => {
                tracing::error!("Add book failed {}", err);
                HttpResponse::InternalServerError().finish()
            }
        },
    )
}

#[api_v2_operation]
pub async fn update_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<i64>,
    patch: web::Json<BookDetailsPatch>,
) -> Result<HttpResponse, Error> {
    let book_id = book_id.into_inner();
    let Some(book_id) = stored_book_id(book_id) else {
        return Ok(book_not_found(book_id));
    };
    let book_service = book_service(&books_repository).await?;
    Ok(
        match book_service.update_book(book_id, patch.into_inner()).await {
            Ok(Some(book)) => HttpResponse::Ok().json(book),
            Ok(None) => book_not_found(book_id),
            Err(err) => {
                tracing::error!("Update book failed {}", err);
                HttpResponse::InternalServerError().finish()
            }
        },
    )
}

#[api_v2_operation]
pub async fn get_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let book_id = book_id.into_inner();
    let Some(book_id) = stored_book_id(book_id) else {
        return Ok(book_not_found(book_id));
    };
    let book_service = book_service(&books_repository).await?;
    Ok(match book_service.get_book_by_id(book_id).await {
        Ok(Some(book)) => HttpResponse::Ok().json(book),
        Ok(None) => book_not_found(book_id),
        Err(err) => {
            tracing::error!("Get book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}

#[api_v2_operation]
pub async fn delete_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let book_id = book_id.into_inner();
    let Some(book_id) = stored_book_id(book_id) else {
        return Ok(book_not_found(book_id));
    };
    let book_service = book_service(&books_repository).await?;
    Ok(match book_service.delete_book(book_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => book_not_found(book_id),
        Err(err) => {
            tracing::error!("Delete book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}

#[api_v2_operation]
pub async fn search_books(
    books_repository: Data<Arc<dyn BookRepository>>,
    query: web::Query<SearchBooksQuery>,
) -> Result<HttpResponse, Error> {
    let book_service = book_service(&books_repository).await?;
    Ok(match book_service.search_books(&query.keyword).await {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => {
            tracing::error!("Search books failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}
