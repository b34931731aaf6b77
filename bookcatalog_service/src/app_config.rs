use actix_web::error::InternalError;
use actix_web::HttpResponse;
use paperclip::actix::web;

use crate::api::ErrorResponse;
use crate::handlers;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(
            web::scope("/books")
                // both /books and /books/
                .service(
                    web::resource("")
                        .route(web::get().to(handlers::get_all_books))
                        .route(web::post().to(handlers::add_book)),
                )
                .service(
                    web::resource("/")
                        .route(web::get().to(handlers::get_all_books))
                        .route(web::post().to(handlers::add_book)),
                )
                .service(web::resource("/search").route(web::get().to(handlers::search_books)))
                .service(web::resource("/search/").route(web::get().to(handlers::search_books)))
                .service(
                    web::resource("/{book_id}")
                        .route(web::get().to(handlers::get_book))
                        .route(web::put().to(handlers::update_book))
                        .route(web::delete().to(handlers::delete_book)),
                ),
        );
}

fn validation_failed<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::UnprocessableEntity().json(ErrorResponse {
        detail: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

/// Malformed or incomplete JSON bodies are answered with 422
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| validation_failed(err))
}

pub fn query_config() -> actix_web::web::QueryConfig {
    actix_web::web::QueryConfig::default().error_handler(|err, _req| validation_failed(err))
}

pub fn path_config() -> actix_web::web::PathConfig {
    actix_web::web::PathConfig::default().error_handler(|err, _req| validation_failed(err))
}
