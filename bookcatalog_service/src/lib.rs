pub mod api;

#[cfg(any(feature = "client", test))]
pub mod client;

#[cfg(any(feature = "server", test))]
pub mod app_config;
#[cfg(any(feature = "server", test))]
pub mod book_service;
#[cfg(any(feature = "server", test))]
pub mod books_repository;
#[cfg(any(feature = "server", test))]
mod handlers;
#[cfg(any(feature = "server", test))]
pub mod settings;
#[cfg(any(feature = "server", test))]
pub mod telemetry;
