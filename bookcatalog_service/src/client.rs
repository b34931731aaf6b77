use anyhow::{bail, Context};
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::api::{Book, BookDetails, BookDetailsPatch, BookId, ErrorResponse};

pub struct BookCatalogClient {
    url: String,
    client: ClientWithMiddleware,
}

async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    response
        .json::<ErrorResponse>()
        .await
        .map(|error| error.detail)
        .unwrap_or_else(|_| status.to_string())
}

impl BookCatalogClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Calls POST /books/ endpoint
    /// Returns the created book together with its id
    pub async fn add_book(&self, book_details: BookDetails) -> anyhow::Result<Book> {
        let response = self
            .client
            .post(format!("{}/books/", self.url))
            .json(&book_details)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            bail!("Failed to add book {}", error_detail(response).await)
        }
        Ok(response.json().await?)
    }

    /// Calls GET /books/{book_id} endpoint
    /// Returns None if the book is not in the catalog
    pub async fn get_book(&self, book_id: BookId) -> anyhow::Result<Option<Book>> {
        let response = self
            .client
            .get(format!("{}/books/{}", self.url, book_id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            bail!("Failed to get book {}", error_detail(response).await)
        }
    }

    /// Calls GET /books/ endpoint
    pub async fn list_books(&self, skip: Option<u32>, limit: Option<u32>) -> anyhow::Result<Vec<Book>> {
        let mut query = vec![];
        if let Some(skip) = skip {
            query.push(("skip", skip));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit));
        }
        let response = self
            .client
            .get(format!("{}/books/", self.url))
            .query(&query)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            bail!("Failed to list books {}", error_detail(response).await)
        }
    }

    /// Calls PUT /books/{book_id} endpoint
    /// Returns None if the book is not in the catalog
    pub async fn update_book(
        &self,
        book_id: BookId,
        patch: BookDetailsPatch,
    ) -> anyhow::Result<Option<Book>> {
        let response = self
            .client
            .put(format!("{}/books/{}", self.url, book_id))
            .json(&patch)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            bail!("Failed to update book {}", error_detail(response).await)
        }
    }

    /// Calls DELETE /books/{book_id} endpoint
    /// Returns false if there was no such book
    pub async fn delete_book(&self, book_id: BookId) -> anyhow::Result<bool> {
        let response = self
            .client
            .delete(format!("{}/books/{}", self.url, book_id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(false)
        } else if response.status().is_success() {
            Ok(true)
        } else {
            bail!("Failed to delete book {}", error_detail(response).await)
        }
    }

    /// Calls GET /books/search/ endpoint
    pub async fn search_books(&self, keyword: &str) -> anyhow::Result<Vec<Book>> {
        let response = self
            .client
            .get(format!("{}/books/search/", self.url))
            .query(&[("keyword", keyword)])
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            bail!("Failed to search books {}", error_detail(response).await)
        }
    }
}
