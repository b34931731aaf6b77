use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

pub type BookId = i32;

pub const DEFAULT_LIST_LIMIT: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
/// Details of the book, all of them are required when a book is created
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub price: f64,
}

impl BookDetails {
    /// Overwrites only the fields present in the patch
    pub fn apply(&mut self, patch: BookDetailsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(published_year) = patch.published_year {
            self.published_year = published_year;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
/// Book as stored in the catalog, together with its id
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub price: f64,
}

impl Book {
    pub fn new(id: BookId, details: BookDetails) -> Self {
        Self {
            id,
            title: details.title,
            author: details.author,
            published_year: details.published_year,
            price: details.price,
        }
    }

    pub fn details(&self) -> BookDetails {
        BookDetails {
            title: self.title.clone(),
            author: self.author.clone(),
            published_year: self.published_year,
            price: self.price,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
/// Struct representing a patch to book details. Allows to specify only a few fields and patch the current details.
/// A field sent as `null` is treated the same as a missing one.
pub struct BookDetailsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
pub struct ListBooksQuery {
    /// Number of books to skip, 0 by default
    pub skip: Option<u32>,
    /// Maximum number of books returned, 100 by default
    pub limit: Option<u32>,
}

impl ListBooksQuery {
    pub fn skip(&self) -> u32 {
        self.skip.unwrap_or_default()
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
pub struct SearchBooksQuery {
    /// Substring looked up in title and author
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod api_tests {
    use crate::api::{BookDetails, BookDetailsPatch, ListBooksQuery};

    fn dune() -> BookDetails {
        BookDetails {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published_year: 1965,
            price: 9.99,
        }
    }

    #[test]
    fn patch_changes_only_given_fields() {
        let mut details = dune();
        details.apply(BookDetailsPatch {
            price: Some(12.5),
            ..BookDetailsPatch::default()
        });
        assert_eq!(
            details,
            BookDetails {
                price: 12.5,
                ..dune()
            }
        );

        let mut details = dune();
        details.apply(BookDetailsPatch::default());
        assert_eq!(details, dune());
    }

    #[test]
    fn patch_null_is_treated_as_missing() {
        let patch: BookDetailsPatch =
            serde_json::from_str(r#"{"title": null, "author": "Frank Herbert"}"#)
                .expect("Failed to parse patch");
        assert_eq!(
            patch,
            BookDetailsPatch {
                author: Some("Frank Herbert".to_string()),
                ..BookDetailsPatch::default()
            }
        );
        // None fields are not sent at all
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"author":"Frank Herbert"}"#
        );
    }

    #[test]
    fn details_require_all_fields() {
        let missing_price =
            serde_json::from_str::<BookDetails>(r#"{"title":"Dune","author":"Herbert","published_year":1965}"#);
        assert!(missing_price.is_err());
    }

    #[test]
    fn list_query_defaults() {
        let query = ListBooksQuery::default();
        assert_eq!(query.skip(), 0);
        assert_eq!(query.limit(), 100);
    }
}
