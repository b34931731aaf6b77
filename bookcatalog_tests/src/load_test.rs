use rand::prelude::SliceRandom;
use rand::{thread_rng, Rng};

use bookcatalog_service::api::{BookDetails, BookDetailsPatch};
use bookcatalog_service::client::BookCatalogClient;

use crate::bookcatalog_url;

#[tokio::test]
async fn generate_lots_of_books_and_query_them() {
    const NO_OF_BOOKS_TO_GENERATE: usize = 200;
    const NO_OF_AUTHORS_TO_GENERATE: usize = 30;
    const NO_OF_UPDATES: usize = 100;
    const NO_OF_SEARCHES: usize = 50;

    let mut rng = thread_rng();
    let client = BookCatalogClient::new(&bookcatalog_url()).expect("Failed to create client");

    let authors = generate_authors(&mut rng, NO_OF_AUTHORS_TO_GENERATE);
    let books = generate_books(&mut rng, NO_OF_BOOKS_TO_GENERATE, &authors);

    let mut book_ids = vec![];
    for book in books {
        let book = client.add_book(book).await.expect("Failed to add book");
        println!("Added book {}", book.id);
        book_ids.push(book.id);
    }

    for _ in 0..NO_OF_UPDATES {
        let book_id = *book_ids.choose(&mut rng).unwrap();
        let price = rng.gen_range(1.0..100.0);
        let book = client
            .update_book(
                book_id,
                BookDetailsPatch {
                    price: Some(price),
                    ..BookDetailsPatch::default()
                },
            )
            .await
            .expect("Failed to update book")
            .expect("Book not found");
        assert_eq!(book.price, price);
        println!("Updated price of book {} to {}", book_id, price);
    }

    for _ in 0..NO_OF_SEARCHES {
        let author = authors.choose(&mut rng).unwrap();
        let found = client
            .search_books(author)
            .await
            .expect("Failed to search books");
        assert!(found.iter().all(|book| book.author.contains(author.as_str())
            || book.title.contains(author.as_str())));
        println!("Found {} books of {}", found.len(), author);
    }

    let mut skip = 0;
    loop {
        let page = client
            .list_books(Some(skip), Some(50))
            .await
            .expect("Failed to list books");
        if page.is_empty() {
            break;
        }
        skip += page.len() as u32;
    }
    assert!(skip as usize >= NO_OF_BOOKS_TO_GENERATE);
}

fn generate_authors(rng: &mut impl Rng, no_of_authors: usize) -> Vec<String> {
    (0..no_of_authors)
        .map(|no| {
            format!(
                "{} {} {}",
                FIRST_NAMES.choose(rng).unwrap(),
                LAST_NAMES.choose(rng).unwrap(),
                no
            )
        })
        .collect()
}

fn generate_books(
    rng: &mut impl Rng,
    no_of_books_to_generate: usize,
    authors: &[String],
) -> Vec<BookDetails> {
    (0..no_of_books_to_generate)
        .map(|no| BookDetails {
            title: format!("A tale of number {} and {}", no, rng.gen_range(0..1000)),
            author: authors.choose(rng).unwrap().clone(),
            published_year: rng.gen_range(1800..2025),
            price: rng.gen_range(1.0..100.0),
        })
        .collect()
}

const FIRST_NAMES: [&str; 16] = [
    "Ursula", "Isaac", "Mary", "Arthur", "Octavia", "Philip", "Margaret", "Ray", "Virginia",
    "Frank", "Jane", "Leo", "Agatha", "Herman", "Toni", "Stanislaw",
];

const LAST_NAMES: [&str; 16] = [
    "Le Guin", "Asimov", "Shelley", "Clarke", "Butler", "Dick", "Atwood", "Bradbury", "Woolf",
    "Herbert", "Austen", "Tolstoy", "Christie", "Melville", "Morrison", "Lem",
];
