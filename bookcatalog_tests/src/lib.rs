
#[cfg(all(test, feature = "load_tests"))]
mod load_test;

#[cfg(all(test, any(feature = "system_tests", feature = "load_tests")))]
fn bookcatalog_url() -> String {
    std::env::var("BOOKCATALOG_URL").unwrap_or("http://127.0.0.1:8080".to_string())
}
