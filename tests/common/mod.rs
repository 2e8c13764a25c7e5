#![allow(dead_code)]

use memopass::{App, AppConfig, Backend};
use regex::Regex;
use std::path::Path;
use tokio::net::TcpListener;

/// Test config: tiny retry delays, no preload surprises.
pub fn test_config(backend: Backend) -> AppConfig {
    let mut config = AppConfig::default();
    config.source.backend = backend;
    config.retry.base_delay_ms = 1;
    config
}

/// Builds, prepares and serves the app on an ephemeral port.
pub async fn spawn_app(config: AppConfig) -> String {
    let app = App::build(config).expect("app builds");
    app.prepare().await.expect("word source prepares");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(app.serve(listener));
    format!("http://{}", addr)
}

pub fn write_words(dir: &Path, file: &str, prefix: &str, count: usize) {
    let words: Vec<String> = (0..count)
        .map(|i| format!("{}{}", prefix, "abcdefghijklmnopqrstuvwxyz".chars().nth(i % 26).unwrap()))
        .collect();
    std::fs::write(dir.join(file), serde_json::to_vec(&words).unwrap()).unwrap();
}

pub fn password_pattern() -> Regex {
    let symbols: String = memopass::core::composer::DEFAULT_SYMBOLS
        .iter()
        .map(|s| regex::escape(s))
        .collect();
    Regex::new(&format!(r"^[A-Z][a-z]*[A-Z][a-z]*\d{{3}}[{}]{{1,3}}$", symbols)).unwrap()
}
