use chrono::Utc;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

use crate::extractor::{ContentExtractor, ExtractError, HttpContentExtractor, extract};
use crate::fetcher::types::{Charset, PageResponse};

const BLOG_POST: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>How to Build Better Software - Tech Blog</title>
    <style>body { font-family: sans-serif; }</style>
    <script>window.analytics = {};</script>
</head>
<body>
    <header><nav><a href="/">Home</a> <a href="/about">About</a></nav></header>
    <div class="post-content">
        <h1>How to Build Better Software</h1>
        <p>Building better software starts with   understanding the problem.</p>


        <h2>Key Principles</h2>
        <ul>
            <li>Write small functions.</li>
            <li>Test the behaviour, not the implementation.</li>
        </ul>
    </div>
    <footer>Subscribe to our newsletter</footer>
</body>
</html>"#;

#[test]
fn test_extract_blog_post() {
    let response = create_test_response(BLOG_POST.to_string(), "https://blog.example.com/post");
    let content = extract(&response);

    assert_eq!(content.source_url.as_str(), "https://blog.example.com/post");
    assert!(content.text.starts_with("How to Build Better Software"));
    assert!(content.text.contains("Building better software starts with understanding"));
    assert!(content.text.contains("Key Principles"));
    assert!(!content.text.contains("Home"));
    assert!(!content.text.contains("newsletter"));
    assert!(!content.text.contains("analytics"));
    assert_eq!(content.language, Some("en".to_string()));
}

#[test]
fn test_output_has_no_whitespace_runs() {
    let response = create_test_response(BLOG_POST.to_string(), "https://blog.example.com/post");
    let content = extract(&response);

    assert_eq!(content.text, content.text.trim());
    let chars: Vec<char> = content.text.chars().collect();
    assert!(
        chars
            .windows(2)
            .all(|pair| !(pair[0].is_whitespace() && pair[1].is_whitespace()))
    );
}

#[test]
fn test_malformed_html() {
    let html =
        "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content".to_string();

    let response = create_test_response(html, "https://example.com/broken");
    let content = extract(&response);

    assert_eq!(content.text, "Unclosed tagsMore content");
    assert_eq!(content.language, None);
}

#[tokio::test]
async fn test_empty_url_is_rejected_before_fetching() {
    let extractor = HttpContentExtractor::new();

    let result = extractor.extract("   ").await;

    match result {
        Err(ExtractError::Validation(message)) => assert_eq!(message, "URL is required"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/[a-z]*"
        ) {
            let response = create_test_response(html, &url);
            let _ = extract(&response);
        }

        #[test]
        fn test_extract_collapses_whitespace(
            words in proptest::collection::vec("[a-zA-Z.]{1,8}", 0..20),
            gaps in proptest::collection::vec("[ \t\n\r]{1,4}", 20),
        ) {
            let mut body = String::from("<article>");
            for (word, gap) in words.iter().zip(gaps.iter()) {
                body.push_str(gap);
                body.push_str(word);
            }
            body.push_str("</article>");

            let response = create_test_response(body, "https://example.com");
            let text = extract(&response).text;

            prop_assert_eq!(text.trim(), text.as_str());
            let chars: Vec<char> = text.chars().collect();
            prop_assert!(chars.windows(2).all(|p| !(p[0].is_whitespace() && p[1].is_whitespace())));
        }
    }
}
