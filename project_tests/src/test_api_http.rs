//! # `api_http` Client Integration Tests
//!
//! This runner exercises `lib_common::retrieve::api_http::ApiClient` against
//! `httpbin.org`, a public, well-behaved endpoint. It verifies URL joining,
//! custom header injection, non-throwing status handling, and the decode
//! branch of the fetch error taxonomy.
//!
//! Run manually; it requires outbound network access.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use lib_common::retrieve::api_http::{ApiClient, FetchError};

/// A utility struct to deserialize responses from `httpbin.org`.
/// `httpbin.org` echoes back parts of the request (like headers and URL),
/// which is useful for verifying the `ApiClient`'s behavior.
#[derive(Debug, Deserialize, Serialize)]
struct HttpbinResponse {
    /// Echoed headers sent with the request.
    headers: Option<std::collections::HashMap<String, String>>,
    /// The URL that was hit, as seen by httpbin.org.
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = "https://httpbin.org/";
    let api = ApiClient::new(base_url);

    println!("--- Starting API Module Tests ---");

    // --- TEST 1: URL Joining & Success Response ---
    println!("\n[Test 1] Testing URL Joining & Success...");
    let res1 = api.get::<HttpbinResponse>("get", None).await?;

    assert!(res1.success);
    println!("OK URL Joined: {:?}", res1.data.as_ref().unwrap().url);

    // --- TEST 2: Custom Headers ---
    println!("\n[Test 2] Testing Custom Headers...");
    let mut headers = HeaderMap::new();
    headers.insert("X-Custom-Client", HeaderValue::from_static("Rust-Test-Suite"));

    let res2 = api.get::<HttpbinResponse>("headers", Some(headers)).await?;

    let echoed_headers = res2.data.unwrap().headers.unwrap();
    println!("OK Custom Header: {}", echoed_headers.get("X-Custom-Client").unwrap());

    // --- TEST 3: Failures (Non-throwing 404) ---
    println!("\n[Test 3] Testing 404 handling (should return Ok with success: false)...");
    let res3 = api.get::<serde_json::Value>("status/404", None).await?;

    assert!(!res3.success);
    assert_eq!(res3.status, 404);
    println!("OK Non-throwing failure handled. Status: {}", res3.status);

    // --- TEST 4: Decode failure on a non-JSON body ---
    println!("\n[Test 4] Testing decode classification on an HTML body...");
    match api.get::<serde_json::Value>("html", None).await {
        Err(FetchError::Decode(e)) => println!("OK Decode failure surfaced: {}", e),
        other => panic!("expected a decode failure, got {:?}", other.map(|r| r.status)),
    }

    println!("\n--- All Tests Passed Successfully ---");
    Ok(())
}
