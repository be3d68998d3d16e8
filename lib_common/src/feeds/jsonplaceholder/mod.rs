//! # JSONPlaceholder API Integration Module
//!
//! This module provides a dedicated interface for the JSONPlaceholder test
//! API, a fixed public endpoint serving fixture data. It encapsulates the
//! client logic and data structures required to fetch and process the user
//! directory it exposes.
//!
//! ## Contained Modules:
//!
//! - **`apicall`**: Implements the low-level HTTP client for the
//!   JSONPlaceholder API, handling request dispatch and status handling.
//!
//! - **`users`**: Defines the user record data model, the fetch pipeline,
//!   and the pure name-extraction transform over fetched collections.

#![doc(html_logo_url = "https://example.com/logo.png")] // Placeholder
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Client for making HTTP requests to the JSONPlaceholder API.
pub mod apicall;
/// Data models, fetch pipeline, and name extraction for the user directory.
pub mod users;
