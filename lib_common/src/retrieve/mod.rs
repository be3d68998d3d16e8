//! # Data Retrieval Module
//!
//! This module provides a centralized location for generic data retrieval
//! clients and utilities, primarily focused on HTTP-based interactions.
//!
//! ## Purpose:
//! The goal of the `retrieve` module is to offer a consistent way to fetch
//! data from external services, encapsulating common concerns such as HTTP
//! request building, response decoding, and error classification. This
//! prevents duplication of networking logic across different feed clients.
//!
//! ## Contained Modules:
//!
//! - **`api_http`**: A generic HTTP `ApiClient` built on `reqwest`, exposing
//!   non-throwing status handling and the closed `FetchError` taxonomy that
//!   distinguishes transport failures from decode failures. It serves as the
//!   foundation for provider-specific feed clients.
//!
//! By using the components within this module, other parts of the system can
//! focus on data parsing and business logic, delegating the details of
//! network communication to this layer.

#![doc(html_logo_url = "https://example.com/logo.png")] // Placeholder
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Generic HTTP API client with a closed fetch error taxonomy.
pub mod api_http;
