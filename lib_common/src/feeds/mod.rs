//! # Data Feeds Module
//!
//! This module groups together all logic and client implementations related
//! to specific remote JSON data providers. Its purpose is to abstract the
//! details of interacting with external services, providing decoded records
//! or derived collections to the rest of the system.
//!
//! ## Contained Modules:
//!
//! - **`jsonplaceholder`**: Contains the client implementation and data
//!   models for fetching the user directory served by the JSONPlaceholder
//!   test API, along with the name-extraction transform over it.
//!
//! By centralizing provider-specific clients, this module ensures a clean
//! separation of concerns and facilitates easier integration of new data
//! providers in the future.

#![doc(html_logo_url = "https://example.com/logo.png")] // Placeholder
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Client for the JSONPlaceholder user directory API.
pub mod jsonplaceholder;
