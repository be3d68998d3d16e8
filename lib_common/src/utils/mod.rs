//! # Utilities Module
//!
//! This module serves as a collection point for general-purpose utility
//! functions and helper modules that are widely applicable across the
//! `lib_common` crate and the broader `userfeed` project.
//!
//! ## Contained Modules:
//!
//! - **`misc`**: A submodule for miscellaneous functions, including system
//!   information retrieval (`sys_info`) and general helper functions (`utils`).

#![doc(html_logo_url = "https://example.com/logo.png")] // Placeholder
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Miscellaneous utility functions, including system information and general helpers.
pub mod misc;
