//! # lib_common
//!
//! Shared library for the `userfeed` pipeline, organized as folder-based,
//! feature-gated modules so binaries only compile the parts they use.
//!
//! ## Modules:
//!
//! - **`feeds`**: Provider-specific JSON data feeds (JSONPlaceholder user directory).
//! - **`loggers`**: Structured local logging with TTY coloring and file rotation.
//! - **`retrieve`**: Generic asynchronous HTTP retrieval with a closed error taxonomy.
//! - **`utils`**: Process/system information and timestamp helpers.

/// Provider-specific JSON data feeds and their transforms.
#[cfg(feature = "feeds")]
pub mod feeds;

/// Structured local logging with TTY coloring and file rotation.
#[cfg(feature = "loggers")]
pub mod loggers;

/// Generic HTTP retrieval clients and the fetch error taxonomy.
#[cfg(feature = "retrieve")]
pub mod retrieve;

/// Miscellaneous helpers shared across modules.
#[cfg(feature = "utils")]
pub mod utils;
