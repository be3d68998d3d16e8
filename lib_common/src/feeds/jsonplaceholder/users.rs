//! # JSONPlaceholder User Directory Model and Pipeline
//!
//! This module defines the data structures and client logic for fetching the
//! user directory served by the JSONPlaceholder test API and deriving name
//! collections from it.
//!
//! ## Key Features:
//! - **Tolerant Data Modeling**: Uses `serde` to map the incoming JSON
//!   payload into Rust structs while deliberately tolerating absent fields.
//!   Records are opaque beyond a handful of well-known scalars; everything
//!   else is retained in a flattened map.
//! - **Centralized Fetching**: Utilizes the `ApiCallPlaceholder` client to
//!   handle the underlying HTTP requests, keeping the concerns separated.
//! - **Pure Transform**: `extract_names` derives a name collection from a
//!   fetched user collection in a single order-preserving pass, with no
//!   error conditions and no hidden state.

#![doc(html_logo_url = "https://example.com/logo.png")] // Placeholder
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

use crate::feeds::jsonplaceholder::apicall::ApiCallPlaceholder;
use crate::loggers::loggerlocal::LoggerLocal;
use crate::retrieve::api_http::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::sync::Arc;

/// A single record from the user directory.
///
/// The remote schema is not validated: every well-known field is optional,
/// and a record missing its `name` deserializes successfully with
/// `name: None`. Fields outside the well-known set are preserved opaquely
/// in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserRecord {
    /// Numeric record identifier assigned by the server.
    pub id: Option<i64>,
    /// Display name of the user; absent names pass through silently.
    pub name: Option<String>,
    /// Account name of the user.
    pub username: Option<String>,
    /// Contact email address of the user.
    pub email: Option<String>,
    /// All remaining fields of the record, retained as raw JSON.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ordered sequence of user records, order as returned by the server.
pub type UserCollection = Vec<UserRecord>;

/// An ordered sequence of name fields derived from a `UserCollection`,
/// same length and order as the source collection. A record without a
/// `name` contributes `None` at its position.
pub type NameCollection = Vec<Option<String>>;

/// Derives the name collection from a user collection.
///
/// Order-preserving and length-preserving: element `i` of the result is the
/// `name` field of element `i` of the input, or `None` when that field is
/// absent. The transform is pure; calling it twice on the same collection
/// yields identical results.
pub fn extract_names(users: &UserCollection) -> NameCollection {
    users.iter().map(|user| user.name.clone()).collect()
}

/// A client for fetching and decoding the user directory.
pub struct UsersFeed {
    /// An `Arc`'d `ApiCallPlaceholder` instance for making HTTP requests.
    api_call: Arc<ApiCallPlaceholder>,
    /// A shared logger for recording fetch and decode outcomes.
    logger: Arc<LoggerLocal>,
}

impl UsersFeed {
    /// Creates a new `UsersFeed` client instance.
    ///
    /// # Arguments
    /// * `api_call` - A shared `ApiCallPlaceholder` instance for network requests.
    /// * `logger` - A shared `LoggerLocal` for structured logging.
    pub fn new(api_call: Arc<ApiCallPlaceholder>, logger: Arc<LoggerLocal>) -> Self {
        Self { api_call, logger }
    }

    /// Fetches the full user directory.
    ///
    /// Issues exactly one GET against the `users` path, suspending the
    /// calling task while awaiting the response and again while the body is
    /// decoded. The raw JSON is then mapped onto `UserCollection`.
    ///
    /// # Errors
    /// Propagates the `FetchError` produced by the transport; a payload that
    /// is not a JSON array of objects is logged with the raw payload and
    /// surfaces as `FetchError::Decode`.
    pub async fn fetch_users(&self) -> Result<UserCollection, FetchError> {
        let raw_json = self.api_call.fetch_json("users").await?;

        match from_value::<UserCollection>(raw_json.clone()) {
            Ok(users) => {
                self.logger
                    .debug(&format!("Fetched {} user records", users.len()), None)
                    .await;
                Ok(users)
            }
            Err(e) => {
                let err_msg = format!("User directory decode failed: {}", e);
                self.logger
                    .error(&err_msg, Some(serde_json::json!({"raw": raw_json})))
                    .await;
                Err(FetchError::Decode(e))
            }
        }
    }

    /// Fetches a single user record by id from the `users/{id}` path.
    ///
    /// # Errors
    /// Same classification as `fetch_users`; an unknown id surfaces as
    /// `FetchError::Endpoint` with the server's 404 status.
    pub async fn fetch_user(&self, id: i64) -> Result<UserRecord, FetchError> {
        let path = format!("users/{}", id);
        let raw_json = self.api_call.fetch_json(&path).await?;

        match from_value::<UserRecord>(raw_json.clone()) {
            Ok(user) => {
                self.logger
                    .debug(&format!("Fetched user record {}", id), None)
                    .await;
                Ok(user)
            }
            Err(e) => {
                let err_msg = format!("User record decode failed: {}", e);
                self.logger
                    .error(&err_msg, Some(serde_json::json!({"raw": raw_json})))
                    .await;
                Err(FetchError::Decode(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture_two_users() -> Value {
        json!([
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": {
                    "street": "Kulas Light",
                    "city": "Gwenborough",
                    "geo": { "lat": "-37.3159", "lng": "81.1496" }
                },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": { "name": "Romaguera-Crona" }
            },
            {
                "id": 2,
                "name": "Ervin Howell",
                "username": "Antonette",
                "email": "Shanna@melissa.tv"
            }
        ])
    }

    #[test]
    fn decode_preserves_known_and_extra_fields() {
        let users: UserCollection = from_value(fixture_two_users()).expect("fixture decodes");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, Some(1));
        assert_eq!(users[0].name.as_deref(), Some("Leanne Graham"));
        assert_eq!(users[0].username.as_deref(), Some("Bret"));
        // Nested objects outside the well-known set land in `extra` untouched.
        assert_eq!(users[0].extra["address"]["city"], "Gwenborough");
        assert_eq!(users[0].extra["company"]["name"], "Romaguera-Crona");
        assert!(users[1].extra.is_empty());
    }

    #[test]
    fn extract_names_preserves_length_and_order() {
        let users: UserCollection = from_value(fixture_two_users()).expect("fixture decodes");
        let names = extract_names(&users);

        assert_eq!(names.len(), users.len());
        assert_eq!(
            names,
            vec![
                Some("Leanne Graham".to_string()),
                Some("Ervin Howell".to_string())
            ]
        );
    }

    #[test]
    fn extract_names_matches_source_positionally() {
        let users: UserCollection = from_value(fixture_two_users()).expect("fixture decodes");
        let names = extract_names(&users);

        for (i, user) in users.iter().enumerate() {
            assert_eq!(names[i], user.name);
        }
    }

    #[test]
    fn missing_name_passes_through_as_absent() {
        let users: UserCollection = from_value(json!([
            { "id": 7, "username": "nameless" },
            { "id": 8, "name": "Present" }
        ]))
        .expect("records without a name still decode");

        let names = extract_names(&users);
        assert_eq!(names, vec![None, Some("Present".to_string())]);
    }

    #[test]
    fn extract_names_is_idempotent() {
        let users: UserCollection = from_value(fixture_two_users()).expect("fixture decodes");

        let first = extract_names(&users);
        let second = extract_names(&users);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_collection_yields_empty_names() {
        let users: UserCollection = from_value(json!([])).expect("empty array decodes");
        assert!(extract_names(&users).is_empty());
    }

    #[test]
    fn non_array_payload_fails_to_decode() {
        let result = from_value::<UserCollection>(json!({ "not": "an array" }));
        assert!(result.is_err());
    }
}
