//! # Users Feed Live Data Test
//!
//! Connects to the JSONPlaceholder API via lib_common to retrieve the user
//! directory, derive the name collection, and display both.
//!
//! Run manually; it requires outbound network access.

use lib_common::feeds::jsonplaceholder::apicall::ApiCallPlaceholder;
use lib_common::feeds::jsonplaceholder::users::{extract_names, UsersFeed};
use lib_common::loggers::loggerlocal::{LoggerLocal, LoggerLocalOptions};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // TTY-only logger so the runner leaves no log files behind.
    let options = LoggerLocalOptions {
        use_tty: Some(vec![6, 5, 4, 3, 2]),
        use_file: None,
        log_dir: None,
    };
    let logger = Arc::new(LoggerLocal::new("users_feed_test".to_string(), Some(options)));

    let api_call = Arc::new(ApiCallPlaceholder::new(Arc::clone(&logger)));
    let feed = UsersFeed::new(api_call, logger);

    println!("[*] Requesting live data from the JSONPlaceholder API...");

    match feed.fetch_users().await {
        Ok(users) => {
            println!("\n[SUCCESS] Data received:");
            println!("-----------------------------------------------");
            println!("{}", serde_json::to_string_pretty(&users)?);
            println!("-----------------------------------------------");

            let names = extract_names(&users);
            assert_eq!(names.len(), users.len());
            println!("[INFO] Derived {} names:", names.len());
            for name in &names {
                println!("  - {}", name.as_deref().unwrap_or("<no name>"));
            }

            // The live fixture serves 10 records.
            assert_eq!(users.len(), 10);
        }
        Err(e) => {
            eprintln!("\n[ERROR] User directory retrieval failed:");
            eprintln!(">>> {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
