//! # User Directory Fetch Pipeline
//!
//! Fetches the JSONPlaceholder user directory, derives the name collection,
//! and emits both to the structured log sink. Errors are logged once and
//! re-raised to the caller; the process exits nonzero on failure.

use clap::Parser;
use lib_common::feeds::jsonplaceholder::apicall::ApiCallPlaceholder;
use lib_common::feeds::jsonplaceholder::users::{extract_names, UsersFeed};
use lib_common::loggers::loggerlocal::{LoggerLocal, LoggerLocalOptions};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(about = "Fetch the user directory and derive its name collection", version)]
struct Args {
    #[clap(long, env = "USERFEED_BASE_URL", help = "Override the JSONPlaceholder base URL.")]
    base_url: Option<String>,

    #[clap(long, env = "USERFEED_LOG_DIR", help = "Directory for log files.")]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let options = LoggerLocalOptions {
        use_tty: Some(vec![6, 5, 4, 3]),
        use_file: Some(vec![6, 5, 4, 3]),
        log_dir: args.log_dir.clone(),
    };
    let logger = Arc::new(LoggerLocal::new("fetch_users".to_string(), Some(options)));

    let api_call = Arc::new(match args.base_url.as_deref() {
        Some(url) => ApiCallPlaceholder::with_base_url(url, Arc::clone(&logger)),
        None => ApiCallPlaceholder::new(Arc::clone(&logger)),
    });
    let feed = UsersFeed::new(api_call, Arc::clone(&logger));

    match feed.fetch_users().await {
        Ok(users) => {
            logger
                .info(
                    &format!("Fetched {} user records", users.len()),
                    Some(serde_json::to_value(&users)?),
                )
                .await;

            let names = extract_names(&users);
            logger
                .info(
                    &format!("Derived {} names", names.len()),
                    Some(serde_json::to_value(&names)?),
                )
                .await;

            Ok(())
        }
        Err(e) => {
            // Log once, then re-raise the same failure to the caller.
            logger
                .fatal(&format!("User fetch pipeline failed: {}", e), None)
                .await;
            Err(e.into())
        }
    }
}
