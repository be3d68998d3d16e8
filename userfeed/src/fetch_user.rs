//! # Single User Record Fetch
//!
//! Fetches one record from the JSONPlaceholder user directory by id and
//! emits it, together with its `name` field, to the structured log sink.

use clap::Parser;
use lib_common::feeds::jsonplaceholder::apicall::ApiCallPlaceholder;
use lib_common::feeds::jsonplaceholder::users::UsersFeed;
use lib_common::loggers::loggerlocal::{LoggerLocal, LoggerLocalOptions};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(about = "Fetch a single user record by id", version)]
struct Args {
    #[clap(help = "Record id to fetch.", default_value_t = 1)]
    id: i64,

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
    let logger = Arc::new(LoggerLocal::new("fetch_user".to_string(), Some(options)));

    let api_call = Arc::new(match args.base_url.as_deref() {
        Some(url) => ApiCallPlaceholder::with_base_url(url, Arc::clone(&logger)),
        None => ApiCallPlaceholder::new(Arc::clone(&logger)),
    });
    let feed = UsersFeed::new(api_call, Arc::clone(&logger));

    match feed.fetch_user(args.id).await {
        Ok(user) => {
            logger
                .info(
                    &format!(
                        "Fetched user {}: {}",
                        args.id,
                        user.name.as_deref().unwrap_or("<no name>")
                    ),
                    Some(serde_json::to_value(&user)?),
                )
                .await;
            Ok(())
        }
        Err(e) => {
            logger
                .fatal(&format!("User record fetch failed: {}", e), None)
                .await;
            Err(e.into())
        }
    }
}
