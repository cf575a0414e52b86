use std::sync::Arc;

use autobook_api::config::ApiConfig;
use autobook_store::{Scheduler, create_store};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // The store lives for the whole process and starts empty
    let store = create_store();
    let scheduler = Scheduler::with_business_hours(store, config.business_hours);

    // Start API server
    autobook_api::start_server(config, Arc::new(scheduler)).await?;

    Ok(())
}
