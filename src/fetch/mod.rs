use reqwest::Client;
use tracing::{instrument, Level};

use crate::config::Config;
use crate::Result;

pub fn make_client(config: &Config) -> Client {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Fetches the schedule page. Non-2xx statuses and timeouts surface as
/// `Error::Fetch`; retrying is the caller's business.
#[instrument(skip(client, config), fields(url = %config.menu_url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, config: &Config) -> Result<String> {
    let response = client
        .get(config.menu_url.clone())
        .send()
        .await?
        .error_for_status()?;
    let start = std::time::Instant::now();
    let bytes = response.bytes().await?;
    log::trace!("Got menu page body in \t {:?}", start.elapsed());
    // The page's charset hint mangles umlauts; decode as UTF-8 unconditionally.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
