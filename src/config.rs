use std::path::PathBuf;
use std::time::Duration;

use url::Url;

static MENU_URL: &str =
    "https://www.studierendenwerk-muenchen-oberbayern.de/mensa/speiseplan/speiseplan_457_-de.html";
static USER_AGENT: &str = "MensaScraper/1.0";
static OUTPUT_PATH: &str = "data/mensa_garching.json";
static TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the fetcher and serializer need to know about the outside
/// world. Production values come from `Default`; tests construct their own.
#[derive(Debug, Clone)]
pub struct Config {
    pub menu_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_url: Url::parse(MENU_URL).expect("menu url should be valid"),
            user_agent: USER_AGENT.to_string(),
            timeout: TIMEOUT,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}
