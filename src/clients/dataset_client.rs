use reqwest::{header, Client};
use thiserror::Error;

use crate::model::film::Film;

/// Where the browse mode looks for the film dataset when no URL argument
/// is given. The document is a plain JSON array of film records, the
/// same shape the scrape mode writes.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/filmdeck/datasets/main/films.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch dataset from {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("Dataset at {url} is not a JSON array of film records: {reason}")]
    Parse { url: String, reason: String },
}

/// Fetches the film dataset once at startup. A single attempt: a failure
/// here is reported to the user, not retried.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> Self {
        let user_agent = header::HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3");
        Self {
            client: Client::builder().user_agent(user_agent).build().unwrap(),
        }
    }

    pub async fn fetch_films(&self, url: &str) -> Result<Vec<Film>, LoadError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch {
                url: url.to_string(),
                reason: format!("{:?}", e),
            })?;

        if !resp.status().is_success() {
            return Err(LoadError::Fetch {
                url: url.to_string(),
                reason: format!("server answered with status {}", resp.status()),
            });
        }

        let body = resp.text().await.map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            reason: format!("{:?}", e),
        })?;

        parse_films(url, &body)
    }
}

/// Deserializes the dataset body. Validation of the record shape happens
/// here, once; downstream code works with typed records only.
pub fn parse_films(url: &str, body: &str) -> Result<Vec<Film>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
