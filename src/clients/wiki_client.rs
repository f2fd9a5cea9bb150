use reqwest::{header, Client};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

/// HTTP client for the scrape mode. Wikipedia occasionally drops
/// requests under the fan-out, so every page fetch goes through a short
/// exponential-backoff retry.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
}

impl WikiClient {
    pub fn new() -> Self {
        let user_agent = header::HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3");
        Self {
            client: Client::builder().user_agent(user_agent).build().unwrap(),
        }
    }

    pub fn get_base_url() -> String {
        "https://en.wikipedia.org".to_string()
    }

    pub fn get_film_list_url() -> String {
        "https://en.wikipedia.org/wiki/List_of_highest-grossing_films".to_string()
    }

    pub async fn get_html_from_url(&self, url: &str) -> Result<String, String> {
        let retry_strategy = ExponentialBackoff::from_millis(10).map(jitter).take(5);
        Retry::spawn(retry_strategy, || async move {
            self.get_html_from_url_no_retry(url).await
        })
        .await
    }

    async fn get_html_from_url_no_retry(&self, url: &str) -> Result<String, String> {
        match self.client.get(url).send().await {
            Ok(resp) => {
                if resp.status() == 404 {
                    return Err("404 page not found".to_string());
                }
                match resp.text().await {
                    Ok(text) => Ok(text),
                    Err(e) => Err(format!(
                        "Failed to get text from url {}. Error was {}",
                        url, e
                    )),
                }
            }
            Err(e) => Err(format!(
                "Failed to get HTML for url: {}. Received error: {:?}",
                url, e
            )),
        }
    }
}
