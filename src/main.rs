use std::env;

use filmdeck::clients::dataset_client::DEFAULT_DATASET_URL;

mod logging;

enum Mode {
    Browse(String),
    Scrape,
}

fn get_mode() -> Mode {
    match env::args().nth(1) {
        None => Mode::Browse(DEFAULT_DATASET_URL.to_string()),
        Some(arg) if arg == "scrape" => Mode::Scrape,
        Some(url) => Mode::Browse(url),
    }
}

#[tokio::main]
async fn main() {
    let result = match get_mode() {
        Mode::Scrape => {
            logging::setup_logging();
            filmdeck::scrape().await
        }
        Mode::Browse(url) => {
            logging::setup_file_logging("filmdeck.log");
            filmdeck::browse(url).await
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
