use std::sync::Arc;

pub mod clients;
pub mod engine;
pub mod extractors;
pub mod model;

mod fetchers;
mod persisters;
mod view;

use clients::dataset_client::DatasetClient;
use clients::wiki_client::WikiClient;
use fetchers::film_list_fetcher::FilmListFetcher;
use persisters::csv_writer::CsvWriter;
use persisters::dataset_writer::DatasetWriter;

/// Browse mode: fetch the dataset once, then hand the record set to the
/// interactive table. A load failure is reported instead of showing an
/// empty table.
pub async fn browse(dataset_url: String) -> Result<(), String> {
    let dataset_client = DatasetClient::new();

    log::info!("Fetching film dataset from {}", dataset_url);
    let films = dataset_client
        .fetch_films(dataset_url.as_str())
        .await
        .map_err(|e| e.to_string())?;
    log::info!("Loaded {} film records", films.len());

    view::run_tui(films)
}

/// Scrape mode: rebuild the dataset from the Wikipedia list article and
/// write it as JSON (what browse mode consumes) and CSV.
pub async fn scrape() -> Result<(), String> {
    let dataset_file_name = "films.json";
    let csv_file_name = "films.csv";

    let wiki_client = Arc::new(WikiClient::new());
    let fetcher = FilmListFetcher::new(wiki_client);

    let films = fetcher.get_all_films().await?;

    DatasetWriter::save_films_to_json(&films, dataset_file_name)?;
    CsvWriter::save_films_to_csv(&films, csv_file_name)?;

    log::info!(
        "Scrape finished: {} films written to {} and {}. \
         Point filmdeck at a hosted copy of {} to browse them.",
        films.len(),
        dataset_file_name,
        csv_file_name,
        dataset_file_name
    );

    Ok(())
}
