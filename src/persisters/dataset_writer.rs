use std::fs::File;

use crate::model::film::Film;

/// Writes the scraped record set as the JSON document browse mode
/// consumes.
pub struct DatasetWriter {}

impl DatasetWriter {
    pub fn save_films_to_json(films: &[Film], file_name: &str) -> Result<(), String> {
        let file = File::create(file_name).map_err(|e| {
            format!("Could not create dataset file {}. {:?}", file_name, e)
        })?;

        serde_json::to_writer_pretty(file, films).map_err(|e| {
            format!("Error when writing dataset file {}. {:?}", file_name, e)
        })
    }
}
