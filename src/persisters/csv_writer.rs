use csv::Writer;

use crate::model::film::Film;

pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_films_to_csv(films: &[Film], file_name: &str) -> Result<(), String> {
        let mut wrt = Writer::from_path(file_name).map_err(|e| {
            format!("Could not create CSV writer for file {}. {:?}", file_name, e)
        })?;

        if let Err(e) = wrt.write_record(Film::csv_titles()) {
            return Err(format!(
                "Error when adding header to Csv file {}. {:?}",
                file_name, e
            ));
        }

        for film in films.iter() {
            if let Err(e) = wrt.write_record(film.to_csvable_array()) {
                return Err(format!(
                    "Error when adding entry to Csv file {}. Entry: {:?}, Error: {:?}",
                    file_name, film, e
                ));
            }
        }

        if let Err(e) = wrt.flush() {
            return Err(format!("Error when flushing file {}. {:?}", file_name, e));
        }

        Ok(())
    }
}
