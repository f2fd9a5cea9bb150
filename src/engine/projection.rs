use crate::engine::selection::{Selection, SortOrder};
use crate::model::film::Film;

/// Applies the current selection to the record set and returns the rows
/// to display, in order. The result borrows from the record set; there
/// is never a second copy of the data to drift out of sync.
pub fn project<'a>(films: &'a [Film], selection: &Selection) -> Vec<&'a Film> {
    let search = selection.search.to_lowercase();

    let mut rows: Vec<&Film> = films
        .iter()
        .filter(|film| matches_search(film, &search))
        .filter(|film| matches_year(film, selection.year))
        .filter(|film| matches_country(film, selection.country.as_deref()))
        .collect();

    if let Some(spec) = selection.sort {
        rows.sort_by(|a, b| {
            let left = a.cell_text(spec.column).to_lowercase();
            let right = b.cell_text(spec.column).to_lowercase();
            match spec.order {
                SortOrder::Ascending => left.cmp(&right),
                SortOrder::Descending => right.cmp(&left),
            }
        });
    }

    rows
}

fn matches_search(film: &Film, lowercase_search: &str) -> bool {
    lowercase_search.is_empty() || film.title.to_lowercase().contains(lowercase_search)
}

fn matches_year(film: &Film, year: Option<u32>) -> bool {
    match year {
        None => true,
        Some(year) => film.release_year == Some(year),
    }
}

fn matches_country(film: &Film, country: Option<&str>) -> bool {
    match country {
        None => true,
        Some(country) => film.country.as_deref() == Some(country),
    }
}

/// Distinct release years across the full record set, ascending. Filter
/// options come from here once at load time, never from a filtered view.
pub fn distinct_years(films: &[Film]) -> Vec<u32> {
    let mut years: Vec<u32> = films.iter().filter_map(|film| film.release_year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Distinct non-empty countries across the full record set, sorted.
pub fn distinct_countries(films: &[Film]) -> Vec<String> {
    let mut countries: Vec<String> = films
        .iter()
        .filter_map(|film| film.country.clone())
        .filter(|country| !country.is_empty())
        .collect();
    countries.sort();
    countries.dedup();
    countries
}
