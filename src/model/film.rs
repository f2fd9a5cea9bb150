use std::fmt;

use serde::{Deserialize, Serialize};

/// One film record as carried by the remote dataset. Only the title is
/// guaranteed; every other field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub release_year: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub box_office: Option<BoxOffice>,
}

/// Box office gross. The dataset carries either a plain number or a
/// text like "$2.923 billion", so both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxOffice {
    Amount(f64),
    Text(String),
}

impl fmt::Display for BoxOffice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxOffice::Amount(amount) => write!(f, "{}", amount),
            BoxOffice::Text(text) => write!(f, "{}", text),
        }
    }
}

/// The five display columns, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Director,
    ReleaseYear,
    Country,
    BoxOffice,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::Director,
        Column::ReleaseYear,
        Column::Country,
        Column::BoxOffice,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Director => "Director",
            Column::ReleaseYear => "Year",
            Column::Country => "Country",
            Column::BoxOffice => "Box Office",
        }
    }
}

impl Film {
    /// Text shown in the given column's cell. Missing fields render as
    /// the empty string, which is also what sorting compares.
    pub fn cell_text(&self, column: Column) -> String {
        match column {
            Column::Title => self.title.clone(),
            Column::Director => self.director.clone().unwrap_or_default(),
            Column::ReleaseYear => self
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            Column::Country => self.country.clone().unwrap_or_default(),
            Column::BoxOffice => self
                .box_office
                .as_ref()
                .map(|b| b.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        return Column::ALL
            .iter()
            .map(|column| self.cell_text(*column))
            .collect();
    }

    pub fn csv_titles() -> Vec<&'static str> {
        return Column::ALL.iter().map(|column| column.header()).collect();
    }
}
