#[cfg(test)]
mod tests {
    use filmdeck::clients::dataset_client::{parse_films, LoadError};
    use filmdeck::model::film::{BoxOffice, Column, Film};

    const DATASET_URL: &str = "https://example.com/films.json";

    #[test]
    fn parses_records_with_numeric_box_office() {
        let body = r#"[
            {
                "title": "Avatar",
                "director": "James Cameron",
                "release_year": 2009,
                "country": "United States",
                "box_office": 2923706026
            }
        ]"#;

        let films = parse_films(DATASET_URL, body).unwrap();

        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "Avatar");
        assert_eq!(films[0].director.as_deref(), Some("James Cameron"));
        assert_eq!(films[0].release_year, Some(2009));
        assert_eq!(films[0].country.as_deref(), Some("United States"));
        assert_eq!(
            films[0].box_office,
            Some(BoxOffice::Amount(2923706026.0))
        );
    }

    #[test]
    fn parses_records_with_textual_box_office() {
        let body = r#"[{"title": "Titanic", "box_office": "$2.264 billion"}]"#;

        let films = parse_films(DATASET_URL, body).unwrap();

        assert_eq!(
            films[0].box_office,
            Some(BoxOffice::Text("$2.264 billion".to_string()))
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let body = r#"[{"title": "Sholay"}]"#;

        let films = parse_films(DATASET_URL, body).unwrap();

        assert_eq!(films[0].title, "Sholay");
        assert_eq!(films[0].director, None);
        assert_eq!(films[0].release_year, None);
        assert_eq!(films[0].country, None);
        assert_eq!(films[0].box_office, None);
    }

    #[test]
    fn record_without_title_is_a_parse_error() {
        let body = r#"[{"director": "Nobody"}]"#;

        let err = parse_films(DATASET_URL, body).unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains(DATASET_URL));
    }

    #[test]
    fn non_array_document_is_a_parse_error() {
        let body = r#"{"films": []}"#;

        let err = parse_films(DATASET_URL, body).unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn dataset_round_trips_through_serialization() {
        let films = vec![
            Film {
                title: "Avatar".to_string(),
                director: Some("James Cameron".to_string()),
                release_year: Some(2009),
                country: Some("United States".to_string()),
                box_office: Some(BoxOffice::Text("$2.923 billion".to_string())),
            },
            Film {
                title: "Stateless".to_string(),
                director: None,
                release_year: None,
                country: None,
                box_office: None,
            },
        ];

        let body = serde_json::to_string(&films).unwrap();
        let reparsed = parse_films(DATASET_URL, &body).unwrap();

        assert_eq!(reparsed, films);
    }

    #[test]
    fn csv_row_follows_the_column_order_with_empty_cells_for_missing_fields() {
        let film = Film {
            title: "Titanic".to_string(),
            director: None,
            release_year: Some(1997),
            country: None,
            box_office: Some(BoxOffice::Text("$2.264 billion".to_string())),
        };

        assert_eq!(
            Film::csv_titles(),
            vec!["Title", "Director", "Year", "Country", "Box Office"]
        );
        assert_eq!(
            film.to_csvable_array(),
            vec!["Titanic", "", "1997", "", "$2.264 billion"]
        );
    }

    #[test]
    fn cell_text_renders_numeric_box_office_as_its_textual_form() {
        let film = Film {
            title: "Avatar".to_string(),
            director: None,
            release_year: None,
            country: None,
            box_office: Some(BoxOffice::Amount(2923706026.0)),
        };

        assert_eq!(film.cell_text(Column::BoxOffice), "2923706026");
    }
}
