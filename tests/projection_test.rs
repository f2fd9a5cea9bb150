#[cfg(test)]
mod tests {
    use filmdeck::engine::projection::{distinct_countries, distinct_years, project};
    use filmdeck::engine::selection::{Selection, SortOrder, SortSpec};
    use filmdeck::model::film::{BoxOffice, Column, Film};

    fn film(title: &str, director: &str, year: u32, country: &str, box_office: f64) -> Film {
        Film {
            title: title.to_string(),
            director: Some(director.to_string()),
            release_year: Some(year),
            country: Some(country.to_string()),
            box_office: Some(BoxOffice::Amount(box_office)),
        }
    }

    fn sample_films() -> Vec<Film> {
        vec![
            film("Avatar", "James Cameron", 2009, "United States", 2923706026.0),
            film("Titanic", "James Cameron", 1997, "United States", 2264750694.0),
            film("Parasite", "Bong Joon-ho", 2019, "South Korea", 262840000.0),
            film("The Avengers", "Joss Whedon", 2012, "United States", 1520538536.0),
        ]
    }

    fn titles(rows: &[&Film]) -> Vec<String> {
        rows.iter().map(|film| film.title.clone()).collect()
    }

    #[test]
    fn default_selection_returns_full_set_in_original_order() {
        let films = sample_films();
        let rows = project(&films, &Selection::default());

        assert_eq!(
            titles(&rows),
            vec!["Avatar", "Titanic", "Parasite", "The Avengers"]
        );
    }

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let films = sample_films();

        let selection = Selection {
            search: "AVA".to_string(),
            ..Selection::default()
        };
        let rows = project(&films, &selection);

        // "AVA" hits both Avatar and The Avengers, nothing else.
        assert_eq!(titles(&rows), vec!["Avatar", "The Avengers"]);
    }

    #[test]
    fn search_does_not_match_other_fields() {
        let films = sample_films();

        let selection = Selection {
            search: "cameron".to_string(),
            ..Selection::default()
        };
        let rows = project(&films, &selection);

        assert!(rows.is_empty());
    }

    #[test]
    fn year_filter_is_exact() {
        let films = sample_films();

        let selection = Selection {
            year: Some(1997),
            ..Selection::default()
        };
        let rows = project(&films, &selection);

        assert_eq!(titles(&rows), vec!["Titanic"]);
        assert!(rows.iter().all(|film| film.release_year == Some(1997)));
    }

    #[test]
    fn country_filter_is_exact() {
        let films = sample_films();

        let selection = Selection {
            country: Some("South Korea".to_string()),
            ..Selection::default()
        };
        let rows = project(&films, &selection);

        assert_eq!(titles(&rows), vec!["Parasite"]);
    }

    #[test]
    fn combined_filters_are_the_intersection_of_individual_filters() {
        let films = sample_films();

        let search_only = Selection {
            search: "a".to_string(),
            ..Selection::default()
        };
        let year_only = Selection {
            year: Some(2009),
            ..Selection::default()
        };
        let country_only = Selection {
            country: Some("United States".to_string()),
            ..Selection::default()
        };
        let combined = Selection {
            search: "a".to_string(),
            year: Some(2009),
            country: Some("United States".to_string()),
            ..Selection::default()
        };

        let expected: Vec<String> = project(&films, &search_only)
            .iter()
            .filter(|film| {
                project(&films, &year_only).contains(film)
                    && project(&films, &country_only).contains(film)
            })
            .map(|film| film.title.clone())
            .collect();

        assert_eq!(titles(&project(&films, &combined)), expected);
        assert_eq!(titles(&project(&films, &combined)), vec!["Avatar"]);
    }

    #[test]
    fn sort_descending_reverses_ascending() {
        let films = sample_films();

        let ascending = Selection {
            sort: Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Ascending,
            }),
            ..Selection::default()
        };
        let descending = Selection {
            sort: Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Descending,
            }),
            ..Selection::default()
        };

        let mut reversed = titles(&project(&films, &ascending));
        reversed.reverse();

        assert_eq!(titles(&project(&films, &descending)), reversed);
    }

    #[test]
    fn unsorted_projection_keeps_filtered_records_in_original_order() {
        let films = sample_films();

        let selection = Selection {
            country: Some("United States".to_string()),
            ..Selection::default()
        };
        let rows = project(&films, &selection);

        assert_eq!(titles(&rows), vec!["Avatar", "Titanic", "The Avengers"]);
    }

    #[test]
    fn missing_values_sort_as_empty_string() {
        let mut films = sample_films();
        films.push(Film {
            title: "Undated".to_string(),
            director: None,
            release_year: None,
            country: None,
            box_office: None,
        });

        let selection = Selection {
            sort: Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Ascending,
            }),
            ..Selection::default()
        };
        let rows = project(&films, &selection);

        // The empty cell compares lowest, so the undated record leads.
        assert_eq!(rows[0].title, "Undated");
    }

    #[test]
    fn toggle_sort_follows_the_header_click_state_machine() {
        let mut selection = Selection::default();
        assert_eq!(selection.sort, None);

        selection.toggle_sort(Column::ReleaseYear);
        assert_eq!(
            selection.sort,
            Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Ascending,
            })
        );

        selection.toggle_sort(Column::ReleaseYear);
        assert_eq!(
            selection.sort,
            Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Descending,
            })
        );

        selection.toggle_sort(Column::ReleaseYear);
        assert_eq!(
            selection.sort,
            Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Ascending,
            })
        );

        // A different column always starts over ascending.
        selection.toggle_sort(Column::ReleaseYear);
        selection.toggle_sort(Column::Title);
        assert_eq!(
            selection.sort,
            Some(SortSpec {
                column: Column::Title,
                order: SortOrder::Ascending,
            })
        );
    }

    #[test]
    fn avatar_titanic_scenario() {
        let films = vec![
            film("Avatar", "James Cameron", 2009, "USA", 2923000000.0),
            film("Titanic", "James Cameron", 1997, "USA", 2264000000.0),
        ];

        let search = Selection {
            search: "ava".to_string(),
            ..Selection::default()
        };
        assert_eq!(titles(&project(&films, &search)), vec!["Avatar"]);

        let by_title = Selection {
            sort: Some(SortSpec {
                column: Column::Title,
                order: SortOrder::Ascending,
            }),
            ..Selection::default()
        };
        assert_eq!(titles(&project(&films, &by_title)), vec!["Avatar", "Titanic"]);

        let by_year_descending = Selection {
            sort: Some(SortSpec {
                column: Column::ReleaseYear,
                order: SortOrder::Descending,
            }),
            ..Selection::default()
        };
        assert_eq!(
            titles(&project(&films, &by_year_descending)),
            vec!["Avatar", "Titanic"]
        );
    }

    #[test]
    fn option_lists_are_distinct_sorted_and_cover_the_full_set() {
        let mut films = sample_films();
        films.push(Film {
            title: "Stateless".to_string(),
            director: None,
            release_year: None,
            country: None,
            box_office: None,
        });

        assert_eq!(distinct_years(&films), vec![1997, 2009, 2012, 2019]);
        assert_eq!(
            distinct_countries(&films),
            vec!["South Korea", "United States"]
        );
    }
}
