use std::sync::Arc;

use crate::{
    clients::wiki_client::WikiClient,
    extractors::film_extractor::{FilmExtractor, PreliminaryFilmInformation},
    model::film::{BoxOffice, Film},
};

/// Builds the full record set from the list article: one page fetch for
/// the table, then one concurrent article fetch per film.
#[derive(Clone)]
pub struct FilmListFetcher {
    wiki_client: Arc<WikiClient>,
}

impl FilmListFetcher {
    pub fn new(wiki_client: Arc<WikiClient>) -> Self {
        FilmListFetcher { wiki_client }
    }

    pub async fn get_all_films(&self) -> Result<Vec<Film>, String> {
        let list_url = WikiClient::get_film_list_url();
        log::info!("Fetching film list from {}", list_url);

        let list_page_html = self.wiki_client.get_html_from_url(list_url.as_str()).await?;
        let preliminary_info =
            FilmExtractor::get_preliminary_info_for_film_list(list_page_html.as_str());
        if preliminary_info.is_empty() {
            return Err(format!("Found no film rows on list page {}", list_url));
        }
        log::info!("Found {} films in the list table", preliminary_info.len());

        Ok(self
            .parallel_build_films_from_preliminary_info(preliminary_info)
            .await)
    }

    /// One task per film, joined in list order so the record set keeps
    /// the table's ordering. A failed article fetch degrades to a
    /// title-only record instead of dropping the row.
    async fn parallel_build_films_from_preliminary_info(
        &self,
        info_vec: Vec<PreliminaryFilmInformation>,
    ) -> Vec<Film> {
        let mut children = vec![];

        for info in info_vec {
            let client = self.wiki_client.clone();
            children.push(tokio::spawn(async move {
                let article_url = match info.article_url {
                    Some(url) => url,
                    None => return Self::title_only_film(info.title),
                };

                println!("Fetching information for film {}", info.title);
                match client.get_html_from_url(article_url.as_str()).await {
                    Ok(article_html) => {
                        let details =
                            FilmExtractor::extract_film_details_from_html(article_html.as_str());
                        Film {
                            title: info.title,
                            director: details.director,
                            release_year: details.release_year,
                            country: details.country,
                            box_office: details.box_office.map(BoxOffice::Text),
                        }
                    }
                    Err(e) => {
                        println!(
                            "Could not fetch article {} for film {}. Keeping it without details. Error was: {}",
                            article_url, info.title, e
                        );
                        Self::title_only_film(info.title)
                    }
                }
            }));
        }

        let mut films = vec![];
        for child in children {
            let film = child.await.expect("Could not join child task");
            films.push(film);
        }

        films
    }

    fn title_only_film(title: String) -> Film {
        Film {
            title,
            director: None,
            release_year: None,
            country: None,
            box_office: None,
        }
    }
}
