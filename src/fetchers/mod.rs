pub mod film_list_fetcher;
