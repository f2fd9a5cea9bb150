pub mod film_extractor;
