pub mod dataset_client;
pub mod wiki_client;
