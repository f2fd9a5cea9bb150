pub mod csv_writer;
pub mod dataset_writer;
