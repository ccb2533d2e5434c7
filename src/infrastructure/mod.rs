//! Infrastructure layer: platform concerns with no business rules.

pub mod paths;

pub use paths::{default_data_dir, log_file, storage_file};
