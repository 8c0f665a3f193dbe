pub mod fs;
pub mod logger;

pub use fs::{format_size, validate_dir};
