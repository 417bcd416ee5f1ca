mod build_file_path;
mod display_outcome;
mod get_snapbump_config;
mod replace_in_file;

pub use build_file_path::build_file_path;
pub use display_outcome::{display_service_result, display_summary};
pub use get_snapbump_config::{get_snapbump_config, get_snapbump_config_path, get_snapbump_dir};
pub use replace_in_file::{count_matching_lines, replace_in_file};
