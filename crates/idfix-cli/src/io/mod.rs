pub mod config_file;
pub mod text_file;
