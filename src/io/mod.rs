pub mod config_io;
pub mod people_io;
