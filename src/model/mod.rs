pub mod config;
pub mod person;

pub use config::*;
pub use person::*;
