pub mod derive;
pub mod selection;
pub mod view;
