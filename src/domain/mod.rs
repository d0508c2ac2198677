pub mod errors;
pub mod models;
pub mod value_objects;
