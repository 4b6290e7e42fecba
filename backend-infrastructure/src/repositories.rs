pub mod json_store;

pub use json_store::{JsonCatalogRepository, JsonScheduleRepository, JsonTemplateRepository};
