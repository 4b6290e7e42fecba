// Backend Infrastructure Layer

pub mod config;
pub mod repositories;

pub use config::AppConfig;
pub use repositories::{JsonCatalogRepository, JsonScheduleRepository, JsonTemplateRepository};
