// Application queries (reads)

pub mod catalog_queries;
pub mod schedule_queries;
pub mod template_queries;
