// Domain entities

pub mod catalog_item;
pub mod config;
pub mod schedule_entry;
pub mod slot_item;
pub mod slot_template;

pub use catalog_item::*;
pub use config::*;
pub use schedule_entry::*;
pub use slot_item::*;
pub use slot_template::*;
