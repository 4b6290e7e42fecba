// Application commands (mutations)

pub mod catalog_commands;
pub mod item_commands;
pub mod lifecycle_commands;
pub mod sync_commands;
pub mod template_commands;
