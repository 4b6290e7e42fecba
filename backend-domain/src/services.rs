// Pure domain services

pub mod asset_resolver;
pub mod lifecycle;
pub mod merge_engine;
pub mod slot_sync;

pub use asset_resolver::*;
pub use lifecycle::*;
pub use merge_engine::*;
pub use slot_sync::*;
