// Repository Port Traits (Interfaces)
// Define what the domain needs from storage

pub mod repositories;

pub use repositories::*;
