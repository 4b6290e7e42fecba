// Domain value objects
pub mod date_id;
pub mod rarity;
pub mod slot_status;
pub mod slot_type;

pub use date_id::*;
pub use rarity::*;
pub use slot_status::*;
pub use slot_type::*;
