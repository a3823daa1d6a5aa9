pub mod admin_handler;
pub mod map_handler;

pub use admin_handler::*;
pub use map_handler::*;
