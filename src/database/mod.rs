pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;

pub use connection::{create_pool, create_pool_in_memory, get_connection, DbConn, DbPool};
pub use models::*;
