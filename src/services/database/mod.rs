// Database service module
// SQLite connection and schema management for the booking store

mod connection;
mod migrations;
mod schema;

pub use connection::Database;
pub use migrations::column_exists;
