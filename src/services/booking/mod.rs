//! Booking service entry point.
//! Database-backed booking operations and the week query that feeds the
//! layout engine, organized across focused submodules.

use rusqlite::Connection;

pub mod crud;
pub mod queries;
mod shared;

/// Service for managing bookings stored in SQLite.
pub struct BookingService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> BookingService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
