use super::shared::{map_booking_row, to_storage, BOOKING_COLUMNS};
use super::BookingService;
use crate::models::booking::Booking;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rusqlite::{self, params};

impl<'a> BookingService<'a> {
    /// Create a new booking in the database.
    pub fn create(&self, mut booking: Booking) -> Result<Booking> {
        booking.validate().map_err(|e| anyhow!(e))?;

        let now = Local::now();
        self.conn
            .execute(
                "INSERT INTO bookings (
                    title, room, category_id, start_datetime, end_datetime, created_at
                ) VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    booking.title,
                    booking.room,
                    booking.category_id,
                    to_storage(&booking.start),
                    to_storage(&booking.end),
                    to_storage(&now),
                ],
            )
            .context("Failed to insert booking")?;

        let id = self.conn.last_insert_rowid();
        log::debug!("Created booking {} '{}'", id, booking.title);
        booking.id = Some(id);
        booking.created_at = Some(now);

        Ok(booking)
    }

    /// Retrieve a booking by ID.
    pub fn get(&self, id: i64) -> Result<Option<Booking>> {
        let query = format!("SELECT {} FROM bookings WHERE id = ?", BOOKING_COLUMNS);
        let result = self.conn.query_row(&query, [id], map_booking_row);

        match result {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Update an existing booking.
    pub fn update(&self, booking: &Booking) -> Result<()> {
        booking.validate().map_err(|e| anyhow!(e))?;
        let id = booking
            .id
            .ok_or_else(|| anyhow!("Booking ID is required for update"))?;

        let rows_affected = self
            .conn
            .execute(
                "UPDATE bookings
                 SET title = ?, room = ?, category_id = ?, start_datetime = ?, end_datetime = ?
                 WHERE id = ?",
                params![
                    booking.title,
                    booking.room,
                    booking.category_id,
                    to_storage(&booking.start),
                    to_storage(&booking.end),
                    id,
                ],
            )
            .context("Failed to update booking")?;

        if rows_affected == 0 {
            return Err(anyhow!("Booking with id {} not found", id));
        }

        Ok(())
    }

    /// Delete a booking by ID.
    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM bookings WHERE id = ?", [id])
            .context("Failed to delete booking")?;

        if rows_affected == 0 {
            return Err(anyhow!("Booking with id {} not found", id));
        }

        Ok(())
    }
}
