use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::migrations;
use crate::models::category::default_categories;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_categories_table(conn)?;
    create_bookings_table(conn)?;
    run_booking_migrations(conn)?;
    seed_default_categories(conn)?;
    Ok(())
}

fn create_categories_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            color TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create categories table")?;

    Ok(())
}

fn create_bookings_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
            start_datetime TEXT NOT NULL,
            end_datetime TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create bookings table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_bookings_start ON bookings(start_datetime)",
        [],
    )
    .context("Failed to create bookings index")?;

    Ok(())
}

/// Columns added after the first release of the bookings table.
fn run_booking_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "bookings",
        "room",
        "ALTER TABLE bookings ADD COLUMN room TEXT",
    )?;

    Ok(())
}

fn seed_default_categories(conn: &Connection) -> Result<()> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
        .context("Failed to count categories")?;

    if count > 0 {
        return Ok(());
    }

    log::info!("Seeding default booking categories");
    for category in default_categories() {
        conn.execute(
            "INSERT OR IGNORE INTO categories (name, color) VALUES (?1, ?2)",
            params![category.name, category.color],
        )
        .with_context(|| format!("Failed to seed category {}", category.name))?;
    }

    Ok(())
}
