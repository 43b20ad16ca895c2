//! Booking category service.
//!
//! CRUD over the `categories` table. Deleting a category leaves its bookings
//! in place without a category.

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::category::BookingCategory;

pub struct CategoryService<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create a new category. Names are unique, ignoring case.
    pub fn create(&self, category: BookingCategory) -> Result<BookingCategory> {
        category.validate().map_err(|e| anyhow!("{}", e))?;

        if self.find_by_name(&category.name)?.is_some() {
            return Err(anyhow!("Category '{}' already exists", category.name.trim()));
        }

        self.conn
            .execute(
                "INSERT INTO categories (name, color) VALUES (?1, ?2)",
                params![category.name.trim(), category.color],
            )
            .context("Failed to insert category")?;

        let id = self.conn.last_insert_rowid();
        self.get(id)?
            .ok_or_else(|| anyhow!("Category {} vanished after insert", id))
    }

    pub fn get(&self, id: i64) -> Result<Option<BookingCategory>> {
        let result = self.conn.query_row(
            "SELECT id, name, color FROM categories WHERE id = ?1",
            params![id],
            map_category_row,
        );

        match result {
            Ok(cat) => Ok(Some(cat)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<BookingCategory>> {
        let result = self.conn.query_row(
            "SELECT id, name, color FROM categories WHERE LOWER(name) = LOWER(?1)",
            params![name.trim()],
            map_category_row,
        );

        match result {
            Ok(cat) => Ok(Some(cat)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All categories ordered by name.
    pub fn list_all(&self) -> Result<Vec<BookingCategory>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color FROM categories ORDER BY name ASC")?;

        let categories = stmt.query_map([], map_category_row)?;

        categories
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to fetch categories")
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1", params![id])
            .context("Failed to delete category")?;

        if affected == 0 {
            return Err(anyhow!("Category {} not found", id));
        }
        Ok(())
    }
}

fn map_category_row(row: &Row<'_>) -> rusqlite::Result<BookingCategory> {
    Ok(BookingCategory {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        color: row.get(2)?,
    })
}
