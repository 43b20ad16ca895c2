use crate::services::booking::BookingService;
use crate::services::category::CategoryService;
use crate::services::database::Database;

/// Shared access point for the services the app modules need.
pub struct AppContext {
    database: Database,
}

impl AppContext {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn booking_service(&self) -> BookingService<'_> {
        BookingService::new(self.database.connection())
    }

    pub fn category_service(&self) -> CategoryService<'_> {
        CategoryService::new(self.database.connection())
    }
}
