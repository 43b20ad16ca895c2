// Service module exports

pub mod booking;
pub mod category;
pub mod database;
pub mod settings;
