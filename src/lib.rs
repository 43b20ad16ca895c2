// Booking Calendar Library
// Exports all modules for testing and reuse

pub mod layout;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
