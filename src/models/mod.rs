// Module exports for models

pub mod booking;
pub mod category;
pub mod event;
pub mod settings;
