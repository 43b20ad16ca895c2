mod palette;
pub mod utils;
pub mod week_view;

pub use week_view::{WeekView, WeekViewResponse};
