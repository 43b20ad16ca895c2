//! Helpers for painting events.

use egui::Color32;

use crate::models::category::DEFAULT_CATEGORY_COLOR;
use crate::models::event::CalendarEvent;

/// Parse a hex color string to Color32.
///
/// Accepts `#RRGGBB`, `#RGB`, and the same without the leading `#`.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}

/// Fill color for an event, falling back to the default category color.
pub fn event_color(event: &CalendarEvent) -> Color32 {
    event
        .color
        .as_deref()
        .and_then(parse_color)
        .or_else(|| parse_color(DEFAULT_CATEGORY_COLOR))
        .unwrap_or(Color32::from_rgb(59, 130, 246))
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Tooltip text: title, time range and booking reference.
pub fn format_event_tooltip(event: &CalendarEvent) -> String {
    let mut lines = vec![
        event.title.clone(),
        format!(
            "{} {} - {}",
            event.start.format("%a %d %b"),
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        ),
    ];

    if let Some(id) = event.booking_id {
        lines.push(format!("Booking #{}", id));
    }

    lines.push("Click for details".to_string());
    lines.join("\n")
}
