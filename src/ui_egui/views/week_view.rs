use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};
use egui::{Align2, FontId, Id, Key, Rect, Response, Sense, Stroke, Vec2};

use super::palette::WeekGridPalette;
use super::utils::{contrast_text, event_color, format_event_tooltip};
use crate::layout::placement::{EventRect, PlacedEvent, GRID_COLUMNS};
use crate::layout::{Activation, ActivationKey, WeekLayout, DAYS_PER_WEEK};
use crate::models::event::CalendarEvent;
use crate::utils::date::{format_short_date, fractional_hour};

pub const HOUR_ROW_HEIGHT: f32 = 48.0;
pub const HEADER_HEIGHT: f32 = 44.0;
const EVENT_ROUNDING: f32 = 4.0;
const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Interactions collected while painting one frame.
#[derive(Debug, Default)]
pub struct WeekViewResponse {
    pub day_activation: Option<(NaiveDate, Activation)>,
    pub clicked_event: Option<CalendarEvent>,
}

pub struct WeekView;

impl WeekView {
    pub fn show(
        ui: &mut egui::Ui,
        layout: &WeekLayout<'_>,
        now: DateTime<Local>,
        date_format: &str,
    ) -> WeekViewResponse {
        let palette = WeekGridPalette::from_visuals(ui.visuals());
        let mut response = WeekViewResponse::default();

        Self::render_header(ui, layout, now.date_naive(), date_format, &palette, &mut response);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::render_grid(ui, layout, now, &palette, &mut response);
            });

        response
    }

    fn render_header(
        ui: &mut egui::Ui,
        layout: &WeekLayout<'_>,
        today: NaiveDate,
        date_format: &str,
        palette: &WeekGridPalette,
        response: &mut WeekViewResponse,
    ) {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), HEADER_HEIGHT),
            Sense::hover(),
        );
        let col_width = rect.width() / GRID_COLUMNS as f32;
        let painter = ui.painter_at(rect);

        let label_rect = Rect::from_min_size(rect.min, Vec2::new(col_width, HEADER_HEIGHT));
        painter.rect_filled(label_rect, 0.0, palette.hour_bg);
        painter.text(
            label_rect.center(),
            Align2::CENTER_CENTER,
            format!("W{}", layout.week.start().iso_week().week()),
            FontId::proportional(12.0),
            palette.text,
        );

        for (i, date) in layout.days.iter().copied().enumerate() {
            let cell = Rect::from_min_size(
                rect.min + Vec2::new(col_width * (i + 1) as f32, 0.0),
                Vec2::new(col_width, HEADER_HEIGHT),
            );
            let cell_response = ui.interact(cell, Id::new(("day-header", date)), Sense::click());

            let is_today = date == today;
            let bg = if is_today {
                palette.today_bg
            } else if is_weekend(date) {
                palette.weekend_bg
            } else {
                palette.regular_bg
            };
            painter.rect_filled(cell.shrink(1.0), 4.0, bg);
            if cell_response.hovered() {
                painter.rect_filled(cell.shrink(1.0), 4.0, palette.hover_overlay);
            }
            if cell_response.has_focus() {
                painter.rect_stroke(cell.shrink(1.0), 4.0, Stroke::new(2.0, palette.focus_stroke));
            }

            let text_color = if is_today { palette.today_text } else { palette.text };
            painter.text(
                cell.center_top() + Vec2::new(0.0, 6.0),
                Align2::CENTER_TOP,
                DAY_NAMES[i],
                FontId::proportional(13.0),
                text_color,
            );
            painter.text(
                cell.center_bottom() - Vec2::new(0.0, 6.0),
                Align2::CENTER_BOTTOM,
                format_short_date(date, date_format),
                FontId::proportional(11.0),
                text_color,
            );

            if let Some(activation) = activation_for(ui, &cell_response) {
                response.day_activation = Some((date, activation));
            }
        }
    }

    fn render_grid(
        ui: &mut egui::Ui,
        layout: &WeekLayout<'_>,
        now: DateTime<Local>,
        palette: &WeekGridPalette,
        response: &mut WeekViewResponse,
    ) {
        if layout.hours.is_empty() {
            ui.label("No visible hours configured");
            return;
        }

        let height = layout.hours.len() as f32 * HOUR_ROW_HEIGHT;
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
        let col_width = rect.width() / GRID_COLUMNS as f32;
        let painter = ui.painter_at(rect);

        painter.rect_filled(
            Rect::from_min_size(rect.min, Vec2::new(col_width, height)),
            0.0,
            palette.hour_bg,
        );

        // Day columns are interactive so empty space can be clicked.
        for (i, date) in layout.days.iter().copied().enumerate() {
            let column = Rect::from_min_size(
                rect.min + Vec2::new(col_width * (i + 1) as f32, 0.0),
                Vec2::new(col_width, height),
            );
            let bg = if date == now.date_naive() {
                palette.today_bg
            } else if is_weekend(date) {
                palette.weekend_bg
            } else {
                palette.regular_bg
            };
            painter.rect_filled(column, 0.0, bg);

            let column_response =
                ui.interact(column, Id::new(("day-column", date)), Sense::click());
            if column_response.hovered() {
                painter.rect_filled(column, 0.0, palette.hover_overlay);
            }
            if let Some(activation) = activation_for(ui, &column_response) {
                response.day_activation = Some((date, activation));
            }
        }

        for (row, hour) in layout.hours.iter().enumerate() {
            let y = rect.top() + row as f32 * HOUR_ROW_HEIGHT;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                Stroke::new(1.0, palette.hour_line),
            );
            painter.text(
                egui::pos2(rect.left() + 6.0, y + 4.0),
                Align2::LEFT_TOP,
                format!("{:02}:00", hour),
                FontId::proportional(11.0),
                palette.text,
            );
        }

        for col in 1..GRID_COLUMNS {
            let x = rect.left() + col as f32 * col_width;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                Stroke::new(1.0, palette.divider),
            );
        }

        for day_index in 0..DAYS_PER_WEEK {
            for placed in layout.placed_on(day_index) {
                if let Some(event) = Self::render_event(ui, &painter, rect, placed) {
                    response.clicked_event = Some(event);
                }
            }
        }

        Self::draw_current_time_indicator(&painter, rect, layout, now);
    }

    /// Paint one placed event; returns the event when it was clicked.
    fn render_event(
        ui: &mut egui::Ui,
        painter: &egui::Painter,
        grid: Rect,
        placed: &PlacedEvent<'_>,
    ) -> Option<CalendarEvent> {
        if !placed.rect.is_drawable() {
            log::trace!("Skipping degenerate event {}", placed.event.id);
            return None;
        }

        let px = placed.rect.to_pixels(grid.width(), grid.height());
        let event_rect = Rect::from_min_size(
            grid.min + Vec2::new(px.x, px.y),
            Vec2::new(px.width.max(2.0), px.height),
        );

        let fill = event_color(placed.event);
        let text_color = contrast_text(fill);
        painter.rect_filled(event_rect, EVENT_ROUNDING, fill);

        let clipped = painter.with_clip_rect(event_rect.intersect(grid));
        clipped.text(
            event_rect.min + Vec2::new(4.0, 2.0),
            Align2::LEFT_TOP,
            &placed.event.title,
            FontId::proportional(11.0),
            text_color,
        );
        if event_rect.height() > 30.0 {
            clipped.text(
                event_rect.min + Vec2::new(4.0, 16.0),
                Align2::LEFT_TOP,
                format!(
                    "{} - {}",
                    placed.event.start.format("%H:%M"),
                    placed.event.end.format("%H:%M")
                ),
                FontId::proportional(10.0),
                text_color,
            );
        }

        let event_response = ui
            .interact(event_rect, Id::new(("event", &placed.event.id)), Sense::click())
            .on_hover_text(format_event_tooltip(placed.event));
        if event_response.hovered() {
            painter.rect_stroke(event_rect, EVENT_ROUNDING, Stroke::new(1.5, text_color));
        }

        event_response.clicked().then(|| placed.event.clone())
    }

    fn draw_current_time_indicator(
        painter: &egui::Painter,
        grid: Rect,
        layout: &WeekLayout<'_>,
        now: DateTime<Local>,
    ) {
        let Some(day_index) = layout.week.day_index(now.date_naive()) else {
            return;
        };
        let hour = fractional_hour(&now);
        let range = layout.hour_range;
        if hour < range.start as f64 || hour >= (range.end + 1) as f64 {
            return;
        }

        let position = EventRect::compute(day_index, 0, 1, hour, hour, range);
        let col_width = grid.width() / GRID_COLUMNS as f32;
        let x = grid.left() + col_width * (day_index + 1) as f32;
        let y = grid.top() + position.top as f32 * grid.height();
        let color = egui::Color32::from_rgb(220, 38, 38);

        painter.line_segment(
            [egui::pos2(x, y), egui::pos2(x + col_width, y)],
            Stroke::new(2.0, color),
        );
        painter.circle_filled(egui::pos2(x, y), 4.0, color);
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classify a click: egui reports Enter/Space on a focused widget as a click.
fn activation_for(ui: &egui::Ui, response: &Response) -> Option<Activation> {
    if !response.clicked() {
        return None;
    }
    if !response.has_focus() {
        return Some(Activation::Pointer);
    }

    let key = ui.input(|i| {
        if i.key_pressed(Key::Enter) {
            Some(ActivationKey::Enter)
        } else if i.key_pressed(Key::Space) {
            Some(ActivationKey::Space)
        } else {
            None
        }
    });
    Some(key.map_or(Activation::Pointer, Activation::Key))
}
