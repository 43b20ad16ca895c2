use egui::{Color32, RichText};

use super::state::AppState;
use crate::models::booking::Booking;
use crate::models::category::BookingCategory;
use crate::ui_egui::views::utils::{event_color, parse_color};

/// What the user asked for in the side panel this frame.
#[derive(Debug)]
pub(super) enum SidebarAction {
    None,
    Create(Booking),
    Delete(i64),
    Close,
}

pub(super) fn render_sidebar(
    ctx: &egui::Context,
    state: &mut AppState,
    categories: &[BookingCategory],
) -> SidebarAction {
    if !state.sidebar_open() {
        return SidebarAction::None;
    }

    egui::SidePanel::right("booking_sidebar")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            if state.booking_form.is_some() {
                render_booking_form(ui, state, categories)
            } else {
                render_event_details(ui, state)
            }
        })
        .inner
}

fn render_event_details(ui: &mut egui::Ui, state: &AppState) -> SidebarAction {
    let Some(event) = state.selected_event.as_ref() else {
        return SidebarAction::None;
    };
    let mut action = SidebarAction::None;

    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, event_color(event));
        ui.heading(&event.title);
    });
    ui.separator();

    ui.label(event.start.format("%A %d %B %Y").to_string());
    ui.label(format!(
        "{} - {} ({} min)",
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
        event.duration().num_minutes()
    ));
    if let Some(id) = event.booking_id {
        ui.label(RichText::new(format!("Booking #{}", id)).weak());
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if let Some(id) = event.booking_id {
            if ui
                .button(RichText::new("Delete booking").color(Color32::from_rgb(220, 38, 38)))
                .clicked()
            {
                action = SidebarAction::Delete(id);
            }
        }
        if ui.button("Close").clicked() {
            action = SidebarAction::Close;
        }
    });

    action
}

fn render_booking_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    categories: &[BookingCategory],
) -> SidebarAction {
    let Some(form) = state.booking_form.as_mut() else {
        return SidebarAction::None;
    };
    let mut action = SidebarAction::None;

    ui.heading("New booking");
    ui.label(form.date.format("%A %d %B %Y").to_string());
    ui.separator();

    egui::Grid::new("booking_form_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Title");
            ui.text_edit_singleline(&mut form.title);
            ui.end_row();

            ui.label("Room");
            ui.text_edit_singleline(&mut form.room);
            ui.end_row();

            ui.label("Category");
            let selected = form
                .category_id
                .and_then(|id| categories.iter().find(|c| c.id == Some(id)))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "None".to_string());
            egui::ComboBox::from_id_source("booking_category")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.category_id, None, "None");
                    for category in categories {
                        let text = RichText::new(&category.name)
                            .color(parse_color(&category.color).unwrap_or(Color32::GRAY));
                        ui.selectable_value(&mut form.category_id, category.id, text);
                    }
                });
            ui.end_row();

            ui.label("Start");
            ui.horizontal(|ui| {
                ui.add(egui::Slider::new(&mut form.start_hour, 0..=23).suffix("h"));
                ui.add(
                    egui::Slider::new(&mut form.start_minute, 0..=45)
                        .step_by(15.0)
                        .suffix("m"),
                );
            });
            ui.end_row();

            ui.label("Duration");
            ui.add(
                egui::Slider::new(&mut form.duration_minutes, 15..=480)
                    .step_by(15.0)
                    .suffix(" min"),
            );
            ui.end_row();
        });

    if let Some(error) = &form.error {
        ui.colored_label(Color32::from_rgb(220, 38, 38), error);
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            match form.to_booking() {
                Ok(booking) => action = SidebarAction::Create(booking),
                Err(err) => form.error = Some(format!("{:#}", err)),
            }
        }
        if ui.button("Cancel").clicked() {
            action = SidebarAction::Close;
        }
    });

    action
}
