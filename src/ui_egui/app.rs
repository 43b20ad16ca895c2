#[path = "app/context.rs"]
mod context;
mod booking_form;
mod lifecycle;
mod navigation;
mod sidebar;
mod state;

use chrono::{Local, NaiveDate};
use egui::Key;

use self::context::AppContext;
use self::navigation::AppHandler;
use self::sidebar::{render_sidebar, SidebarAction};
use self::state::AppState;
use crate::layout::{CalendarController, Navigation, WeekLayout};
use crate::models::category::BookingCategory;
use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::ui_egui::views::{WeekView, WeekViewResponse};

pub struct BookingCalendarApp {
    /// Database-backed services
    context: AppContext,
    settings: Settings,
    /// Reference date and visible hours of the grid
    controller: CalendarController,
    /// Events of the visible week, refreshed on navigation
    events: Vec<CalendarEvent>,
    categories: Vec<BookingCategory>,
    state: AppState,
}

impl eframe::App for BookingCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl BookingCalendarApp {
    fn handle_update(&mut self, ctx: &egui::Context) {
        if self.state.needs_reload {
            self.reload_events();
        }

        let now = Local::now();
        let mut navigation = keyboard_navigation(ctx);
        let sidebar_action;
        let view_response: WeekViewResponse;
        {
            let layout = self.controller.layout(&self.events);

            egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                if let Some(nav) = render_toolbar(ui, &layout, now.date_naive()) {
                    navigation = Some(nav);
                }
            });

            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(self.state.status.as_deref().unwrap_or("Ready"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{} categories", self.categories.len()));
                    });
                });
            });

            sidebar_action = render_sidebar(ctx, &mut self.state, &self.categories);

            view_response = egui::CentralPanel::default()
                .show(ctx, |ui| {
                    WeekView::show(ui, &layout, now, &self.settings.date_format)
                })
                .inner;
        }

        self.dispatch(navigation, view_response, now.date_naive());
        self.apply_sidebar_action(sidebar_action);
    }

    /// Forward this frame's grid interactions through the controller.
    fn dispatch(
        &mut self,
        navigation: Option<Navigation>,
        response: WeekViewResponse,
        today: NaiveDate,
    ) {
        let mut handler = AppHandler {
            state: &mut self.state,
            default_hour: self.settings.time_start,
        };

        if let Some(nav) = navigation {
            self.controller.navigate(nav, today, &mut handler);
        }
        if let Some((date, activation)) = response.day_activation {
            self.controller.activate_day(date, activation, &mut handler);
        }
        if let Some(event) = response.clicked_event {
            self.controller.activate_event(&event, &mut handler);
        }
    }

    fn apply_sidebar_action(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::None => {}
            SidebarAction::Close => self.state.clear_selection(),
            SidebarAction::Create(booking) => {
                match self.context.booking_service().create(booking) {
                    Ok(created) => {
                        log::info!("Created booking {:?} '{}'", created.id, created.title);
                        self.state.status = Some(format!("Booked {}", created.display_title()));
                        self.state.clear_selection();
                        self.state.needs_reload = true;
                    }
                    Err(err) => {
                        log::warn!("Failed to create booking: {:#}", err);
                        if let Some(form) = self.state.booking_form.as_mut() {
                            form.error = Some(format!("{:#}", err));
                        }
                    }
                }
            }
            SidebarAction::Delete(id) => match self.context.booking_service().delete(id) {
                Ok(()) => {
                    log::info!("Deleted booking {}", id);
                    self.state.status = Some(format!("Deleted booking #{}", id));
                    self.state.clear_selection();
                    self.state.needs_reload = true;
                }
                Err(err) => {
                    log::warn!("Failed to delete booking {}: {:#}", id, err);
                    self.state.status = Some(format!("Could not delete booking #{}", id));
                }
            },
        }
    }
}

fn render_toolbar(
    ui: &mut egui::Ui,
    layout: &WeekLayout<'_>,
    today: NaiveDate,
) -> Option<Navigation> {
    let mut navigation = None;

    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous week (←)").clicked() {
            navigation = Some(Navigation::PreviousWeek);
        }
        let today_button = ui.add_enabled(
            !layout.week.contains(today),
            egui::Button::new("Today"),
        );
        if today_button.on_hover_text("Current week (T)").clicked() {
            navigation = Some(Navigation::Today);
        }
        if ui.button("▶").on_hover_text("Next week (→)").clicked() {
            navigation = Some(Navigation::NextWeek);
        }

        ui.separator();
        ui.strong(format!(
            "{} - {}",
            layout.week.start().format("%d %b"),
            layout.week.end().format("%d %b %Y")
        ));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let count = layout.event_count();
            ui.label(format!("{} {}", count, if count == 1 { "event" } else { "events" }));
        });
    });

    navigation
}

/// Arrow keys move between weeks and T jumps to today, unless a text field has focus.
fn keyboard_navigation(ctx: &egui::Context) -> Option<Navigation> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|i| {
        if i.key_pressed(Key::ArrowLeft) {
            Some(Navigation::PreviousWeek)
        } else if i.key_pressed(Key::ArrowRight) {
            Some(Navigation::NextWeek)
        } else if i.key_pressed(Key::T) {
            Some(Navigation::Today)
        } else {
            None
        }
    })
}
