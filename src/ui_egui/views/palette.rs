use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Colors for the week time grid, derived from the active egui visuals.
#[derive(Clone, Copy)]
pub(crate) struct WeekGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub text: Color32,
    pub today_text: Color32,
    pub hover_overlay: Color32,
    pub focus_stroke: Color32,
}

impl WeekGridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let panel = visuals.panel_fill;
        let accent = visuals.selection.bg_fill;
        let line = visuals.widgets.noninteractive.bg_stroke.color;

        Self {
            hour_bg: blend(panel, base, 0.4),
            regular_bg: base,
            weekend_bg: blend(base, panel, 0.6),
            today_bg: blend(base, accent, 0.15),
            hour_line: with_alpha(line, 200),
            divider: line,
            text: visuals.text_color(),
            today_text: visuals.strong_text_color(),
            hover_overlay: with_alpha(accent, if visuals.dark_mode { 60 } else { 40 }),
            focus_stroke: accent,
        }
    }
}
