use eframe::egui::{
    Color32, Frame, Margin, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_mint: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 13, 16),
        bg_secondary: Color32::from_rgb(24, 27, 31),
        bg_tertiary: Color32::from_rgb(40, 44, 50),
        panel_outline: Color32::from_rgb(46, 52, 60),
        grid_soft: Color32::from_rgb(30, 34, 39),
        text_primary: Color32::from_rgb(196, 202, 210),
        text_muted: Color32::from_rgb(138, 146, 156),
        accent_mint: Color32::from_rgb(127, 230, 196),
        accent_ice: Color32::from_rgb(167, 210, 255),
        warning: Color32::from_rgb(214, 118, 96),
        success: Color32::from_rgb(102, 176, 136),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget(&mut visuals.widgets.inactive, palette);
    set_widget(&mut visuals.widgets.hovered, palette);
    set_widget(&mut visuals.widgets.active, palette);
    set_widget(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.menu_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(3);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Frame drawn around each workflow panel.
pub fn section_frame() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(palette.bg_secondary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(12))
}

pub fn banner_frame() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(Color32::from_rgb(58, 30, 28))
        .stroke(Stroke::new(1.0, palette.warning))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(12, 8))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Error,
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.accent_ice,
        StatusTone::Info => palette.success,
        StatusTone::Error => palette.warning,
    }
}
