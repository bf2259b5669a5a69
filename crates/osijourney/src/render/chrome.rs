use eframe::egui::{self, Color32, FontId, Pos2, Rect, Stroke};

use crate::controller::Action;
use crate::deck::Tone;
use crate::render::Hits;
use crate::theme::Theme;

/// Height reserved above the slide for the progress bar.
pub const TOP_BAR: f32 = 28.0;
/// Height reserved below the slide for navigation and the key hint.
pub const BOTTOM_BAR: f32 = 110.0;

const HINT: &str = "Usa \u{2190} \u{2192} per navigare | Spazio per avanzare";

/// What the navigation bar shows.
#[derive(Debug, Clone, Copy)]
pub struct NavState {
    pub current: usize,
    pub total: usize,
    pub autoplay: bool,
}

impl NavState {
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Current,
    Visited,
    Upcoming,
}

pub fn dot_state(index: usize, current: usize) -> DotState {
    match index.cmp(&current) {
        std::cmp::Ordering::Equal => DotState::Current,
        std::cmp::Ordering::Less => DotState::Visited,
        std::cmp::Ordering::Greater => DotState::Upcoming,
    }
}

pub fn progress_fraction(current: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((current + 1) as f32 / total as f32).min(1.0)
}

/// Area left for the slide once the chrome is laid out.
pub fn slide_area(rect: Rect, scale: f32) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.left(), rect.top() + TOP_BAR * scale),
        Pos2::new(rect.right(), rect.bottom() - BOTTOM_BAR * scale),
    )
}

/// Soft cyan-to-purple wash over the background.
pub fn draw_backdrop(painter: &egui::Painter, theme: &Theme, rect: Rect) {
    let cyan = Theme::with_opacity(theme.accent, 0.08);
    let purple = Theme::with_opacity(theme.accent_alt, 0.08);
    let clear = Color32::TRANSPARENT;

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), cyan);
    mesh.colored_vertex(rect.right_top(), clear);
    mesh.colored_vertex(rect.left_bottom(), clear);
    mesh.colored_vertex(rect.right_bottom(), purple);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

pub fn draw_progress(
    painter: &egui::Painter,
    theme: &Theme,
    rect: Rect,
    current: usize,
    total: usize,
    scale: f32,
) {
    let margin = 24.0 * scale;
    let track = Rect::from_min_size(
        Pos2::new(rect.left() + margin, rect.top() + 12.0 * scale),
        egui::vec2(rect.width() - margin * 2.0, 4.0 * scale),
    );
    painter.rect_filled(track, 2.0 * scale, theme.panel_border);

    let fill = Rect::from_min_size(
        track.min,
        egui::vec2(track.width() * progress_fraction(current, total), track.height()),
    );
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(fill.left_top(), theme.accent);
    mesh.colored_vertex(fill.right_top(), theme.accent_alt);
    mesh.colored_vertex(fill.left_bottom(), theme.accent);
    mesh.colored_vertex(fill.right_bottom(), theme.accent_alt);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Back/forward buttons, autoplay toggle, slide dots and counter.
pub fn draw_nav(
    painter: &egui::Painter,
    theme: &Theme,
    rect: Rect,
    nav: NavState,
    hover: Option<Pos2>,
    scale: f32,
    hits: &mut Hits,
) {
    let s = scale;
    let margin = 24.0 * s;
    let bar_top = rect.bottom() - BOTTOM_BAR * s + 12.0 * s;
    painter.line_segment(
        [Pos2::new(rect.left() + margin, bar_top), Pos2::new(rect.right() - margin, bar_top)],
        Stroke::new(1.0, theme.panel_border),
    );
    let center_y = bar_top + 38.0 * s;
    let font = FontId::proportional(18.0 * s);

    let back = button(
        painter,
        "\u{2190} Indietro",
        Pos2::new(rect.left() + margin, center_y),
        theme.panel_border,
        theme.foreground,
        nav.can_go_back(),
        hover,
        &font,
        s,
    );
    if nav.can_go_back() {
        hits.push(back, Action::Previous);
    }

    let forward_label = "Avanti \u{2192}";
    let forward_width = painter
        .layout_no_wrap(forward_label.to_string(), font.clone(), theme.foreground)
        .rect
        .width()
        + 32.0 * s;
    let forward = button(
        painter,
        forward_label,
        Pos2::new(rect.right() - margin - forward_width, center_y),
        Color32::from_rgb(0x08, 0x91, 0xB2),
        Color32::WHITE,
        nav.can_go_forward(),
        hover,
        &font,
        s,
    );
    if nav.can_go_forward() {
        hits.push(forward, Action::Next);
    }

    // Center group: autoplay, dots, counter.
    let dot = 10.0 * s;
    let dot_gap = 6.0 * s;
    let dots_width = nav.total as f32 * (dot + dot_gap) - dot_gap;
    let (auto_label, auto_fill, auto_text) = if nav.autoplay {
        ("\u{23F8} Pausa", theme.tone(Tone::Green), Color32::BLACK)
    } else {
        ("\u{25B6} Auto", theme.panel_border, theme.foreground)
    };
    let small = FontId::proportional(15.0 * s);
    let auto_width = painter
        .layout_no_wrap(auto_label.to_string(), small.clone(), auto_text)
        .rect
        .width()
        + 32.0 * s;
    let counter = painter.layout_no_wrap(
        format!("{} / {}", nav.current + 1, nav.total),
        small.clone(),
        theme.dim,
    );
    let group_gap = 16.0 * s;
    let group_width = auto_width + group_gap + dots_width + group_gap + counter.rect.width();
    let mut x = rect.center().x - group_width / 2.0;

    let auto = button(
        painter,
        auto_label,
        Pos2::new(x, center_y),
        auto_fill,
        auto_text,
        true,
        hover,
        &small,
        s,
    );
    hits.push(auto, Action::ToggleAutoPlay);
    x += auto_width + group_gap;

    for i in 0..nav.total {
        let center = Pos2::new(x + dot / 2.0, center_y);
        let (color, radius) = match dot_state(i, nav.current) {
            DotState::Current => (theme.accent, dot * 0.625),
            DotState::Visited => (theme.accent_alt, dot / 2.0),
            DotState::Upcoming => (theme.panel_border, dot / 2.0),
        };
        painter.circle_filled(center, radius, color);
        hits.push(
            Rect::from_center_size(center, egui::vec2(dot + dot_gap, dot * 2.0)),
            Action::GoTo(i),
        );
        x += dot + dot_gap;
    }
    x += group_gap - dot_gap;

    let counter_h = counter.rect.height();
    painter.galley(Pos2::new(x, center_y - counter_h / 2.0), counter, theme.dim);

    let hint = painter.layout_no_wrap(HINT.to_string(), FontId::proportional(13.0 * s), theme.dim);
    let hint_pos = Pos2::new(rect.center().x - hint.rect.width() / 2.0, rect.bottom() - 24.0 * s);
    painter.galley(hint_pos, hint, theme.dim);
}

/// A rounded button whose left edge is vertically centered on `anchor`.
#[allow(clippy::too_many_arguments)]
fn button(
    painter: &egui::Painter,
    label: &str,
    anchor: Pos2,
    fill: Color32,
    text: Color32,
    enabled: bool,
    hover: Option<Pos2>,
    font: &FontId,
    s: f32,
) -> Rect {
    let opacity = if enabled { 1.0 } else { 0.3 };
    let galley = painter.layout_no_wrap(
        label.to_string(),
        font.clone(),
        Theme::with_opacity(text, opacity),
    );
    let pad = egui::vec2(16.0 * s, 8.0 * s);
    let size = galley.rect.size() + pad * 2.0;
    let rect = Rect::from_min_size(Pos2::new(anchor.x, anchor.y - size.y / 2.0), size);
    let hovered = enabled && hover.is_some_and(|p| rect.contains(p));
    painter.rect_filled(rect, 8.0 * s, Theme::with_opacity(fill, opacity));
    if hovered {
        painter.rect_stroke(
            rect,
            8.0 * s,
            Stroke::new(1.5 * s, Theme::with_opacity(text, 0.6)),
            egui::StrokeKind::Inside,
        );
    }
    painter.galley(rect.min + pad, galley, Theme::with_opacity(text, opacity));
    rect
}

/// Keyboard shortcut card, toggled with H.
pub fn draw_hud(painter: &egui::Painter, theme: &Theme, rect: Rect, scale: f32) {
    let shortcuts = [
        ("Space / \u{2192}", "Slide successiva"),
        ("\u{2190}", "Slide precedente"),
        ("Home / End", "Prima / ultima slide"),
        ("A", "Avvio / pausa autoplay"),
        ("Esc", "Chiudi pannello / \u{00d7}2 esci"),
        ("F", "Schermo intero"),
        ("H", "Mostra / nascondi aiuto"),
        ("Q", "Esci"),
    ];

    let bg = Theme::with_opacity(Color32::BLACK, 0.9);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 420.0 * scale;

    let hud_rect = Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));
    painter.rect_filled(hud_rect, 12.0 * scale, bg);
    painter.rect_stroke(
        hud_rect,
        12.0 * scale,
        Stroke::new(1.0, theme.panel_border),
        egui::StrokeKind::Outside,
    );

    let title_galley = painter.layout_no_wrap(
        "Scorciatoie da tastiera".to_string(),
        FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = Pos2::new(hud_rect.left() + padding, hud_rect.top() + padding);
    painter.galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        let key_galley = painter.layout_no_wrap(
            key.to_string(),
            FontId::monospace(15.0 * scale),
            key_color,
        );
        painter.galley(Pos2::new(hud_rect.left() + padding, y), key_galley, key_color);

        let desc_galley = painter.layout_no_wrap(
            desc.to_string(),
            FontId::proportional(15.0 * scale),
            text_color,
        );
        painter.galley(
            Pos2::new(hud_rect.left() + padding + 150.0 * scale, y),
            desc_galley,
            text_color,
        );
        y += line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_states() {
        assert_eq!(dot_state(3, 3), DotState::Current);
        assert_eq!(dot_state(1, 3), DotState::Visited);
        assert_eq!(dot_state(5, 3), DotState::Upcoming);
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(0, 4), 0.25);
        assert_eq!(progress_fraction(3, 4), 1.0);
        assert_eq!(progress_fraction(0, 0), 0.0);
    }

    #[test]
    fn test_nav_buttons_disabled_at_the_ends() {
        let first = NavState { current: 0, total: 12, autoplay: false };
        assert!(!first.can_go_back());
        assert!(first.can_go_forward());
        let last = NavState { current: 11, total: 12, autoplay: false };
        assert!(last.can_go_back());
        assert!(!last.can_go_forward());
    }

    #[test]
    fn test_slide_area_leaves_room_for_chrome() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        let area = slide_area(rect, 1.0);
        assert_eq!(area.top(), TOP_BAR);
        assert_eq!(area.bottom(), 1080.0 - BOTTOM_BAR);
    }
}
