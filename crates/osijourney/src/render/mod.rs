pub mod blocks;
pub mod chrome;
pub mod overlay;
pub mod widgets;

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Shape, Stroke};

use crate::controller::Action;
use crate::deck::{Direction, Layout, Slide, Tone};
use crate::theme::Theme;

/// Everything a slide needs to paint one frame.
#[derive(Clone, Copy)]
pub struct SlideFrame<'a> {
    pub theme: &'a Theme,
    pub scale: f32,
    pub opacity: f32,
    pub step: u8,
    /// Seconds since the slide was entered.
    pub elapsed: f32,
}

impl SlideFrame<'_> {
    /// A tone resolved through the theme, faded by the frame opacity.
    pub fn color(&self, color: Color32, alpha: f32) -> Color32 {
        Theme::with_opacity(color, self.opacity * alpha)
    }

    fn with_scale(&self, scale: f32) -> Self {
        Self { scale, ..*self }
    }
}

/// Clickable regions registered while drawing a frame.
///
/// Later regions sit on top: the overlay is registered after the slide so it
/// swallows clicks meant for the content underneath.
#[derive(Debug, Default)]
pub struct Hits {
    regions: Vec<(Rect, Option<Action>)>,
}

impl Hits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, action: Action) {
        self.regions.push((rect, Some(action)));
    }

    /// Register an area that absorbs clicks without doing anything.
    pub fn block(&mut self, rect: Rect) {
        self.regions.push((rect, None));
    }

    /// Action of the topmost region under `pos`.
    pub fn action_at(&self, pos: Pos2) -> Option<Action> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .and_then(|(_, action)| action.clone())
    }

    pub fn is_clickable(&self, pos: Pos2) -> bool {
        self.action_at(pos).is_some()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }
}

/// Uniform scale relative to a 1920x1080 canvas.
pub fn compute_scale(rect: Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}

/// A painter that lays out text but paints nothing, for measuring.
pub fn ghost(painter: &egui::Painter) -> egui::Painter {
    let mut ghost = painter.clone();
    ghost.set_invisible();
    ghost
}

/// Render one slide into `rect`, registering its info links in `hits`.
///
/// Content that would overflow is shrunk to fit.
pub fn render_slide(
    painter: &egui::Painter,
    slide: &Slide,
    frame: &SlideFrame,
    rect: Rect,
    hits: &mut Hits,
) {
    let padding = 48.0 * frame.scale;
    let content = rect.shrink(padding);

    let measured = draw_slide_body(&ghost(painter), slide, frame, content, &mut Hits::new());
    let fit = if measured > content.height() && measured > 0.0 {
        content.height() / measured
    } else {
        1.0
    };
    let frame = frame.with_scale(frame.scale * fit);

    let top = match slide.layout {
        Layout::Centered => content.top() + (content.height() - measured * fit).max(0.0) / 2.0,
        Layout::Standard => content.top(),
    };
    let content = Rect::from_min_max(Pos2::new(content.left(), top), content.max);
    draw_slide_body(painter, slide, &frame, content, hits);
}

fn draw_slide_body(
    painter: &egui::Painter,
    slide: &Slide,
    frame: &SlideFrame,
    rect: Rect,
    hits: &mut Hits,
) -> f32 {
    let band_gap = 20.0 * frame.scale;
    let mut y = rect.top();

    if slide.layout == Layout::Standard {
        y += draw_header(painter, slide, frame, Pos2::new(rect.left(), y), rect.width());
        y += band_gap;
    }
    if !slide.info.is_empty() {
        y += draw_info_links(painter, slide, frame, Pos2::new(rect.left(), y), rect.width(), hits);
        y += band_gap;
    }

    for band in &slide.bands {
        let h = blocks::draw_band(painter, band, frame, Pos2::new(rect.left(), y), rect.width());
        y += h + band_gap;
    }

    y - band_gap - rect.top()
}

/// Icon, title, subtitle and direction badge. Returns height used.
fn draw_header(
    painter: &egui::Painter,
    slide: &Slide,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let theme = frame.theme;
    let s = frame.scale;
    let tone = frame.color(theme.tone(slide.tone), 1.0);
    let mut x = pos.x;
    let mut height = 0.0f32;

    if let Some(icon) = slide.icon {
        let galley = painter.layout_no_wrap(
            icon.to_string(),
            FontId::proportional(theme.title_size * s),
            tone,
        );
        height = height.max(galley.rect.height());
        x += galley.rect.width() + 20.0 * s;
        painter.galley(pos, galley, tone);
    }

    let badge_width = if let Some(direction) = slide.badge {
        let color = match direction {
            Direction::Down => tone,
            Direction::Up => frame.color(theme.tone(Tone::Green), 1.0),
        };
        let galley = painter.layout_no_wrap(
            direction.badge().to_string(),
            FontId::proportional(theme.small_size * s),
            color,
        );
        let pad = egui::vec2(14.0 * s, 6.0 * s);
        let size = galley.rect.size() + pad * 2.0;
        let badge = Rect::from_min_size(Pos2::new(pos.x + width - size.x, pos.y + 8.0 * s), size);
        painter.rect_filled(badge, 6.0 * s, Theme::with_opacity(color, 0.2));
        painter.rect_stroke(badge, 6.0 * s, Stroke::new(1.5 * s, color), egui::StrokeKind::Inside);
        painter.galley(badge.min + pad, galley, color);
        height = height.max(size.y + 8.0 * s);
        size.x + 20.0 * s
    } else {
        0.0
    };

    let text_width = (pos.x + width - badge_width - x).max(1.0);
    let title = painter.layout(
        slide.title.to_string(),
        FontId::proportional(theme.title_size * 0.75 * s),
        tone,
        text_width,
    );
    let mut y = pos.y + title.rect.height();
    painter.galley(Pos2::new(x, pos.y), title, tone);

    if let Some(subtitle) = slide.subtitle {
        let color = frame.color(theme.muted, 1.0);
        let galley = painter.layout(
            subtitle.to_string(),
            FontId::proportional(theme.subtitle_size * 0.8 * s),
            color,
            text_width,
        );
        let h = galley.rect.height();
        painter.galley(Pos2::new(x, y + 4.0 * s), galley, color);
        y += h + 4.0 * s;
    }

    height.max(y - pos.y)
}

/// Row of "ⓘ label" buttons that open info panels. Returns height used.
fn draw_info_links(
    painter: &egui::Painter,
    slide: &Slide,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
    hits: &mut Hits,
) -> f32 {
    let theme = frame.theme;
    let s = frame.scale;
    let color = frame.color(theme.accent, 1.0);
    let pad = egui::vec2(12.0 * s, 5.0 * s);
    let gap = 10.0 * s;
    let mut x = pos.x;
    let mut y = pos.y;
    let mut row_height = 0.0f32;

    for link in &slide.info {
        let galley = painter.layout_no_wrap(
            format!("\u{24D8} {}", link.label),
            FontId::proportional(theme.small_size * s),
            color,
        );
        let size = galley.rect.size() + pad * 2.0;
        if x > pos.x && x + size.x > pos.x + width {
            x = pos.x;
            y += row_height + gap;
        }
        let button = Rect::from_min_size(Pos2::new(x, y), size);
        painter.rect_filled(button, size.y / 2.0, frame.color(theme.accent, 0.12));
        painter.rect_stroke(
            button,
            size.y / 2.0,
            Stroke::new(1.0 * s, frame.color(theme.accent, 0.5)),
            egui::StrokeKind::Inside,
        );
        painter.galley(button.min + pad, galley, color);
        hits.push(button, Action::OpenInfo(link.key.to_string()));
        x += size.x + gap;
        row_height = row_height.max(size.y);
    }

    y + row_height - pos.y
}

/// Filled and outlined rounded rect, for backgrounds painted into a slot
/// reserved with `painter.add(Shape::Noop)` once the content height is known.
pub fn panel_shape(rect: Rect, radius: f32, fill: Color32, stroke: Stroke) -> Shape {
    Shape::Vec(vec![
        Shape::rect_filled(rect, radius, fill),
        Shape::rect_stroke(rect, radius, stroke, egui::StrokeKind::Inside),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(Pos2::new(x, y), egui::vec2(w, h))
    }

    #[test]
    fn test_compute_scale_uses_limiting_axis() {
        assert_eq!(compute_scale(rect(0.0, 0.0, 1920.0, 1080.0)), 1.0);
        assert_eq!(compute_scale(rect(0.0, 0.0, 960.0, 1080.0)), 0.5);
        assert_eq!(compute_scale(rect(0.0, 0.0, 3840.0, 1080.0)), 1.0);
    }

    #[test]
    fn test_hits_topmost_region_wins() {
        let mut hits = Hits::new();
        hits.push(rect(0.0, 0.0, 100.0, 100.0), Action::Next);
        hits.push(rect(40.0, 40.0, 20.0, 20.0), Action::Previous);
        assert_eq!(hits.action_at(Pos2::new(50.0, 50.0)), Some(Action::Previous));
        assert_eq!(hits.action_at(Pos2::new(10.0, 10.0)), Some(Action::Next));
        assert_eq!(hits.action_at(Pos2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_blocking_region_swallows_clicks() {
        let mut hits = Hits::new();
        hits.push(rect(0.0, 0.0, 100.0, 100.0), Action::CloseInfo);
        hits.block(rect(20.0, 20.0, 60.0, 60.0));
        hits.push(rect(70.0, 20.0, 10.0, 10.0), Action::CloseInfo);
        assert_eq!(hits.action_at(Pos2::new(5.0, 5.0)), Some(Action::CloseInfo));
        assert!(!hits.is_clickable(Pos2::new(40.0, 40.0)));
        assert_eq!(hits.action_at(Pos2::new(75.0, 25.0)), Some(Action::CloseInfo));
        hits.clear();
        assert!(!hits.is_clickable(Pos2::new(5.0, 5.0)));
    }
}
