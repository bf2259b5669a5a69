use eframe::egui::{self, Color32, FontId, Pos2, Rect, Shape, Stroke};

use crate::controller::Action;
use crate::deck::info::InfoPanel;
use crate::render::{panel_shape, Hits};
use crate::theme::Theme;

/// Draw the info panel over a dimmed backdrop.
///
/// Clicking the backdrop or the close button closes it; clicks on the panel
/// itself are absorbed.
pub fn draw_info(
    painter: &egui::Painter,
    theme: &Theme,
    rect: Rect,
    panel: &InfoPanel,
    scale: f32,
    hits: &mut Hits,
) {
    let s = scale;
    painter.rect_filled(rect, 0.0, Theme::with_opacity(Color32::BLACK, 0.6));
    hits.push(rect, Action::CloseInfo);

    let width = (760.0 * s).min(rect.width() - 48.0 * s);
    let pad = 32.0 * s;
    let inner = width - pad * 2.0;
    let left = rect.center().x - width / 2.0;
    let bg = painter.add(Shape::Noop);

    // Lay out first so the panel can be centered vertically.
    let title = painter.layout(
        panel.title.to_string(),
        FontId::proportional(30.0 * s),
        theme.accent,
        inner - 48.0 * s,
    );
    let paragraphs: Vec<_> = panel
        .paragraphs
        .iter()
        .map(|p| {
            painter.layout(
                p.to_string(),
                FontId::proportional(20.0 * s),
                theme.foreground,
                inner,
            )
        })
        .collect();
    let facts: Vec<_> = panel
        .facts
        .iter()
        .map(|(label, value)| {
            let mut job = egui::text::LayoutJob::default();
            job.wrap.max_width = inner;
            job.append(
                &format!("{label}: "),
                0.0,
                egui::TextFormat {
                    font_id: FontId::proportional(17.0 * s),
                    color: theme.muted,
                    ..Default::default()
                },
            );
            job.append(
                value,
                0.0,
                egui::TextFormat {
                    font_id: FontId::monospace(17.0 * s),
                    color: theme.accent_alt,
                    ..Default::default()
                },
            );
            painter.layout_job(job)
        })
        .collect();

    let para_gap = 14.0 * s;
    let fact_gap = 6.0 * s;
    let mut height = pad + title.rect.height() + 20.0 * s;
    height += paragraphs.iter().map(|g| g.rect.height() + para_gap).sum::<f32>();
    if !facts.is_empty() {
        height += 8.0 * s + facts.iter().map(|g| g.rect.height() + fact_gap).sum::<f32>();
    }
    height += pad;

    let panel_rect = Rect::from_min_size(
        Pos2::new(left, rect.center().y - height / 2.0),
        egui::vec2(width, height),
    );
    painter.set(
        bg,
        panel_shape(
            panel_rect,
            14.0 * s,
            theme.background,
            Stroke::new(1.5 * s, Theme::with_opacity(theme.accent, 0.5)),
        ),
    );
    hits.block(panel_rect);

    let mut y = panel_rect.top() + pad;
    let title_h = title.rect.height();
    painter.galley(Pos2::new(left + pad, y), title, theme.accent);
    y += title_h + 20.0 * s;

    for galley in paragraphs {
        let h = galley.rect.height();
        painter.galley(Pos2::new(left + pad, y), galley, theme.foreground);
        y += h + para_gap;
    }
    if !facts.is_empty() {
        y += 8.0 * s;
        painter.line_segment(
            [Pos2::new(left + pad, y - 6.0 * s), Pos2::new(left + width - pad, y - 6.0 * s)],
            Stroke::new(1.0, theme.panel_border),
        );
        for galley in facts {
            let h = galley.rect.height();
            painter.galley(Pos2::new(left + pad, y), galley, theme.muted);
            y += h + fact_gap;
        }
    }

    let close_size = 36.0 * s;
    let close = Rect::from_min_size(
        Pos2::new(panel_rect.right() - pad / 2.0 - close_size, panel_rect.top() + pad / 2.0),
        egui::vec2(close_size, close_size),
    );
    painter.circle_filled(close.center(), close_size / 2.0, theme.panel_border);
    let x = painter.layout_no_wrap(
        "\u{2715}".to_string(),
        FontId::proportional(18.0 * s),
        theme.foreground,
    );
    painter.galley(close.center() - x.rect.size() / 2.0, x, theme.foreground);
    hits.push(close, Action::CloseInfo);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_hits(width: f32, height: f32) -> (Hits, Rect) {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(width, height));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let theme = Theme::for_level(crate::deck::FeatureLevel::InfoPanels);
        let panel = crate::deck::info::lookup("nat").expect("nat panel");
        let mut hits = Hits::new();
        // Fonts are only available inside a frame.
        let _ = painter.ctx().run(egui::RawInput::default(), |_| {
            draw_info(&painter, &theme, rect, panel, 1.0, &mut hits);
        });
        (hits, rect)
    }

    #[test]
    fn test_backdrop_closes_but_panel_does_not() {
        let (hits, rect) = overlay_hits(1920.0, 1080.0);
        assert_eq!(hits.action_at(Pos2::new(10.0, 10.0)), Some(Action::CloseInfo));
        assert_eq!(hits.action_at(rect.center()), None);
    }
}
