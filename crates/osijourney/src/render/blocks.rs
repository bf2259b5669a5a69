use eframe::egui::{self, Color32, FontFamily, FontId, Pos2, Rect, Shape, Stroke};

use crate::deck::{Band, Block, Field, TextSize, Tone};
use crate::render::{panel_shape, widgets, SlideFrame};
use crate::theme::Theme;

/// Draw a band of equally wide columns side by side. Returns height used.
pub fn draw_band(
    painter: &egui::Painter,
    band: &Band,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let gap = 24.0 * frame.scale;
    let columns = band.columns.len().max(1) as f32;
    let column_width = (width - gap * (columns - 1.0)) / columns;

    band.columns
        .iter()
        .enumerate()
        .map(|(i, blocks)| {
            let x = pos.x + i as f32 * (column_width + gap);
            draw_blocks(painter, blocks, frame, Pos2::new(x, pos.y), column_width)
        })
        .fold(0.0, f32::max)
}

/// Draw blocks top to bottom. Returns total height used.
pub fn draw_blocks(
    painter: &egui::Painter,
    blocks: &[Block],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let spacing = 14.0 * frame.scale;
    let mut y = 0.0;
    let mut drawn = 0;

    for block in blocks {
        let h = draw_block(painter, block, frame, Pos2::new(pos.x, pos.y + y), width);
        if h > 0.0 {
            y += h + spacing;
            drawn += 1;
        }
    }

    if drawn > 0 { y - spacing } else { 0.0 }
}

pub fn draw_block(
    painter: &egui::Painter,
    block: &Block,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    match block {
        Block::Text {
            text,
            tone,
            size,
            mono,
            centered,
        } => draw_text(painter, text, *tone, *size, *mono, *centered, frame, pos, width),
        Block::Card { title, tone, blocks } => {
            draw_card(painter, title, *tone, blocks, frame, pos, width)
        }
        Block::Fields { rows, tone, mono } => {
            draw_fields(painter, rows, *tone, *mono, frame, pos, width)
        }
        Block::Tiles { tiles, tone } => draw_tiles(painter, tiles, *tone, frame, pos, width),
        Block::Bullets { items, tone } => {
            draw_marked(painter, items, "\u{25B8}", *tone, frame, pos, width)
        }
        Block::Checks { items, tone } => {
            draw_marked(painter, items, "\u{2713}", *tone, frame, pos, width)
        }
        Block::Flags { on, off } => draw_flags(painter, on, off, frame, pos, width),
        Block::Chips { items, tone } => draw_chips(painter, items, *tone, frame, pos, width),
        Block::Hex { bytes, highlight } => {
            widgets::hex_viewer::draw(painter, bytes, highlight, frame, pos, width)
        }
        Block::Callout { tone, title, lines } => {
            draw_callout(painter, *tone, *title, lines, frame, pos, width)
        }
        Block::Reveal { at_step, block } => {
            if frame.step >= *at_step {
                draw_block(painter, block, frame, pos, width)
            } else {
                0.0
            }
        }
        Block::Widget { widget } => widgets::draw(painter, widget, frame, pos, width),
    }
}

pub fn font_size(frame: &SlideFrame, size: TextSize) -> f32 {
    let theme = frame.theme;
    let base = match size {
        TextSize::Display => theme.display_size,
        TextSize::Title => theme.title_size,
        TextSize::Subtitle => theme.subtitle_size,
        TextSize::Body => theme.body_size,
        TextSize::Small => theme.small_size,
    };
    base * frame.scale
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    painter: &egui::Painter,
    text: &str,
    tone: Tone,
    size: TextSize,
    mono: bool,
    centered: bool,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let color = frame.color(frame.theme.tone(tone), 1.0);
    let font = if mono {
        FontId::monospace(frame.theme.mono_size * frame.scale)
    } else {
        FontId::proportional(font_size(frame, size))
    };
    let galley = painter.layout(text.to_string(), font, color, width);
    let height = galley.rect.height();
    let x = if centered {
        pos.x + (width - galley.rect.width()).max(0.0) / 2.0
    } else {
        pos.x
    };
    painter.galley(Pos2::new(x, pos.y), galley, color);
    height
}

/// Draw a bordered card with a tinted title. Returns height used.
pub fn draw_card(
    painter: &egui::Painter,
    title: &str,
    tone: Tone,
    blocks: &[Block],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let padding = 16.0 * s;
    let accent = frame.color(frame.theme.tone(tone), 1.0);
    let bg = painter.add(Shape::Noop);

    let title_galley = painter.layout(
        title.to_string(),
        FontId::new(frame.theme.small_size * s, FontFamily::Proportional),
        accent,
        width - padding * 2.0,
    );
    let title_height = title_galley.rect.height();
    painter.galley(Pos2::new(pos.x + padding, pos.y + padding), title_galley, accent);

    let body_top = pos.y + padding + title_height + 10.0 * s;
    let body = draw_blocks(
        painter,
        blocks,
        frame,
        Pos2::new(pos.x + padding, body_top),
        width - padding * 2.0,
    );

    let height = body_top - pos.y + body + padding;
    let rect = Rect::from_min_size(pos, egui::vec2(width, height));
    painter.set(
        bg,
        panel_shape(
            rect,
            10.0 * s,
            frame.color(frame.theme.panel, 1.0),
            Stroke::new(1.0 * s, frame.color(frame.theme.tone(tone), 0.35)),
        ),
    );
    height
}

fn field_color(frame: &SlideFrame, field: &Field, tone: Tone) -> Color32 {
    frame.color(frame.theme.tone(field.tone.unwrap_or(tone)), 1.0)
}

/// `label: value` rows. A field with a previous value shows it struck through.
fn draw_fields(
    painter: &egui::Painter,
    rows: &[Field],
    tone: Tone,
    mono: bool,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let size = frame.theme.mono_size * s;
    let family = if mono {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    };
    let muted = frame.color(frame.theme.muted, 1.0);
    let mut y = pos.y;

    for field in rows {
        let mut job = egui::text::LayoutJob::default();
        job.wrap.max_width = width;
        let plain = egui::TextFormat {
            font_id: FontId::new(size, family.clone()),
            color: muted,
            ..Default::default()
        };
        job.append(&format!("{}: ", field.label), 0.0, plain.clone());
        if let Some(previous) = field.previous {
            job.append(
                previous,
                0.0,
                egui::TextFormat {
                    strikethrough: Stroke::new(1.5 * s, muted),
                    ..plain.clone()
                },
            );
            job.append(" \u{2192} ", 0.0, plain.clone());
        }
        job.append(
            field.value,
            0.0,
            egui::TextFormat {
                color: field_color(frame, field, tone),
                ..plain
            },
        );
        let galley = painter.layout_job(job);
        let h = galley.rect.height();
        painter.galley(Pos2::new(pos.x, y), galley, muted);
        y += h + 6.0 * s;
    }

    (y - pos.y - 6.0 * s).max(0.0)
}

/// Label-over-value tiles, two per row (one when alone).
fn draw_tiles(
    painter: &egui::Painter,
    tiles: &[Field],
    tone: Tone,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let gap = 10.0 * s;
    let pad = 10.0 * s;
    let per_row = if tiles.len() > 1 { 2 } else { 1 };
    let tile_width = (width - gap * (per_row as f32 - 1.0)) / per_row as f32;
    let label_color = frame.color(frame.theme.muted, 1.0);
    let mut y = pos.y;

    for row in tiles.chunks(per_row) {
        let mut row_height = 0.0f32;
        let mut pending = Vec::with_capacity(row.len());
        for (i, tile) in row.iter().enumerate() {
            let x = pos.x + i as f32 * (tile_width + gap);
            let bg = painter.add(Shape::Noop);
            let label = painter.layout(
                tile.label.to_string(),
                FontId::proportional(frame.theme.small_size * 0.85 * s),
                label_color,
                tile_width - pad * 2.0,
            );
            let label_h = label.rect.height();
            painter.galley(Pos2::new(x + pad, y + pad), label, label_color);
            let value_color = field_color(frame, tile, tone);
            let value = painter.layout(
                tile.value.to_string(),
                FontId::monospace(frame.theme.mono_size * s),
                value_color,
                tile_width - pad * 2.0,
            );
            let value_h = value.rect.height();
            painter.galley(Pos2::new(x + pad, y + pad + label_h + 2.0 * s), value, value_color);
            row_height = row_height.max(label_h + value_h + 2.0 * s + pad * 2.0);
            pending.push((bg, x));
        }
        for (bg, x) in pending {
            let rect = Rect::from_min_size(Pos2::new(x, y), egui::vec2(tile_width, row_height));
            painter.set(bg, Shape::rect_filled(rect, 6.0 * s, frame.color(Color32::BLACK, 0.3)));
        }
        y += row_height + gap;
    }

    (y - pos.y - gap).max(0.0)
}

fn draw_marked(
    painter: &egui::Painter,
    items: &[&str],
    marker: &str,
    tone: Tone,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let size = frame.theme.body_size * 0.9 * s;
    let marker_color = frame.color(frame.theme.tone(tone), 1.0);
    let text_color = frame.color(frame.theme.foreground, 1.0);
    let indent = size * 1.4;
    let mut y = pos.y;

    for item in items {
        let m = painter.layout_no_wrap(
            marker.to_string(),
            FontId::proportional(size),
            marker_color,
        );
        painter.galley(Pos2::new(pos.x, y), m, marker_color);
        let galley = painter.layout(
            item.to_string(),
            FontId::proportional(size),
            text_color,
            width - indent,
        );
        let h = galley.rect.height();
        painter.galley(Pos2::new(pos.x + indent, y), galley, text_color);
        y += h + 8.0 * s;
    }

    (y - pos.y - 8.0 * s).max(0.0)
}

/// Lay out pills left to right, wrapping. Returns height used.
fn draw_pills(
    painter: &egui::Painter,
    pills: &[(&str, bool, Color32)],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
    centered: bool,
) -> f32 {
    let s = frame.scale;
    let pad = egui::vec2(12.0 * s, 5.0 * s);
    let gap = 8.0 * s;
    let font = FontId::proportional(frame.theme.small_size * s);

    // Pack rows first so a row can be centered as a whole.
    let mut rows: Vec<Vec<(Rect, usize)>> = vec![Vec::new()];
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height = 0.0f32;
    let galleys: Vec<_> = pills
        .iter()
        .map(|(label, _, color)| painter.layout_no_wrap(label.to_string(), font.clone(), *color))
        .collect();
    for (i, galley) in galleys.iter().enumerate() {
        let size = galley.rect.size() + pad * 2.0;
        if x > 0.0 && x + size.x > width {
            rows.push(Vec::new());
            x = 0.0;
            y += row_height + gap;
        }
        row_height = row_height.max(size.y);
        if let Some(row) = rows.last_mut() {
            row.push((Rect::from_min_size(Pos2::new(x, y), size), i));
        }
        x += size.x + gap;
    }

    for row in &rows {
        let row_width = row.last().map(|(r, _)| r.right()).unwrap_or(0.0);
        let shift = if centered { (width - row_width).max(0.0) / 2.0 } else { 0.0 };
        for (rect, i) in row {
            let rect = rect.translate(pos.to_vec2() + egui::vec2(shift, 0.0));
            let (_, filled, color) = pills[*i];
            let radius = rect.height() / 2.0;
            if filled {
                painter.rect_filled(rect, radius, Theme::with_opacity(color, 0.25));
            }
            painter.rect_stroke(
                rect,
                radius,
                Stroke::new(1.0 * s, color),
                egui::StrokeKind::Inside,
            );
            painter.galley(rect.min + pad, galleys[*i].clone(), color);
        }
    }

    if galleys.is_empty() { 0.0 } else { y + row_height }
}

fn draw_flags(
    painter: &egui::Painter,
    on: &[&str],
    off: &[&str],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let lit = frame.color(frame.theme.tone(Tone::Green), 1.0);
    let unlit = frame.color(frame.theme.dim, 1.0);
    let pills: Vec<_> = on
        .iter()
        .map(|f| (*f, true, lit))
        .chain(off.iter().map(|f| (*f, false, unlit)))
        .collect();
    draw_pills(painter, &pills, frame, pos, width, false)
}

fn draw_chips(
    painter: &egui::Painter,
    items: &[&str],
    tone: Tone,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let color = frame.color(frame.theme.tone(tone), 1.0);
    let pills: Vec<_> = items.iter().map(|i| (*i, true, color)).collect();
    draw_pills(painter, &pills, frame, pos, width, true)
}

fn draw_callout(
    painter: &egui::Painter,
    tone: Tone,
    title: Option<&str>,
    lines: &[&str],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let pad = 12.0 * s;
    let accent = frame.color(frame.theme.tone(tone), 1.0);
    let text_color = frame.color(frame.theme.foreground, 1.0);
    let size = frame.theme.small_size * s;
    let bg = painter.add(Shape::Noop);
    let mut y = pos.y + pad;

    if let Some(title) = title {
        let galley = painter.layout(
            title.to_string(),
            FontId::proportional(size),
            accent,
            width - pad * 2.0,
        );
        let h = galley.rect.height();
        painter.galley(Pos2::new(pos.x + pad, y), galley, accent);
        y += h + 4.0 * s;
    }
    for line in lines {
        let galley = painter.layout(
            line.to_string(),
            FontId::proportional(size),
            text_color,
            width - pad * 2.0,
        );
        let h = galley.rect.height();
        painter.galley(Pos2::new(pos.x + pad, y), galley, text_color);
        y += h + 4.0 * s;
    }

    let height = y - 4.0 * s + pad - pos.y;
    let rect = Rect::from_min_size(pos, egui::vec2(width, height));
    painter.set(
        bg,
        panel_shape(
            rect,
            8.0 * s,
            frame.color(frame.theme.tone(tone), 0.15),
            Stroke::new(1.0 * s, frame.color(frame.theme.tone(tone), 0.5)),
        ),
    );
    height
}
