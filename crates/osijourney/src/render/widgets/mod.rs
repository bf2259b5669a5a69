//! Animated diagrams. Each keeps its state logic in plain functions so it can
//! be tested without a painter.

pub mod binary_rain;
pub mod encryption;
pub mod endpoints;
pub mod hex_viewer;
pub mod hop_diagram;
pub mod layer_card;
pub mod layer_list;
pub mod overhead;
pub mod packet_stack;
pub mod pam5;
pub mod signal_wave;

use eframe::egui::{self, Pos2};

use crate::deck::Widget;
use crate::render::SlideFrame;

/// Draw a content-table widget. Returns height used.
pub fn draw(
    painter: &egui::Painter,
    widget: &Widget,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    match widget {
        Widget::Endpoints { from, to, message } => {
            endpoints::draw(painter, from, to, message, frame, pos, width)
        }
        Widget::LayerList => layer_list::draw(painter, frame, pos, width),
        Widget::Encapsulation => {
            let (layers, current) = packet_stack::encapsulation_frame(frame.step);
            packet_stack::draw(
                painter,
                &layers,
                current,
                crate::deck::Direction::Down,
                frame,
                pos,
                width,
            )
        }
        Widget::LayerWalk { direction } => layer_card::draw(painter, *direction, frame, pos, width),
        Widget::SignalWave {
            active_after_step,
            caption,
        } => signal_wave::draw(
            painter,
            frame.step > *active_after_step,
            *caption,
            frame,
            pos,
            width,
        ),
        Widget::HopDiagram { nodes } => hop_diagram::draw(painter, nodes, frame, pos, width),
        Widget::HopCards { hops } => hop_diagram::draw_cards(painter, hops, frame, pos, width),
        Widget::Pam5Levels { levels } => pam5::draw(painter, levels, frame, pos, width),
        Widget::OverheadBars { rows } => overhead::draw(painter, rows, frame, pos, width),
        Widget::EncryptionLayers { bands } => encryption::draw(painter, bands, frame, pos, width),
    }
}
