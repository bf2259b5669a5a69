use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use eframe::egui;
use tracing::{info, warn};

use crate::controller::ANIMATION_STEP_CAP;
use crate::deck::{Deck, FeatureLevel};
use crate::render::{self, chrome, Hits, SlideFrame};
use crate::theme::Theme;

/// Seconds on slide used for export, late enough that every animation has settled.
const SETTLED_ELAPSED: f32 = 30.0;

struct ExportApp {
    deck: Deck,
    theme: Theme,
    output_dir: PathBuf,
    quiet: bool,
    current_slide: usize,
    screenshot_requested: bool,
    /// Shared with `run`, which outlives the app.
    failures: Rc<Cell<usize>>,
    done: bool,
}

impl ExportApp {
    fn new(deck: Deck, output_dir: PathBuf, quiet: bool, failures: Rc<Cell<usize>>) -> Self {
        Self {
            theme: Theme::for_level(deck.level),
            deck,
            output_dir,
            quiet,
            current_slide: 0,
            screenshot_requested: false,
            failures,
            done: false,
        }
    }
}

/// `slide-01.png`, `slide-02.png`, ...
fn slide_filename(index: usize) -> String {
    format!("slide-{:02}.png", index + 1)
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Screenshot of the previous frame
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let filename = slide_filename(self.current_slide);
                    let path = self.output_dir.join(&filename);
                    match save_color_image(image, &path) {
                        Ok(()) => {
                            info!(path = %path.display(), "slide saved");
                            if !self.quiet {
                                eprintln!("  Saved {filename}");
                            }
                        }
                        Err(e) => {
                            warn!(path = %path.display(), "export failed: {e}");
                            eprintln!("  Failed to save {filename}: {e}");
                            self.failures.set(self.failures.get() + 1);
                        }
                    }
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.screenshot_requested = false;
            self.current_slide += 1;
            if self.current_slide >= self.deck.len() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                let scale = render::compute_scale(rect);
                chrome::draw_backdrop(painter, &self.theme, rect);

                if let Some(slide) = self.deck.get(self.current_slide) {
                    let frame = SlideFrame {
                        theme: &self.theme,
                        scale,
                        opacity: 1.0,
                        step: ANIMATION_STEP_CAP,
                        elapsed: SETTLED_ELAPSED,
                    };
                    render::render_slide(painter, slide, &frame, rect, &mut Hits::new());
                }
            });

        // Requested after rendering; arrives next frame
        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

fn save_color_image(image: &egui::ColorImage, path: &Path) -> anyhow::Result<()> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)?;
    Ok(())
}

pub fn run(
    level: FeatureLevel,
    output_dir: PathBuf,
    width: u32,
    height: u32,
    quiet: bool,
) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Export size must be non-zero, got {width}x{height}");
    }
    let deck = Deck::new(level);
    std::fs::create_dir_all(&output_dir)?;

    if !quiet {
        eprintln!(
            "Exporting {} slides ({level}) to {} ({}x{})",
            deck.len(),
            output_dir.display(),
            width,
            height,
        );
    }
    info!(%level, dir = %output_dir.display(), "export started");

    let title = format!("{} export", deck.title());
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(&title)
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let failures = Rc::new(Cell::new(0usize));
    let app_failures = failures.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ExportApp::new(deck, output_dir, quiet, app_failures)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    if failures.get() > 0 {
        anyhow::bail!("{} slide(s) could not be saved", failures.get());
    }
    if !quiet {
        eprintln!("Export complete.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames_are_one_indexed_and_padded() {
        assert_eq!(slide_filename(0), "slide-01.png");
        assert_eq!(slide_filename(15), "slide-16.png");
    }

    #[test]
    fn test_zero_size_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let err = run(FeatureLevel::Base, out.clone(), 0, 1080, true).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
        assert!(!out.exists());
    }

    #[test]
    fn test_save_color_image_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let image = egui::ColorImage::from_rgba_unmultiplied([2, 3], &[255, 0, 0, 255].repeat(6));
        save_color_image(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
