use eframe::egui;

use crate::error::ImageLoadError;
use crate::reference_image::ReferenceImage;

/// Picks up reference images dropped onto the window
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any new files arrived
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Decode the pending drops and return the outcome for the last image.
    ///
    /// Only one reference image is edited at a time, so when several files
    /// are dropped together the last image file wins. `None` when no dropped
    /// file looked like an image.
    pub fn take_reference_image(&mut self) -> Option<Result<ReferenceImage, ImageLoadError>> {
        let mut outcome = None;

        for file in self.dropped_files.drain(..) {
            let file_name = display_name(&file);

            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }

            let result = if let Some(bytes) = &file.bytes {
                log::info!("Processing image from memory: {} ({} bytes)", file_name, bytes.len());
                ReferenceImage::from_bytes(file_name.clone(), bytes)
            } else if let Some(path) = &file.path {
                ReferenceImage::load(path)
            } else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
                continue;
            };

            if let Err(err) = &result {
                log::error!("Failed to load {}: {}", file_name, err);
            }
            outcome = Some(result);
        }

        outcome
    }

    /// Darken the window and list the files while they hover over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop reference image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(name) = file.path.as_ref().and_then(|path| path.file_name()) {
        name.to_string_lossy().into_owned()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let extension = file
        .path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .or_else(|| file.name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()));
    matches!(
        extension.as_deref(),
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
    )
}
