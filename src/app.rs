use eframe::egui;

use crate::config::EditorConfig;
use crate::controller::InteractionController;
use crate::event::LoggingHandler;
use crate::file_handler::FileHandler;
use crate::geometry::Surface;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::reference_image::ReferenceImage;
use crate::renderer::OverlayRenderer;

/// The editor window: a tools panel on the left, the reference image with
/// its overlays in the middle.
#[derive(Debug)]
pub struct AnnotatorApp {
    pub(crate) controller: InteractionController,
    pub(crate) renderer: OverlayRenderer,
    pub(crate) input_handler: InputHandler,
    pub(crate) file_handler: FileHandler,
    /// Image waiting for a GPU upload on the next frame
    pending_image: Option<ReferenceImage>,
    /// Last export result, shown read-only in the tools panel
    pub(crate) export_text: String,
    /// Last image load failure, shown until the next successful load
    pub(crate) status: Option<String>,
}

impl AnnotatorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig, image: Option<ReferenceImage>) -> Self {
        let controller = InteractionController::new(Surface::new("", egui::Vec2::ZERO), config);
        controller.event_bus().subscribe(Box::new(LoggingHandler));

        let mut app = Self {
            controller,
            renderer: OverlayRenderer::new(),
            input_handler: InputHandler::new(),
            file_handler: FileHandler::new(),
            pending_image: None,
            export_text: String::new(),
            status: None,
        };
        if let Some(image) = image {
            app.load_image(&cc.egui_ctx, image);
        }
        app
    }

    /// Starts a fresh session on `image`
    pub fn load_image(&mut self, ctx: &egui::Context, image: ReferenceImage) {
        log::info!("Editing {}", image.name());
        self.controller.load_surface(image.surface());
        self.export_text.clear();
        self.status = None;
        self.pending_image = Some(image);
        ctx.request_repaint();
    }

    pub fn has_image(&self) -> bool {
        self.renderer.has_texture() || self.pending_image.is_some()
    }

    /// Serializes the scene into the output field
    pub fn request_export(&mut self) {
        self.export_text = self.controller.export();
        log::info!("Exported {} boxes", self.controller.scene().boxes().len());
    }

    fn upload_pending_image(&mut self, ctx: &egui::Context) {
        if let Some(image) = self.pending_image.take() {
            self.renderer.set_reference_image(ctx, &image);
        }
    }
}

impl eframe::App for AnnotatorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.file_handler.check_for_dropped_files(ctx) {
            match self.file_handler.take_reference_image() {
                Some(Ok(image)) => self.load_image(ctx, image),
                Some(Err(err)) => self.status = Some(format!("Could not open dropped image: {err}")),
                None => {}
            }
        }
        self.upload_pending_image(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
    }
}
