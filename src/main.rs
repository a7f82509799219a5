use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image_task_editor::{AnnotatorApp, EditorConfig, ReferenceImage};

#[derive(Parser)]
#[command(name = "image-task-editor", version, about = "Place answer boxes on a reference image and export the layout")]
struct Cli {
    /// Reference image to open at startup; images can also be dropped onto the window
    image: Option<PathBuf>,
    /// JSON file overriding the editor defaults
    #[arg(long, env = "IMAGE_TASK_EDITOR_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match EditorConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => EditorConfig::default(),
    };

    // A bad startup image is not fatal; the window opens empty instead
    let image = cli.image.as_ref().and_then(|path| match ReferenceImage::load(path) {
        Ok(image) => Some(image),
        Err(err) => {
            log::error!("Could not open {}: {}", path.display(), err);
            None
        }
    });

    let title = match &image {
        Some(image) => format!("Image task editor - {}", image.name()),
        None => "Image task editor".to_owned(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(&title),
        ..Default::default()
    };

    let result = eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(AnnotatorApp::new(cc, config, image)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Editor window failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
