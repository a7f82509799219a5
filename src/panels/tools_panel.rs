use eframe::egui;

use crate::AnnotatorApp;
use crate::state::GuideMode;

pub fn tools_panel(app: &mut AnnotatorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            if let Some(status) = &app.status {
                ui.colored_label(ui.visuals().error_fg_color, status);
                ui.separator();
            }

            ui.heading("Guides");

            let mut mode = app.controller.guide_mode();
            ui.horizontal(|ui| {
                ui.radio_value(&mut mode, GuideMode::Off, "Off");
                ui.radio_value(&mut mode, GuideMode::Horizontal, "Horizontal");
                ui.radio_value(&mut mode, GuideMode::Vertical, "Vertical");
            });
            if mode != app.controller.guide_mode() {
                log::info!("Guide mode selected from UI: {:?}", mode);
                app.controller.set_guide_mode(mode);
            }
            ui.label("Double-click a guide to remove it.");

            ui.separator();
            ui.heading("Boxes");

            let scene = app.controller.scene();
            egui::Grid::new("scene_stats_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Boxes");
                    ui.label(scene.boxes().len().to_string());
                    ui.end_row();

                    ui.label("Guides");
                    ui.label(scene.guides().len().to_string());
                    ui.end_row();

                    ui.label("Selected");
                    ui.label(scene.selected().map_or_else(|| "none".to_owned(), |id| id.to_string()));
                    ui.end_row();

                    ui.label("Gesture");
                    ui.label(app.controller.gesture().name());
                    ui.end_row();
                });

            let selected = scene.selected();
            if ui.add_enabled(selected.is_some(), egui::Button::new("Delete selected")).clicked() {
                if let Some(id) = selected {
                    app.controller.delete_box(id);
                }
            }

            ui.separator();
            ui.heading("Export");

            ui.horizontal(|ui| {
                if ui.add_enabled(app.has_image(), egui::Button::new("Export layout")).clicked() {
                    app.request_export();
                }
                if ui.add_enabled(!app.export_text.is_empty(), egui::Button::new("Copy")).clicked() {
                    ui.ctx().copy_text(app.export_text.clone());
                }
            });

            egui::ScrollArea::vertical()
                .id_salt("export_output")
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut app.export_text.as_str())
                            .code_editor()
                            .desired_width(f32::INFINITY)
                            .desired_rows(12),
                    );
                });
        });
}
