use eframe::egui;

use crate::AnnotatorApp;
use crate::element::BoxId;
use crate::export;
use crate::input::{InputEvent, is_command};

pub fn central_panel(app: &mut AnnotatorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if !app.has_image() {
            ui.centered_and_justified(|ui| {
                ui.label("Drop a reference image here, or pass one on the command line.");
            });
            return;
        }

        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let surface_size = app.controller.scene().surface().size();
                let (surface_rect, _response) = ui.allocate_exact_size(surface_size, egui::Sense::click_and_drag());
                let visible_rect = surface_rect.intersect(ui.clip_rect());
                app.input_handler.set_surface_rect(surface_rect, visible_rect);

                // Handle input
                let events = app.input_handler.process_input(ctx);
                let focused = ctx.memory(|memory| memory.focused());
                for event in events {
                    if !routes_to_editor(&event, focused, app.controller.scene().selected()) {
                        continue;
                    }
                    dispatch(app, ctx, &event);
                }

                // Render the surface
                app.renderer.render(
                    ui.painter(),
                    surface_rect.min,
                    app.controller.scene(),
                    app.controller.layout(),
                    app.controller.gesture(),
                );

                box_text_fields(app, ui, surface_rect.min);
            });
    });
}

/// Key-downs stay with a focused text field, except that copy and paste
/// still reach the editor while the focus is the selected box's own field.
fn routes_to_editor(event: &InputEvent, focused: Option<egui::Id>, selected: Option<BoxId>) -> bool {
    let InputEvent::KeyDown { key, modifiers, .. } = event else {
        return true;
    };
    let Some(focused) = focused else {
        return true;
    };
    matches!(key, egui::Key::C | egui::Key::V)
        && is_command(modifiers)
        && selected.is_some_and(|id| focused == box_text_id(id))
}

fn box_text_id(id: BoxId) -> egui::Id {
    egui::Id::new(("box_text", id))
}

fn dispatch(app: &mut AnnotatorApp, ctx: &egui::Context, event: &InputEvent) {
    let copy_requested = matches!(
        event,
        InputEvent::KeyDown { key: egui::Key::C, modifiers, .. } if is_command(modifiers)
    );
    app.controller.handle_event(event);

    // Mirror the copied box into the system clipboard; the windowing layer
    // only reports a paste when the system clipboard holds text
    if copy_requested {
        let scene = app.controller.scene();
        if let Some(snapshot) = scene.clipboard() {
            ctx.copy_text(export::field_record(snapshot.rect(), &snapshot.content, scene.surface()));
        }
    }
}

/// One single-line editor per box, laid over the box's text area
fn box_text_fields(app: &mut AnnotatorApp, ui: &mut egui::Ui, origin: egui::Pos2) {
    let layout = *app.controller.layout();
    let offset = origin.to_vec2();
    let fields: Vec<(BoxId, egui::Rect, String)> = app
        .controller
        .scene()
        .boxes()
        .iter()
        .map(|annotation| {
            let rect = layout.text_field_rect(annotation.rect()).translate(offset);
            (annotation.id(), rect, annotation.content().to_owned())
        })
        .collect();

    for (id, rect, mut text) in fields {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            continue;
        }
        let response = ui.put(
            rect,
            egui::TextEdit::singleline(&mut text)
                .id(box_text_id(id))
                .frame(false)
                .desired_width(rect.width()),
        );
        if response.changed() {
            app.controller.set_box_content(id, text);
        }
    }
}
