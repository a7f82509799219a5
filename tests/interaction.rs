use std::cell::RefCell;
use std::rc::Rc;

use egui::{Key, Modifiers, PointerButton, pos2, vec2};
use image_task_editor::{
    BoxId, EditorConfig, EditorEvent, EventHandler, Gesture, GuideMode, InputEvent, InteractionController,
    Orientation, Surface,
};

/// Collects every emitted event for later inspection
struct Recorder(Rc<RefCell<Vec<EditorEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn create_controller() -> InteractionController {
    InteractionController::new(Surface::new("task.png", vec2(800.0, 400.0)), EditorConfig::default())
}

fn record(controller: &InteractionController) -> Rc<RefCell<Vec<EditorEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    controller.event_bus().subscribe(Box::new(Recorder(events.clone())));
    events
}

fn press(controller: &mut InteractionController, x: f32, y: f32) {
    controller.handle_event(&InputEvent::PointerDown {
        position: pos2(x, y),
        button: PointerButton::Primary,
    });
}

fn move_to(controller: &mut InteractionController, x: f32, y: f32) {
    controller.handle_event(&InputEvent::PointerMove { position: pos2(x, y) });
}

fn release(controller: &mut InteractionController, x: f32, y: f32) {
    controller.handle_event(&InputEvent::PointerUp {
        position: pos2(x, y),
        button: PointerButton::Primary,
    });
}

fn click(controller: &mut InteractionController, x: f32, y: f32) {
    press(controller, x, y);
    release(controller, x, y);
}

fn command_key(controller: &mut InteractionController, key: Key, repeat: bool) {
    controller.handle_event(&InputEvent::KeyDown {
        key,
        modifiers: Modifiers::COMMAND,
        repeat,
    });
}

fn key_up(controller: &mut InteractionController, key: Key) {
    controller.handle_event(&InputEvent::KeyUp {
        key,
        modifiers: Modifiers::NONE,
    });
}

/// Places a default 60x30 box at (100, 100)
fn place_box(controller: &mut InteractionController) -> BoxId {
    click(controller, 100.0, 100.0);
    controller.scene().boxes().last().unwrap().id()
}

fn place_guide(controller: &mut InteractionController, mode: GuideMode, x: f32, y: f32) {
    controller.set_guide_mode(mode);
    click(controller, x, y);
    controller.set_guide_mode(GuideMode::Off);
}

fn assert_min_size(controller: &InteractionController) {
    for annotation in controller.scene().boxes() {
        assert!(annotation.size().x >= 30.0, "width {} below minimum", annotation.size().x);
        assert!(annotation.size().y >= 20.0, "height {} below minimum", annotation.size().y);
    }
}

#[test]
fn test_click_on_empty_surface_places_unselected_box() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    let annotation = controller.scene().get_box(id).unwrap();
    assert_eq!(annotation.position(), pos2(100.0, 100.0));
    assert_eq!(annotation.size(), vec2(60.0, 30.0));
    assert_eq!(annotation.content(), "");
    assert_eq!(controller.scene().selected(), None);
    assert!(controller.gesture().is_idle());
}

#[test]
fn test_click_on_box_selects_without_placing() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    // Body border, text field and resize handle each reach only the box
    click(&mut controller, 102.0, 115.0);
    click(&mut controller, 120.0, 115.0);
    click(&mut controller, 158.0, 128.0);

    assert_eq!(controller.scene().boxes().len(), 1);
    assert_eq!(controller.scene().selected(), Some(id));
}

#[test]
fn test_click_on_empty_surface_clears_selection() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);
    click(&mut controller, 102.0, 115.0);
    assert_eq!(controller.scene().selected(), Some(id));

    click(&mut controller, 400.0, 300.0);
    assert_eq!(controller.scene().selected(), None);
    assert_eq!(controller.scene().boxes().len(), 2);
}

#[test]
fn test_drag_moves_box_keeping_grab_point() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    press(&mut controller, 102.0, 115.0);
    assert!(matches!(controller.gesture(), Gesture::DraggingBox { box_id, .. } if *box_id == id));

    move_to(&mut controller, 252.0, 165.0);
    release(&mut controller, 252.0, 165.0);

    assert_eq!(controller.scene().get_box(id).unwrap().position(), pos2(250.0, 150.0));
    assert!(controller.gesture().is_idle());
}

#[test]
fn test_drag_clamps_to_surface() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    press(&mut controller, 102.0, 115.0);
    move_to(&mut controller, 2000.0, -300.0);
    release(&mut controller, 2000.0, -300.0);

    assert_eq!(controller.scene().get_box(id).unwrap().position(), pos2(740.0, 0.0));
}

#[test]
fn test_drag_raises_box_to_front() {
    let mut controller = create_controller();
    let lower = place_box(&mut controller);
    click(&mut controller, 400.0, 300.0);
    let upper = controller.scene().boxes().last().unwrap().id();

    click(&mut controller, 102.0, 115.0);
    let lower_z = controller.scene().get_box(lower).unwrap().z_order();
    let upper_z = controller.scene().get_box(upper).unwrap().z_order();
    assert!(lower_z > upper_z);
}

#[test]
fn test_snap_within_threshold() {
    let mut controller = create_controller();
    place_guide(&mut controller, GuideMode::Horizontal, 500.0, 207.0);
    let id = place_box(&mut controller);

    // grab offset is (2, 15); the anchor lands 7px from the guide
    press(&mut controller, 102.0, 115.0);
    move_to(&mut controller, 302.0, 215.0);
    assert_eq!(controller.scene().get_box(id).unwrap().position(), pos2(300.0, 207.0));

    // 9px away stays put
    move_to(&mut controller, 302.0, 213.0);
    assert_eq!(controller.scene().get_box(id).unwrap().position(), pos2(300.0, 198.0));
    release(&mut controller, 302.0, 213.0);
}

#[test]
fn test_vertical_guide_snaps_x_only() {
    let mut controller = create_controller();
    place_guide(&mut controller, GuideMode::Vertical, 305.0, 380.0);
    let id = place_box(&mut controller);

    press(&mut controller, 102.0, 115.0);
    move_to(&mut controller, 302.0, 215.0);
    release(&mut controller, 302.0, 215.0);

    assert_eq!(controller.scene().get_box(id).unwrap().position(), pos2(305.0, 200.0));
}

#[test]
fn test_resize_respects_minimum_size() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    press(&mut controller, 158.0, 128.0);
    assert!(matches!(controller.gesture(), Gesture::ResizingBox { .. }));

    move_to(&mut controller, 220.0, 180.0);
    assert_eq!(controller.scene().get_box(id).unwrap().size(), vec2(120.0, 80.0));

    move_to(&mut controller, 90.0, 90.0);
    assert_min_size(&controller);
    assert_eq!(controller.scene().get_box(id).unwrap().size(), vec2(30.0, 20.0));

    move_to(&mut controller, 5000.0, 5000.0);
    assert_eq!(controller.scene().get_box(id).unwrap().size(), vec2(700.0, 300.0));
    release(&mut controller, 5000.0, 5000.0);
}

#[test]
fn test_minimum_size_holds_across_gesture_sequence() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    let targets = [(0.0, 0.0), (800.0, 400.0), (-100.0, 50.0), (130.0, 101.0), (400.0, -20.0)];
    for (x, y) in targets {
        let annotation = controller.scene().get_box(id).unwrap();
        let handle = annotation.rect().max - vec2(2.0, 2.0);
        press(&mut controller, handle.x, handle.y);
        move_to(&mut controller, x, y);
        release(&mut controller, x, y);
        assert_min_size(&controller);

        let body = controller.scene().get_box(id).unwrap().position() + vec2(1.0, 1.0);
        press(&mut controller, body.x, body.y);
        move_to(&mut controller, x, y);
        release(&mut controller, x, y);
        assert_min_size(&controller);
    }
}

#[test]
fn test_copy_paste_offsets_and_raises() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);
    controller.set_box_content(id, "42");
    click(&mut controller, 102.0, 115.0);

    command_key(&mut controller, Key::C, false);
    let source_z = controller.scene().clipboard().unwrap().z_order;

    command_key(&mut controller, Key::V, false);
    key_up(&mut controller, Key::V);

    assert_eq!(controller.scene().boxes().len(), 2);
    let source = controller.scene().get_box(id).unwrap();
    let pasted = controller.scene().boxes().last().unwrap();
    assert_ne!(pasted.id(), id);
    assert_eq!(pasted.position(), source.position() + vec2(20.0, 20.0));
    assert_eq!(pasted.size(), source.size());
    assert_eq!(pasted.content(), "42");
    assert!(pasted.z_order() > source_z);
}

#[test]
fn test_paste_near_edge_keeps_exact_offset() {
    let mut controller = create_controller();
    // pulled back inside to (740, 370)
    click(&mut controller, 750.0, 375.0);
    let id = controller.scene().boxes()[0].id();
    assert_eq!(controller.scene().get_box(id).unwrap().position(), pos2(740.0, 370.0));

    click(&mut controller, 742.0, 385.0);
    assert_eq!(controller.scene().selected(), Some(id));
    command_key(&mut controller, Key::C, false);
    command_key(&mut controller, Key::V, false);
    key_up(&mut controller, Key::V);

    let pasted = controller.scene().boxes().last().unwrap();
    assert_ne!(pasted.id(), id);
    assert_eq!(pasted.position(), pos2(760.0, 390.0));
    assert_eq!(pasted.size(), vec2(60.0, 30.0));
    assert_min_size(&controller);

    // the overhanging copy is pulled back inside as soon as it is dragged
    let pasted_id = pasted.id();
    press(&mut controller, 762.0, 405.0);
    move_to(&mut controller, 763.0, 405.0);
    release(&mut controller, 763.0, 405.0);
    let moved = controller.scene().get_box(pasted_id).unwrap();
    assert_eq!(moved.position(), pos2(740.0, 370.0));
}

#[test]
fn test_held_paste_creates_one_box() {
    let mut controller = create_controller();
    place_box(&mut controller);
    click(&mut controller, 102.0, 115.0);
    command_key(&mut controller, Key::C, false);

    command_key(&mut controller, Key::V, false);
    for _ in 0..5 {
        command_key(&mut controller, Key::V, true);
    }
    assert_eq!(controller.scene().boxes().len(), 2);

    key_up(&mut controller, Key::V);
    command_key(&mut controller, Key::V, false);
    assert_eq!(controller.scene().boxes().len(), 3);
}

#[test]
fn test_keys_without_command_modifier_are_ignored() {
    let mut controller = create_controller();
    place_box(&mut controller);
    click(&mut controller, 102.0, 115.0);

    controller.handle_event(&InputEvent::KeyDown {
        key: Key::C,
        modifiers: Modifiers::NONE,
        repeat: false,
    });
    assert!(controller.scene().clipboard().is_none());
}

#[test]
fn test_paste_with_empty_clipboard_is_noop() {
    let mut controller = create_controller();
    command_key(&mut controller, Key::V, false);
    assert!(controller.scene().boxes().is_empty());
    assert!(!controller.state().paste_in_flight());
}

#[test]
fn test_deleting_selected_box_clears_selection() {
    let mut controller = create_controller();
    let events = record(&controller);
    let id = place_box(&mut controller);
    click(&mut controller, 102.0, 115.0);
    assert_eq!(controller.scene().selected(), Some(id));

    // delete control is the top-right square
    click(&mut controller, 155.0, 103.0);

    assert!(controller.scene().get_box(id).is_none());
    assert_eq!(controller.scene().selected(), None);

    command_key(&mut controller, Key::C, false);
    assert!(controller.scene().clipboard().is_none());
    assert!(!events.borrow().iter().any(|event| matches!(event, EditorEvent::Copied(_))));
    assert!(events.borrow().contains(&EditorEvent::BoxRemoved(id)));
    assert!(events.borrow().contains(&EditorEvent::SelectionChanged(None)));
}

#[test]
fn test_delete_mid_drag_turns_gesture_into_noop() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);

    press(&mut controller, 102.0, 115.0);
    controller.delete_box(id);

    let events = record(&controller);
    move_to(&mut controller, 300.0, 300.0);
    assert!(events.borrow().is_empty());

    release(&mut controller, 300.0, 300.0);
    assert!(controller.gesture().is_idle());
    assert!(controller.scene().boxes().is_empty());
}

#[test]
fn test_secondary_button_is_ignored() {
    let mut controller = create_controller();
    controller.handle_event(&InputEvent::PointerDown {
        position: pos2(100.0, 100.0),
        button: PointerButton::Secondary,
    });
    assert!(controller.scene().boxes().is_empty());
}

#[test]
fn test_press_outside_surface_does_nothing() {
    let mut controller = create_controller();
    click(&mut controller, 900.0, 100.0);
    assert!(controller.scene().boxes().is_empty());
}

#[test]
fn test_guide_mode_places_guides_instead_of_boxes() {
    let mut controller = create_controller();
    let events = record(&controller);

    controller.set_guide_mode(GuideMode::Vertical);
    press(&mut controller, 320.0, 50.0);
    // placement finishes on the press; no release is needed to get back to Idle
    assert!(controller.gesture().is_idle());
    assert!(events.borrow().iter().any(|event| matches!(
        event,
        EditorEvent::GestureChanged {
            old: Gesture::PlacingGuide { .. },
            new: Gesture::Idle,
        }
    )));
    release(&mut controller, 320.0, 50.0);

    // the orientation stays armed until changed
    click(&mut controller, 640.0, 50.0);

    let guides = controller.scene().guides();
    assert_eq!(guides.len(), 2);
    assert!(guides.iter().all(|guide| guide.orientation() == Orientation::Vertical));
    assert_eq!(guides[0].offset(), 320.0);
    assert!(controller.scene().boxes().is_empty());
    assert!(events.borrow().contains(&EditorEvent::GuideModeChanged(GuideMode::Vertical)));
}

#[test]
fn test_guide_drag_and_double_click_delete() {
    let mut controller = create_controller();
    place_guide(&mut controller, GuideMode::Horizontal, 500.0, 200.0);
    let guide = controller.scene().guides()[0].id();

    press(&mut controller, 100.0, 202.0);
    assert!(matches!(controller.gesture(), Gesture::DraggingGuide { .. }));
    move_to(&mut controller, 100.0, 252.0);
    assert_eq!(controller.scene().get_guide(guide).unwrap().offset(), 250.0);
    move_to(&mut controller, 100.0, 900.0);
    assert_eq!(controller.scene().get_guide(guide).unwrap().offset(), 400.0);
    move_to(&mut controller, 100.0, 302.0);
    release(&mut controller, 100.0, 302.0);
    assert_eq!(controller.scene().get_guide(guide).unwrap().offset(), 300.0);

    click(&mut controller, 50.0, 301.0);
    controller.handle_event(&InputEvent::DoubleClick {
        position: pos2(50.0, 301.0),
        button: PointerButton::Primary,
    });
    assert!(controller.scene().guides().is_empty());
    assert!(controller.scene().boxes().is_empty());
}

#[test]
fn test_press_during_gesture_is_ignored() {
    let mut controller = create_controller();
    place_box(&mut controller);

    press(&mut controller, 102.0, 115.0);
    // a second press without release must not start anything new
    press(&mut controller, 500.0, 300.0);
    assert_eq!(controller.scene().boxes().len(), 1);
    assert!(matches!(controller.gesture(), Gesture::DraggingBox { .. }));
}

#[test]
fn test_load_surface_resets_scene() {
    let mut controller = create_controller();
    place_box(&mut controller);
    controller.set_guide_mode(GuideMode::Horizontal);
    press(&mut controller, 10.0, 10.0);

    controller.load_surface(Surface::new("next.png", vec2(640.0, 480.0)));

    assert!(controller.scene().boxes().is_empty());
    assert!(controller.scene().guides().is_empty());
    assert!(controller.gesture().is_idle());
    assert_eq!(controller.scene().surface().source(), "next.png");
    assert_eq!(controller.guide_mode(), GuideMode::Horizontal);
}

#[test]
fn test_gesture_events_pair_up() {
    let mut controller = create_controller();
    let id = place_box(&mut controller);
    let events = record(&controller);

    press(&mut controller, 102.0, 115.0);
    move_to(&mut controller, 112.0, 125.0);
    release(&mut controller, 112.0, 125.0);

    let events = events.borrow();
    assert!(events.contains(&EditorEvent::SelectionChanged(Some(id))));
    assert!(events.contains(&EditorEvent::BoxMoved {
        id,
        position: pos2(110.0, 110.0),
    }));
    assert_eq!(
        events.last(),
        Some(&EditorEvent::GestureChanged {
            old: Gesture::DraggingBox {
                box_id: id,
                grab_offset: vec2(2.0, 15.0),
            },
            new: Gesture::Idle,
        })
    );
}
