use crate::draw::color::{BLUE, GREEN, RED};
use crate::draw::{DrawAttributes, GeometricObject};
use crate::input::events::{InputEvent, Key, MouseButton};
use crate::input::state::EditorState;
use crate::input::tool::{DragPhase, Tool, ToolKind};
use crate::scene::Scene;
use crate::ui::{build_toolbar, Command};
use crate::util::Point;

fn editor() -> EditorState {
    EditorState::with_defaults(DrawAttributes::default(), vec![])
}

fn move_to(state: &mut EditorState, x: i32, y: i32) {
    state.dispatch_event(InputEvent::PointerMoved { x, y });
}

fn press(state: &mut EditorState, button: MouseButton) {
    state.dispatch_event(InputEvent::ButtonPressed { button });
}

fn release(state: &mut EditorState, button: MouseButton) {
    state.dispatch_event(InputEvent::ButtonReleased { button });
}

fn drag(state: &mut EditorState, from: (i32, i32), to: (i32, i32)) {
    move_to(state, from.0, from.1);
    press(state, MouseButton::Left);
    move_to(state, to.0, to.1);
    release(state, MouseButton::Left);
}

#[test]
fn segment_drag_commits_one_segment() {
    let mut state = editor();
    state.set_tool(ToolKind::Segment);
    drag(&mut state, (0, 0), (30, 40));

    assert_eq!(state.scene.len(), 1);
    assert_eq!(
        state.scene.get(0),
        Some(&GeometricObject::Segment {
            attrs: state.options,
            p1: Point::new(0, 0),
            p2: Point::new(30, 40),
        })
    );
    assert_eq!(state.tool, Tool::Segment { phase: DragPhase::Wait });
}

#[test]
fn release_without_press_commits_nothing() {
    let mut state = editor();
    state.set_tool(ToolKind::Rect);
    move_to(&mut state, 10, 10);
    release(&mut state, MouseButton::Left);
    assert!(state.scene.is_empty());
}

#[test]
fn non_primary_press_does_not_anchor_a_drag() {
    let mut state = editor();
    state.set_tool(ToolKind::Circle);
    move_to(&mut state, 5, 5);
    press(&mut state, MouseButton::Middle);
    assert_eq!(state.tool, Tool::Circle { phase: DragPhase::Wait });
}

#[test]
fn committed_objects_keep_the_options_of_their_commit() {
    let mut state = editor();
    state.set_tool(ToolKind::Rect);
    drag(&mut state, (0, 0), (10, 10));

    let before = *state.scene.get(0).unwrap().attributes();
    state.handle_command(Command::CycleBorderColor);
    state.handle_command(Command::ToggleFilled);
    assert_eq!(state.scene.get(0).unwrap().attributes(), &before);
}

#[test]
fn polyline_accumulates_and_commits_on_right_click() {
    let mut state = editor();
    state.set_tool(ToolKind::Polyline);
    for (x, y) in [(0, 0), (10, 0), (10, 10)] {
        move_to(&mut state, x, y);
        press(&mut state, MouseButton::Left);
        release(&mut state, MouseButton::Left);
    }
    press(&mut state, MouseButton::Right);

    assert_eq!(state.scene.len(), 1);
    assert_eq!(
        state.scene.get(0),
        Some(&GeometricObject::Polyline {
            attrs: state.options,
            points: vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
        })
    );
    assert_eq!(state.tool, Tool::Polyline { points: vec![] });
}

#[test]
fn polyline_commits_on_return_key() {
    let mut state = editor();
    state.set_tool(ToolKind::Polyline);
    move_to(&mut state, 0, 0);
    press(&mut state, MouseButton::Left);
    move_to(&mut state, 20, 0);
    press(&mut state, MouseButton::Left);
    state.dispatch_event(InputEvent::KeyPressed { key: Key::Return });

    assert_eq!(state.scene.len(), 1);
}

#[test]
fn polyline_with_one_vertex_is_discarded() {
    let mut state = editor();
    state.set_tool(ToolKind::Polyline);
    move_to(&mut state, 0, 0);
    press(&mut state, MouseButton::Left);
    press(&mut state, MouseButton::Right);

    assert!(state.scene.is_empty());
    assert_eq!(state.tool, Tool::Polyline { points: vec![] });
}

#[test]
fn switching_tools_discards_the_interaction_in_progress() {
    let mut state = editor();
    state.set_tool(ToolKind::Rect);
    move_to(&mut state, 5, 5);
    press(&mut state, MouseButton::Left);
    state.set_tool(ToolKind::Segment);
    move_to(&mut state, 50, 50);
    release(&mut state, MouseButton::Left);

    assert!(state.scene.is_empty());
}

fn editor_with_two_rects() -> EditorState {
    let rect = |x1, y1, x2, y2| GeometricObject::Rect {
        attrs: DrawAttributes::default(),
        p1: Point::new(x1, y1),
        p2: Point::new(x2, y2),
    };
    let scene = Scene::from_objects(vec![rect(0, 0, 100, 100), rect(200, 200, 300, 300)]);
    let mut state = EditorState::with_scene(scene, DrawAttributes::default(), vec![]);
    state.set_tool(ToolKind::Select);
    state
}

fn click(state: &mut EditorState, x: i32, y: i32) {
    move_to(state, x, y);
    press(state, MouseButton::Left);
    release(state, MouseButton::Left);
}

#[test]
fn select_release_toggles_the_selection() {
    let mut state = editor_with_two_rects();

    click(&mut state, 50, 50);
    assert_eq!(state.selection(), Some(0));

    // Same spot again toggles off.
    click(&mut state, 50, 50);
    assert_eq!(state.selection(), None);

    click(&mut state, 250, 250);
    assert_eq!(state.selection(), Some(1));

    // A miss clears the selection.
    click(&mut state, 500, 500);
    assert_eq!(state.selection(), None);
}

#[test]
fn reorder_keeps_tracking_the_selected_object() {
    let mut state = editor_with_two_rects();
    click(&mut state, 50, 50);
    assert_eq!(state.selection(), Some(0));

    state.bring_selection_to_front();
    assert_eq!(state.selection(), Some(1));
    assert!(matches!(
        state.scene.get(1),
        Some(GeometricObject::Rect { p1, .. }) if *p1 == Point::new(0, 0)
    ));

    state.send_selection_to_back();
    assert_eq!(state.selection(), Some(0));
}

#[test]
fn deleting_the_selection_clears_it_and_later_ops_are_noops() {
    let mut state = editor_with_two_rects();
    click(&mut state, 50, 50);

    state.delete_selection();
    assert_eq!(state.selection(), None);
    assert_eq!(state.scene.len(), 1);

    state.delete_selection();
    state.bring_selection_to_front();
    state.send_selection_to_back();
    assert_eq!(state.scene.len(), 1);
}

#[test]
fn delete_command_without_selection_clears_the_scene() {
    let mut state = editor_with_two_rects();
    state.handle_command(Command::Delete);
    assert!(state.scene.is_empty());
}

#[test]
fn delete_command_with_selection_removes_only_it() {
    let mut state = editor_with_two_rects();
    click(&mut state, 250, 250);
    state.handle_command(Command::Delete);
    assert_eq!(state.scene.len(), 1);
    assert_eq!(state.selection(), None);
}

#[test]
fn option_commands_cycle_the_palettes() {
    let mut state = editor();

    state.handle_command(Command::CycleBorderColor);
    assert_eq!(state.options.border_color, GREEN);
    state.handle_command(Command::CycleBorderColor);
    assert_eq!(state.options.border_color, BLUE);

    state.handle_command(Command::CycleFillColor);
    assert_eq!(state.options.fill_color, RED);

    assert_eq!(state.options.thickness, 2);
    state.handle_command(Command::CycleThickness);
    assert_eq!(state.options.thickness, 2);
    state.handle_command(Command::CycleThickness);
    assert_eq!(state.options.thickness, 3);

    assert!(!state.options.fill_enabled);
    state.handle_command(Command::ToggleFilled);
    assert!(state.options.fill_enabled);
}

#[test]
fn press_inside_a_button_runs_its_command_instead_of_the_tool() {
    let mut state =
        EditorState::with_defaults(DrawAttributes::default(), build_toolbar(80));
    state.set_tool(ToolKind::Rect);

    // Button 4 is the select-tool button.
    move_to(&mut state, 4 * 80 + 40, 40);
    press(&mut state, MouseButton::Left);

    assert_eq!(state.tool.kind(), ToolKind::Select);
    // The press was consumed by the button, so no drag was anchored and the
    // following release selects rather than commits.
    release(&mut state, MouseButton::Left);
    assert!(state.scene.is_empty());
}

#[test]
fn from_config_loads_the_startup_scene_and_toolbar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("startup.txt");
    std::fs::write(
        &path,
        "RECT 0 255 255 255 1 0 255 0 255 6 100 100 300 200\n",
    )
    .unwrap();

    let mut config = crate::Config::default();
    config.scene.startup_path = Some(path);
    let state = EditorState::from_config(&config).unwrap();

    assert_eq!(state.scene.len(), 1);
    assert_eq!(state.buttons.len(), 12);
    assert_eq!(state.options, DrawAttributes::default());
}

#[test]
fn from_config_with_a_missing_startup_scene_starts_empty() {
    let mut config = crate::Config::default();
    config.scene.startup_path = Some("/nonexistent/startup.txt".into());
    let state = EditorState::from_config(&config).unwrap();
    assert!(state.scene.is_empty());
}

#[test]
fn press_outside_all_buttons_reaches_the_tool() {
    let mut state =
        EditorState::with_defaults(DrawAttributes::default(), build_toolbar(80));
    state.set_tool(ToolKind::Rect);
    drag(&mut state, (100, 300), (150, 350));
    assert_eq!(state.scene.len(), 1);
}
