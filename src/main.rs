//! OpenPlans Editor (Headless-Demo).
//!
//! Spielt eine Bearbeitungs-Session ohne Renderer durch: Quadrat anlegen,
//! selektieren, Ecke und Kante ziehen, Kamera rotieren. Ausgegeben werden
//! die resultierenden Koordinaten, der BREP-Snapshot und das Overlay-CSS.

use glam::{Vec2, Vec3};
use openplans_editor::editor::OverlayChange;
use openplans_editor::{
    AnchorTag, AppController, AppIntent, AppState, EditorOptions, ShapeId, ShapeKind,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "OpenPlans Editor v{} startet (headless)...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    let shape_id = run_session(&mut controller, &mut state)?;
    print_report(&controller, &mut state, shape_id)?;
    Ok(())
}

fn run_session(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<ShapeId> {
    controller.handle_intent(state, AppIntent::ViewportResized { size: [1280.0, 720.0] })?;

    let shape_id = state.next_shape_id;
    controller.handle_intent(
        state,
        AppIntent::CreateShapeRequested {
            kind: ShapeKind::Polygon,
            points: vec![
                Vec3::new(-2.0, 0.0, -2.0),
                Vec3::new(2.0, 0.0, -2.0),
                Vec3::new(2.0, 0.0, 2.0),
                Vec3::new(-2.0, 0.0, 2.0),
            ],
            label: "Raum".into(),
        },
    )?;
    controller.handle_intent(
        state,
        AppIntent::ShapeSelectionRequested {
            shape_id,
            selected: true,
        },
    )?;

    // Ecke 2 über den Overlay-Treffer ziehen
    let corner = anchor_center(state, AnchorTag::point(shape_id, 2))?;
    let world_pos = state
        .view
        .camera
        .screen_to_plane(corner, state.view.viewport(), state.context.working_plane())
        .unwrap_or(Vec3::new(2.0, 0.0, 2.0));
    controller.handle_intent(
        state,
        AppIntent::PointerDown {
            screen_pos: corner,
            world_pos,
        },
    )?;
    controller.handle_intent(
        state,
        AppIntent::PointerMove {
            world_pos: Vec3::new(3.0, 0.0, 3.0),
        },
    )?;
    controller.handle_intent(state, AppIntent::PointerUp)?;

    // Kante 0 um eine Einheit nach -Z verschieben
    controller.handle_intent(
        state,
        AppIntent::AnchorPointerDown {
            tag: AnchorTag::edge(shape_id, 0),
            world_pos: Vec3::new(0.0, 0.0, -2.0),
        },
    )?;
    controller.handle_intent(
        state,
        AppIntent::PointerMove {
            world_pos: Vec3::new(0.0, 0.0, -3.0),
        },
    )?;
    controller.handle_intent(state, AppIntent::PointerUp)?;

    controller.handle_intent(state, AppIntent::CameraOrbit { yaw: 0.3, pitch: 0.2 })?;
    Ok(shape_id)
}

fn anchor_center(state: &AppState, tag: AnchorTag) -> anyhow::Result<Vec2> {
    state
        .shape(tag.shape_id)
        .and_then(|s| s.overlay().point_anchor(tag.index))
        .map(|a| a.style.center())
        .ok_or_else(|| anyhow::anyhow!("Kein Anker für {:?}", tag))
}

fn print_report(
    controller: &AppController,
    state: &mut AppState,
    shape_id: ShapeId,
) -> anyhow::Result<()> {
    let shape = state
        .shape(shape_id)
        .ok_or_else(|| anyhow::anyhow!("Shape {} fehlt", shape_id))?;

    println!("Koordinaten:");
    for (i, p) in shape.coordinates().iter().enumerate() {
        println!("  {}: ({:.2}, {:.2}, {:.2})", i, p.x, p.y, p.z);
    }

    if let Some(brep) = shape.get_brep_data() {
        println!("BREP: {}", brep.to_json()?);
    }

    println!("Overlay:");
    for (element, el) in state.overlay.elements() {
        if let Some(style) = el.style {
            println!(
                "  #{} {:?}[{}]: {}",
                element,
                el.tag.kind,
                el.tag.index,
                style.to_css()
            );
        }
    }

    let changes = state.overlay.drain_changes();
    let removed = changes
        .iter()
        .filter(|c| matches!(c, OverlayChange::Removed { .. }))
        .count();
    log::info!(
        "Overlay-Feed: {} Änderungen, davon {} entfernte Elemente",
        changes.len(),
        removed
    );

    let scene = controller.build_render_scene(state);
    if scene.has_geometry() {
        println!(
            "Render-Szene: {} Mesh(es), {} Commands ausgeführt ({} Pointer-Sessions)",
            scene.meshes.len(),
            state.command_log.len(),
            state.command_log.pointer_sessions()
        );
    } else {
        println!("Render-Szene leer");
    }

    Ok(())
}
