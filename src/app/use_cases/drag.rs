//! Use-Case-Funktionen für Pointer-Drags auf Ankern.
//!
//! Pointer-Down wird an alle Shapes verteilt: das Shape des Ziel-Ankers
//! übernimmt, alle anderen verwerfen ihr aktives Ziel. Moves und Ups gehen
//! ebenfalls an alle Shapes, reagieren aber nur mit aktivem Ziel.

use crate::app::AppState;
use crate::editor::AnchorTag;
use glam::Vec3;

/// Beginnt einen Pointer-Down auf `target` (oder ins Leere).
///
/// Ungültige Ziele werden vor jeder Zustandsänderung abgewiesen.
pub fn begin(state: &mut AppState, world_pos: Vec3, target: Option<AnchorTag>) -> anyhow::Result<()> {
    if let Some(tag) = target {
        anyhow::ensure!(
            state.shapes.contains_key(&tag.shape_id),
            "Anker verweist auf unbekanntes Shape {}",
            tag.shape_id
        );
        state.context.require(tag.shape_id)?;
    }

    let parts = state.editing_parts();
    parts.context.record_down(world_pos);

    for id in parts.context.subscribers() {
        if let Some(shape) = parts.shapes.get_mut(&id) {
            shape.on_cursor_down(world_pos);
        }
    }

    for shape in parts.shapes.values_mut() {
        if shape.on_pointer_down(target, parts.context)? {
            log::debug!("Shape {}: Drag beginnt ({:?})", shape.id(), shape.drag_state());
        }
    }
    Ok(())
}

/// Verteilt eine Cursor-Bewegung an alle Shapes.
pub fn update(state: &mut AppState, world_pos: Vec3) {
    let mut parts = state.editing_parts();
    parts.context.record_move(world_pos);
    for shape in parts.shapes.values_mut() {
        shape.on_cursor_move(world_pos, &mut parts.surface);
    }
}

/// Beendet den Pointer-Down: Snapshot erneuern, Anker vollständig nachziehen.
pub fn end(state: &mut AppState) {
    let mut parts = state.editing_parts();
    parts.context.record_up();
    for shape in parts.shapes.values_mut() {
        if shape.on_pointer_up(&mut parts.surface) {
            log::debug!("Shape {}: Drag beendet", shape.id());
        }
    }
}
