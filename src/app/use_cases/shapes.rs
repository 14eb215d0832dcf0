//! Use-Case-Funktionen für Shape-Lebenszyklus und programmatische Änderungen.

use crate::app::AppState;
use crate::core::{Coordinate, PropertySet, ShapeId, ShapeKind};
use crate::editor::{EditableShape, OverlaySurface};

/// Legt ein Shape an.
pub fn create_shape(
    state: &mut AppState,
    kind: ShapeKind,
    points: Vec<Coordinate>,
    label: String,
) -> ShapeId {
    state.spawn_shape(kind, points, label)
}

/// Legt ein Shape aus einer gespeicherten Konfiguration an.
pub fn create_from_config(state: &mut AppState, config: PropertySet) -> ShapeId {
    state.spawn_from_config(config)
}

/// Hängt einen Kontrollpunkt an ein Shape an.
pub fn insert_point(state: &mut AppState, shape_id: ShapeId, point: Coordinate) -> anyhow::Result<()> {
    with_shape(state, shape_id, |shape, surface| shape.insert_point(point, surface))
}

/// Hängt mehrere Kontrollpunkte an ein Shape an.
pub fn insert_points(
    state: &mut AppState,
    shape_id: ShapeId,
    points: &[Coordinate],
) -> anyhow::Result<()> {
    with_shape(state, shape_id, |shape, surface| shape.insert_points(points, surface))
}

/// Ersetzt alle Kontrollpunkte eines Shapes.
pub fn set_points(
    state: &mut AppState,
    shape_id: ShapeId,
    points: Vec<Coordinate>,
) -> anyhow::Result<()> {
    with_shape(state, shape_id, |shape, surface| shape.set_points(points, surface))
}

/// Entfernt alle Kontrollpunkte eines Shapes.
pub fn reset_points(state: &mut AppState, shape_id: ShapeId) -> anyhow::Result<()> {
    with_shape(state, shape_id, |shape, surface| shape.reset_points(surface))
}

/// Schaltet den Edit-Modus eines Shapes.
pub fn set_selected(state: &mut AppState, shape_id: ShapeId, selected: bool) -> anyhow::Result<()> {
    with_shape(state, shape_id, |shape, surface| {
        shape.set_selected(selected, surface)
    })
}

/// Schaltet Punkt- und Kanten-Bearbeitung eines Shapes.
///
/// Ist das Shape bereits im Edit-Modus, werden die Anker neu aufgebaut.
pub fn set_editing_capabilities(
    state: &mut AppState,
    shape_id: ShapeId,
    vertices: bool,
    edges: bool,
) -> anyhow::Result<()> {
    with_shape(state, shape_id, |shape, surface| {
        shape.set_editing_capabilities(vertices, edges);
        if shape.is_selected() {
            shape.set_selected(false, surface);
            shape.set_selected(true, surface);
        }
    })
}

/// Entsorgt ein Shape und entfernt es aus dem State.
pub fn dispose(state: &mut AppState, shape_id: ShapeId) -> anyhow::Result<()> {
    let Some(mut shape) = state.shapes.shift_remove(&shape_id) else {
        anyhow::bail!("Shape {} existiert nicht", shape_id);
    };
    shape.dispose(&mut state.overlay, &mut state.context);
    Ok(())
}

fn with_shape<F>(state: &mut AppState, shape_id: ShapeId, f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut EditableShape, &mut OverlaySurface),
{
    let mut parts = state.editing_parts();
    let Some(shape) = parts.shapes.get_mut(&shape_id) else {
        anyhow::bail!("Shape {} existiert nicht", shape_id);
    };
    f(shape, &mut parts.surface);
    Ok(())
}
