//! Handler für Shape-Lebenszyklus, Selektion und Punkt-Änderungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Coordinate, PropertySet, ShapeId, ShapeKind};

/// Legt ein Shape an.
pub fn create(state: &mut AppState, kind: ShapeKind, points: Vec<Coordinate>, label: String) {
    use_cases::shapes::create_shape(state, kind, points, label);
}

/// Legt ein Shape aus einer Konfiguration an.
pub fn create_from_config(state: &mut AppState, config: PropertySet) {
    use_cases::shapes::create_from_config(state, config);
}

/// Hängt einen Kontrollpunkt an.
pub fn insert_point(
    state: &mut AppState,
    shape_id: ShapeId,
    point: Coordinate,
) -> anyhow::Result<()> {
    use_cases::shapes::insert_point(state, shape_id, point)
}

/// Hängt mehrere Kontrollpunkte an.
pub fn insert_points(
    state: &mut AppState,
    shape_id: ShapeId,
    points: &[Coordinate],
) -> anyhow::Result<()> {
    use_cases::shapes::insert_points(state, shape_id, points)
}

/// Ersetzt alle Kontrollpunkte.
pub fn set_points(
    state: &mut AppState,
    shape_id: ShapeId,
    points: Vec<Coordinate>,
) -> anyhow::Result<()> {
    use_cases::shapes::set_points(state, shape_id, points)
}

/// Entfernt alle Kontrollpunkte.
pub fn reset_points(state: &mut AppState, shape_id: ShapeId) -> anyhow::Result<()> {
    use_cases::shapes::reset_points(state, shape_id)
}

/// Schaltet den Edit-Modus.
pub fn set_selected(state: &mut AppState, shape_id: ShapeId, selected: bool) -> anyhow::Result<()> {
    use_cases::shapes::set_selected(state, shape_id, selected)
}

/// Schaltet Punkt- und Kanten-Bearbeitung.
pub fn set_editing_capabilities(
    state: &mut AppState,
    shape_id: ShapeId,
    vertices: bool,
    edges: bool,
) -> anyhow::Result<()> {
    use_cases::shapes::set_editing_capabilities(state, shape_id, vertices, edges)
}

/// Entsorgt ein Shape.
pub fn dispose(state: &mut AppState, shape_id: ShapeId) -> anyhow::Result<()> {
    use_cases::shapes::dispose(state, shape_id)
}
