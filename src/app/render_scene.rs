//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, ShapeMesh};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Shapes mit leerem Mesh-Puffer (zu wenige Punkte) werden ausgelassen.
pub fn build(state: &AppState) -> RenderScene {
    let meshes = state
        .shapes
        .values()
        .filter(|shape| !shape.geometry().is_empty())
        .map(|shape| ShapeMesh {
            shape_id: shape.id(),
            kind: shape.kind(),
            mesh: shape.geometry().clone(),
            selected: shape.is_selected(),
        })
        .collect();

    RenderScene {
        meshes,
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
    }
}
