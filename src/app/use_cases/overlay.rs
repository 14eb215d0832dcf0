//! Use-Case-Funktionen für das Anker-Overlay.

use crate::app::AppState;

/// Positioniert alle Anker aller Shapes im Edit-Modus neu (Kamera-Tick).
///
/// Shapes ohne BREP-Snapshot werden übersprungen.
pub fn refresh_all(state: &mut AppState) {
    let mut parts = state.editing_parts();
    for shape in parts.shapes.values_mut() {
        shape.refresh_overlay(&mut parts.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases;
    use crate::core::ShapeKind;
    use glam::Vec3;

    #[test]
    fn refresh_follows_camera_pan() {
        let mut state = AppState::new();
        let id = state.spawn_shape(
            ShapeKind::Polyline,
            vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
            "Linie",
        );
        use_cases::shapes::set_selected(&mut state, id, true).expect("Selektion erwartet");
        let before = state
            .shape(id)
            .and_then(|s| s.overlay().point_anchor(0))
            .map(|a| a.style.center())
            .expect("Anker erwartet");

        use_cases::camera::pan(&mut state, Vec3::new(1.0, 0.0, 0.0));
        refresh_all(&mut state);

        let after = state
            .shape(id)
            .and_then(|s| s.overlay().point_anchor(0))
            .map(|a| a.style.center())
            .expect("Anker erwartet");
        assert!(after.x < before.x);
        assert_eq!(state.shape(id).map(|s| s.coordinates().len()), Some(2));
    }

    #[test]
    fn refresh_without_selection_creates_nothing() {
        let mut state = AppState::new();
        state.spawn_shape(ShapeKind::Polygon, Vec::new(), "Leer");

        refresh_all(&mut state);

        assert_eq!(state.overlay.element_count(), 0);
    }
}
