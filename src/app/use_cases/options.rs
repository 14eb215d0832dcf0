//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::core::WorkingPlane;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in State, Kamera-Projektion und Shapes.
///
/// Farben gelten für Shapes ab der nächsten Selektion; die Anker-Größe ab
/// dem nächsten Overlay-Refresh.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.view.camera.fov_y = options.camera_fov_deg.to_radians();
    state.view.camera.near = options.camera_near;
    state.view.camera.far = options.camera_far;
    state.view.sync_projector();

    state.context.set_working_plane(WorkingPlane {
        elevation: options.working_plane_elevation,
    });
    for shape in state.shapes.values_mut() {
        shape.set_elevation(options.working_plane_elevation);
        shape.set_selection_color(options.selection_color);
    }

    state.options = options;
    log::info!("Optionen übernommen");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeKind;

    #[test]
    fn apply_options_updates_shape_elevation_and_camera() {
        let mut state = AppState::new();
        let id = state.spawn_shape(ShapeKind::Polygon, Vec::new(), "Raum");
        let mut options = EditorOptions::default();
        options.working_plane_elevation = 2.5;
        options.camera_fov_deg = 60.0;

        apply_options(&mut state, options);

        assert_eq!(state.shape(id).map(|s| s.elevation()), Some(2.5));
        assert_eq!(state.context.working_plane().elevation, 2.5);
        assert!((state.view.camera.fov_y - 60f32.to_radians()).abs() < 1e-6);
    }
}
