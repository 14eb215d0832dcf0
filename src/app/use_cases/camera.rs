//! Use-Case-Funktionen für Kamera-Steuerung.
//!
//! Jede Änderung aktualisiert den gecachten Projektor; die Anker folgen
//! über `overlay::refresh_all`.

use crate::app::AppState;
use crate::core::Camera3D;

/// Setzt die Kamera auf die konfigurierte Plan-Ansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = state.options.default_camera();
    state.view.sync_projector();
}

/// Verschiebt Kamera und Blickziel.
pub fn pan(state: &mut AppState, delta: glam::Vec3) {
    state.view.camera.pan(delta);
    state.view.sync_projector();
}

/// Rotiert die Kamera um das Blickziel.
pub fn orbit(state: &mut AppState, yaw: f32, pitch: f32) {
    state.view.camera.orbit(yaw, pitch);
    state.view.sync_projector();
}

/// Ändert den Kamera-Abstand innerhalb der konfigurierten Grenzen.
pub fn dolly(state: &mut AppState, factor: f32) {
    state.view.camera.dolly_clamped(
        factor,
        state.options.camera_distance_min,
        state.options.camera_distance_max,
    );
    state.view.sync_projector();
}

/// Übernimmt eine vom Host gesetzte Kamera.
pub fn set_camera(state: &mut AppState, camera: Camera3D) {
    state.view.camera = camera;
    state.view.sync_projector();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn reset_camera_restores_plan_view() {
        let mut state = AppState::new();
        pan(&mut state, Vec3::new(5.0, 0.0, 5.0));
        orbit(&mut state, 0.4, 0.2);

        reset_camera(&mut state);

        assert_eq!(state.view.camera, state.options.default_camera());
    }

    #[test]
    fn pan_updates_projector() {
        let mut state = AppState::new();
        let before = state.view.projector.to_screen(Vec3::ZERO);

        pan(&mut state, Vec3::new(1.0, 0.0, 0.0));

        let after = state.view.projector.to_screen(Vec3::ZERO);
        assert!(after.x < before.x);
    }

    #[test]
    fn dolly_respects_option_limits() {
        let mut state = AppState::new();
        state.options.camera_distance_min = 4.0;

        dolly(&mut state, 0.01);

        assert!((state.view.camera.distance() - 4.0).abs() < 1e-4);
    }
}
