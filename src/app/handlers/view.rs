//! Handler für Kamera, Viewport, Overlay-Refresh und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Camera3D;
use crate::shared::EditorOptions;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec3) {
    use_cases::camera::pan(state, delta);
}

/// Rotiert die Kamera um ihr Blickziel.
pub fn orbit(state: &mut AppState, yaw: f32, pitch: f32) {
    use_cases::camera::orbit(state, yaw, pitch);
}

/// Ändert den Kamera-Abstand.
pub fn dolly(state: &mut AppState, factor: f32) {
    use_cases::camera::dolly(state, factor);
}

/// Übernimmt eine Host-Kamera.
pub fn set_camera(state: &mut AppState, camera: Camera3D) {
    use_cases::camera::set_camera(state, camera);
}

/// Positioniert alle Anker neu.
pub fn refresh_overlay(state: &mut AppState) {
    use_cases::overlay::refresh_all(state);
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::options::apply_options(state, options);
}
