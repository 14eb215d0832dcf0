//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe und den Projektor.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    state.view.sync_projector();
}
