//! Welt → Screen-Projektion für das Anker-Overlay.

use super::camera::Camera3D;
use glam::{Mat4, Vec2, Vec3};

/// Projiziert Welt-Koordinaten in Viewport-Pixel (Ursprung oben links).
///
/// Hält die View-Projection-Matrix des aktuellen Frames, damit pro Anker
/// nur noch eine Matrix-Multiplikation anfällt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjector {
    view_projection: Mat4,
    viewport: Vec2,
}

impl ScreenProjector {
    /// Erstellt einen Projektor für Kamera und Viewport.
    pub fn new(camera: &Camera3D, viewport: Vec2) -> Self {
        Self {
            view_projection: camera.view_projection(viewport),
            viewport,
        }
    }

    /// Aktualisiert die gecachte Matrix nach Kamera- oder Viewport-Änderung.
    pub fn update(&mut self, camera: &Camera3D, viewport: Vec2) {
        self.view_projection = camera.view_projection(viewport);
        self.viewport = viewport;
    }

    /// Viewport-Größe in Pixeln
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Projiziert einen Welt-Punkt auf den Bildschirm.
    ///
    /// NDC `[-1, 1]` wird horizontal auf `[0, Breite]` und vertikal auf
    /// `[Höhe, 0]` abgebildet.
    #[inline]
    pub fn to_screen(&self, world: Vec3) -> Vec2 {
        let ndc = self.view_projection.project_point3(world);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }
}

/// Einmalige Projektion ohne gecachten Projektor.
pub fn to_screen_position(world: Vec3, camera: &Camera3D, viewport: Vec2) -> Vec2 {
    ScreenProjector::new(camera, viewport).to_screen(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_camera() -> Camera3D {
        Camera3D::plan(90.0, 0.1, 1000.0)
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let pos = to_screen_position(Vec3::ZERO, &test_camera(), Vec2::new(800.0, 600.0));
        assert_relative_eq!(pos.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(pos.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_plan_view_maps_positive_z_downwards() {
        let projector = ScreenProjector::new(&test_camera(), Vec2::new(800.0, 800.0));
        let pos = projector.to_screen(Vec3::new(2.0, 0.0, 3.0));
        assert_relative_eq!(pos.x, 480.0, epsilon = 1e-2);
        assert_relative_eq!(pos.y, 520.0, epsilon = 1e-2);
    }

    #[test]
    fn test_update_follows_camera_pan() {
        let mut camera = test_camera();
        let viewport = Vec2::new(800.0, 800.0);
        let mut projector = ScreenProjector::new(&camera, viewport);

        camera.pan(Vec3::new(1.0, 0.0, 0.0));
        projector.update(&camera, viewport);

        // Nach Pan um +1 X liegt der Ursprung 40 px links der Mitte
        let pos = projector.to_screen(Vec3::ZERO);
        assert_relative_eq!(pos.x, 360.0, epsilon = 1e-2);
    }
}
