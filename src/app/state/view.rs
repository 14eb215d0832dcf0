use crate::core::{Camera3D, ScreenProjector};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 3D-Kamera für die Ansicht
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Projektor für Kamera und Viewport des aktuellen Frames
    pub projector: ScreenProjector,
}

impl ViewState {
    /// Standard-Viewport bis zum ersten Resize.
    pub const DEFAULT_VIEWPORT: [f32; 2] = [1280.0, 720.0];

    /// Erstellt den View-Zustand für eine Kamera.
    pub fn new(camera: Camera3D) -> Self {
        let viewport_size = Self::DEFAULT_VIEWPORT;
        let projector = ScreenProjector::new(&camera, Vec2::from(viewport_size));
        Self {
            camera,
            viewport_size,
            projector,
        }
    }

    /// Viewport-Größe als Vektor
    pub fn viewport(&self) -> Vec2 {
        Vec2::from(self.viewport_size)
    }

    /// Aktualisiert den Projektor nach Kamera- oder Viewport-Änderung.
    pub fn sync_projector(&mut self) {
        let viewport = self.viewport();
        self.projector.update(&self.camera, viewport);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Camera3D::default())
    }
}
