//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use crate::core::{Camera3D, MeshBuffer, ShapeId, ShapeKind};

/// Mesh eines Shapes für einen Frame.
#[derive(Debug, Clone)]
pub struct ShapeMesh {
    /// Besitzendes Shape
    pub shape_id: ShapeId,
    /// Shape-Art
    pub kind: ShapeKind,
    /// Vertex-/Index-Puffer inklusive Material
    pub mesh: MeshBuffer,
    /// Shape ist im Edit-Modus
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Nicht-leere Meshes in Erzeugungsreihenfolge
    pub meshes: Vec<ShapeMesh>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene {
    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_geometry(&self) -> bool {
        !self.meshes.is_empty()
    }
}
