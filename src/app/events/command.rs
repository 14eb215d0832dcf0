use crate::core::{Camera3D, Coordinate, PropertySet, ShapeId, ShapeKind};
use crate::editor::AnchorTag;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Viewport & Kamera ───────────────────────────────────────
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec3 },
    /// Kamera rotieren
    OrbitCamera { yaw: f32, pitch: f32 },
    /// Kamera-Abstand ändern
    DollyCamera { factor: f32 },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Kamera übernehmen
    SetCamera { camera: Camera3D },
    /// Alle Anker im Edit-Modus neu positionieren
    RefreshOverlay,

    // ── Shapes ──────────────────────────────────────────────────
    /// Shape anlegen
    CreateShape {
        kind: ShapeKind,
        points: Vec<Coordinate>,
        label: String,
    },
    /// Shape aus Konfiguration anlegen
    CreateShapeFromConfig { config: PropertySet },
    /// Kontrollpunkt anhängen
    InsertPoint { shape_id: ShapeId, point: Coordinate },
    /// Mehrere Kontrollpunkte anhängen
    InsertPoints {
        shape_id: ShapeId,
        points: Vec<Coordinate>,
    },
    /// Kontrollpunkte ersetzen
    SetPoints {
        shape_id: ShapeId,
        points: Vec<Coordinate>,
    },
    /// Kontrollpunkte entfernen
    ResetPoints { shape_id: ShapeId },
    /// Edit-Modus schalten
    SetShapeSelected { shape_id: ShapeId, selected: bool },
    /// Bearbeitungs-Fähigkeiten setzen
    SetEditingCapabilities {
        shape_id: ShapeId,
        vertices: bool,
        edges: bool,
    },
    /// Shape entsorgen und entfernen
    DisposeShape { shape_id: ShapeId },

    // ── Pointer ─────────────────────────────────────────────────
    /// Pointer-Down mit aufgelöstem Ziel-Anker
    BeginPointer {
        world_pos: glam::Vec3,
        target: Option<AnchorTag>,
    },
    /// Pointer-Move
    MovePointer { world_pos: glam::Vec3 },
    /// Pointer-Up
    EndPointer,

    // ── Optionen ────────────────────────────────────────────────
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
