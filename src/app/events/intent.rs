use crate::core::{Camera3D, Coordinate, PropertySet, ShapeId, ShapeKind};
use crate::editor::AnchorTag;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Viewport & Kamera ───────────────────────────────────────
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec3 },
    /// Kamera um das Blickziel rotieren (Radiant)
    CameraOrbit { yaw: f32, pitch: f32 },
    /// Kamera-Abstand ändern (< 1 = näher heran)
    CameraZoom { factor: f32 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Host hat die Kamera selbst bewegt
    CameraChanged { camera: Camera3D },
    /// Kamera-Tick ohne Änderung am State (Anker nachziehen)
    CameraUpdated,

    // ── Shapes ──────────────────────────────────────────────────
    /// Neues Shape anlegen
    CreateShapeRequested {
        kind: ShapeKind,
        points: Vec<Coordinate>,
        label: String,
    },
    /// Shape aus gespeicherter Konfiguration anlegen
    ShapeFromConfigRequested { config: PropertySet },
    /// Kontrollpunkt anhängen
    InsertPointRequested { shape_id: ShapeId, point: Coordinate },
    /// Mehrere Kontrollpunkte anhängen
    InsertPointsRequested {
        shape_id: ShapeId,
        points: Vec<Coordinate>,
    },
    /// Alle Kontrollpunkte ersetzen
    SetPointsRequested {
        shape_id: ShapeId,
        points: Vec<Coordinate>,
    },
    /// Alle Kontrollpunkte entfernen
    ResetPointsRequested { shape_id: ShapeId },
    /// Edit-Modus betreten oder verlassen
    ShapeSelectionRequested { shape_id: ShapeId, selected: bool },
    /// Punkt-/Kanten-Bearbeitung schalten
    EditingCapabilitiesChanged {
        shape_id: ShapeId,
        vertices: bool,
        edges: bool,
    },
    /// Shape entsorgen
    DisposeShapeRequested { shape_id: ShapeId },

    // ── Pointer ─────────────────────────────────────────────────
    /// Pointer gedrückt (Treffer wird im Overlay gesucht)
    PointerDown {
        screen_pos: glam::Vec2,
        world_pos: glam::Vec3,
    },
    /// Pointer direkt auf einem bekannten Anker gedrückt (Host-Hit-Test)
    AnchorPointerDown {
        tag: AnchorTag,
        world_pos: glam::Vec3,
    },
    /// Pointer bewegt
    PointerMove { world_pos: glam::Vec3 },
    /// Pointer losgelassen
    PointerUp,

    // ── Optionen ────────────────────────────────────────────────
    /// Neue Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}
