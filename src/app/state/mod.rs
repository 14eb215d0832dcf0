//! Application State: zentrale Datenhaltung.

mod view;

pub use view::ViewState;

use super::CommandLog;
use crate::core::{shape_from_config, Coordinate, PropertySet, ShapeId, ShapeKind};
use crate::editor::{EditContext, EditableShape, OverlayLayer, OverlaySurface};
use crate::shared::EditorOptions;
use indexmap::IndexMap;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Shapes in Erzeugungsreihenfolge
    pub shapes: IndexMap<ShapeId, EditableShape>,
    /// Nächste freie Shape-ID
    pub next_shape_id: ShapeId,
    /// Cursor-Zustand und angemeldete Shapes
    pub context: EditContext,
    /// Overlay-Elemente aller Anker
    pub overlay: OverlayLayer,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Command-Log
    pub command_log: CommandLog,
}

/// Gleichzeitige Zugriffe auf Shapes, Kontext und Overlay.
pub struct EditingParts<'a> {
    /// Alle Shapes
    pub shapes: &'a mut IndexMap<ShapeId, EditableShape>,
    /// Edit-Kontext
    pub context: &'a mut EditContext,
    /// Ziel für Anker-Updates
    pub surface: OverlaySurface<'a>,
}

impl AppState {
    /// Erstellt einen leeren AppState mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren AppState mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut context = EditContext::new();
        context.set_working_plane(crate::core::WorkingPlane {
            elevation: options.working_plane_elevation,
        });
        Self {
            shapes: IndexMap::new(),
            next_shape_id: 1,
            context,
            overlay: OverlayLayer::new(),
            view: ViewState::new(options.default_camera()),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Legt ein Shape an, meldet es am Edit-Kontext an und gibt die ID zurück.
    pub fn spawn_shape(
        &mut self,
        kind: ShapeKind,
        points: Vec<Coordinate>,
        label: impl Into<String>,
    ) -> ShapeId {
        let id = self.allocate_id();
        let color = self.options.color_for(kind);
        let shape = match kind {
            ShapeKind::Polygon => EditableShape::polygon(id, label, color, points),
            ShapeKind::Polyline => EditableShape::polyline(id, label, color, points),
        };
        self.register(shape)
    }

    /// Legt ein Shape aus einer Konfiguration an.
    pub fn spawn_from_config(&mut self, config: PropertySet) -> ShapeId {
        let id = self.allocate_id();
        let shape = EditableShape::new(id, shape_from_config(config));
        self.register(shape)
    }

    /// Shape zu einer ID.
    pub fn shape(&self, id: ShapeId) -> Option<&EditableShape> {
        self.shapes.get(&id)
    }

    /// Anzahl der Shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// IDs aller Shapes im Edit-Modus.
    pub fn selected_shape_ids(&self) -> Vec<ShapeId> {
        self.shapes
            .values()
            .filter(|s| s.is_selected())
            .map(|s| s.id())
            .collect()
    }

    /// Teilt den State für Pointer- und Overlay-Operationen auf.
    pub fn editing_parts(&mut self) -> EditingParts<'_> {
        EditingParts {
            shapes: &mut self.shapes,
            context: &mut self.context,
            surface: OverlaySurface {
                host: &mut self.overlay,
                projector: &self.view.projector,
                point_size_px: self.options.point_anchor_size_px,
            },
        }
    }

    fn allocate_id(&mut self) -> ShapeId {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    fn register(&mut self, mut shape: EditableShape) -> ShapeId {
        let id = shape.id();
        shape.set_elevation(self.options.working_plane_elevation);
        shape.set_selection_color(self.options.selection_color);
        self.context.subscribe(id);
        log::info!(
            "Shape {} angelegt ({:?}, {} Punkte)",
            id,
            shape.kind(),
            shape.coordinates().len()
        );
        self.shapes.insert(id, shape);
        id
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
