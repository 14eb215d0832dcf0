//! Editierbares Shape: Geometrie, Anker-Overlay und Drag-Zustand einer Instanz.
//!
//! Ablauf innerhalb eines Events: Koordinaten ändern → Geometrie neu
//! aufbauen → Anker neu positionieren. Jede Instanz besitzt ihr Overlay
//! und ihren Drag-Zustand exklusiv.

use super::anchor::{AnchorKind, AnchorTag};
use super::context::EditContext;
use super::drag::DragState;
use super::host::OverlayHost;
use super::overlay::{AnchorOverlay, OverlaySurface};
use crate::core::{
    BrepSnapshot, Coordinate, CoordinateStore, Editable2DShape, MeshBuffer, PolygonShape,
    PolylineShape, ShapeId, ShapeKind,
};
use crate::shared::options::SELECTION_COLOR;
use glam::Vec3;

/// Ein Shape im Editor inklusive Anker und Drag-Zustand.
#[derive(Debug)]
pub struct EditableShape {
    id: ShapeId,
    shape: Box<dyn Editable2DShape>,
    overlay: AnchorOverlay,
    drag: DragState,
    initial_cursor: Vec3,
    brep_raw: Option<BrepSnapshot>,
    selected: bool,
    elevation: f32,
    allow_vertex_editing: bool,
    allow_edge_editing: bool,
    selection_color: u32,
    disposed: bool,
}

impl EditableShape {
    /// Umhüllt ein bestehendes Shape.
    pub fn new(id: ShapeId, shape: Box<dyn Editable2DShape>) -> Self {
        Self {
            id,
            shape,
            overlay: AnchorOverlay::new(),
            drag: DragState::Idle,
            initial_cursor: Vec3::ZERO,
            brep_raw: None,
            selected: false,
            elevation: 0.0,
            allow_vertex_editing: true,
            allow_edge_editing: true,
            selection_color: SELECTION_COLOR,
            disposed: false,
        }
    }

    /// Neues Polygon.
    pub fn polygon(
        id: ShapeId,
        label: impl Into<String>,
        color: u32,
        points: Vec<Coordinate>,
    ) -> Self {
        Self::new(id, Box::new(PolygonShape::new(label, color, points)))
    }

    /// Neue Polylinie.
    pub fn polyline(
        id: ShapeId,
        label: impl Into<String>,
        color: u32,
        points: Vec<Coordinate>,
    ) -> Self {
        Self::new(id, Box::new(PolylineShape::new(label, color, points)))
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    /// Shape-ID
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Shape-Art
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Zugrunde liegendes Shape
    pub fn shape(&self) -> &dyn Editable2DShape {
        self.shape.as_ref()
    }

    /// Geordnete Kontrollpunkte
    pub fn coordinates(&self) -> &CoordinateStore {
        self.shape.coordinates()
    }

    /// Aktueller Mesh-Puffer
    pub fn geometry(&self) -> &MeshBuffer {
        self.shape.geometry()
    }

    /// Anker-Overlay
    pub fn overlay(&self) -> &AnchorOverlay {
        &self.overlay
    }

    /// Drag-Zustand
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Zwischengespeicherter BREP-Snapshot
    pub fn brep_raw(&self) -> Option<&BrepSnapshot> {
        self.brep_raw.as_ref()
    }

    /// Gibt `true` zurück, wenn das Shape im Edit-Modus ist.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Gibt `true` zurück, wenn das Shape entsorgt wurde.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Höhe, auf die gezogene Punkte gesetzt werden
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Setzt die Höhe für gezogene Punkte.
    pub fn set_elevation(&mut self, elevation: f32) {
        self.elevation = elevation;
    }

    /// Farbe im Edit-Modus
    pub fn set_selection_color(&mut self, color: u32) {
        self.selection_color = color;
    }

    /// Schaltet Punkt- und Kanten-Bearbeitung. Gilt ab der nächsten Selektion.
    pub fn set_editing_capabilities(&mut self, vertices: bool, edges: bool) {
        self.allow_vertex_editing = vertices;
        self.allow_edge_editing = edges;
    }

    /// Aktuelle BREP-Daten der Geometrie.
    pub fn get_brep_data(&self) -> Option<BrepSnapshot> {
        self.shape.brep()
    }

    // ── Programmatische Änderungen ──────────────────────────────────

    /// Hängt einen Kontrollpunkt an.
    pub fn insert_point(&mut self, point: Coordinate, surface: &mut OverlaySurface) {
        self.shape.insert_point(point);
        self.commit_edit(surface);
    }

    /// Hängt mehrere Kontrollpunkte an.
    pub fn insert_points(&mut self, points: &[Coordinate], surface: &mut OverlaySurface) {
        self.shape.insert_points(points);
        self.commit_edit(surface);
    }

    /// Ersetzt alle Kontrollpunkte.
    pub fn set_points(&mut self, points: Vec<Coordinate>, surface: &mut OverlaySurface) {
        self.shape.set_points(points);
        self.commit_edit(surface);
    }

    /// Entfernt alle Kontrollpunkte.
    pub fn reset_points(&mut self, surface: &mut OverlaySurface) {
        self.shape.reset_points();
        self.commit_edit(surface);
    }

    /// Nach einer abgeschlossenen Änderung: Snapshot erneuern, Anker nachziehen.
    fn commit_edit(&mut self, surface: &mut OverlaySurface) {
        if !self.selected {
            return;
        }
        self.brep_raw = self.shape.brep();

        let expected_points = if self.allow_vertex_editing {
            self.coordinates().len()
        } else {
            0
        };
        let expected_edges = match (&self.brep_raw, self.allow_edge_editing) {
            (Some(brep), true) => brep.edge_count(),
            _ => 0,
        };

        if self.overlay.point_count() != expected_points {
            self.overlay.clear_points(surface.host);
            self.add_anchor_points_on_selection(surface);
        }
        if self.overlay.edge_count() != expected_edges {
            self.overlay.clear_edges(surface.host);
            self.add_anchor_edges_on_selection(surface);
        }
        self.calculate_anchor(true, surface);
        self.calculate_anchor_edges(true, surface);
    }

    // ── Selektion & Anker ───────────────────────────────────────────

    /// Betritt (`true`) oder verlässt (`false`) den Edit-Modus.
    pub fn set_selected(&mut self, value: bool, surface: &mut OverlaySurface) {
        if self.disposed || self.selected == value {
            return;
        }
        self.selected = value;

        if value {
            self.shape.set_highlight(Some(self.selection_color));
            self.add_anchor_points_on_selection(surface);
            self.add_anchor_edges_on_selection(surface);
            log::info!(
                "Shape {} im Edit-Modus: {} Punkt-Anker, {} Kanten-Anker",
                self.id,
                self.overlay.point_count(),
                self.overlay.edge_count()
            );
        } else {
            self.clear_anchor_points(surface.host);
            self.clear_anchor_edges(surface.host);
            self.drag = DragState::Idle;
            self.brep_raw = None;
            self.shape.set_highlight(None);
            log::info!("Shape {} verlässt den Edit-Modus", self.id);
        }
    }

    /// Erzeugt Punkt-Anker für alle Kontrollpunkte.
    pub fn add_anchor_points_on_selection(&mut self, surface: &mut OverlaySurface) {
        if !self.allow_vertex_editing {
            return;
        }
        self.overlay
            .add_point_anchors(self.id, self.shape.coordinates().as_slice(), surface);
    }

    /// Nimmt einen BREP-Snapshot und erzeugt Kanten-Anker daraus.
    pub fn add_anchor_edges_on_selection(&mut self, surface: &mut OverlaySurface) {
        self.brep_raw = self.shape.brep();
        if !self.allow_edge_editing {
            return;
        }
        if let Some(brep) = self.brep_raw.as_ref() {
            self.overlay.add_edge_anchors(
                self.id,
                brep,
                self.shape.coordinates().as_slice(),
                surface,
            );
        }
    }

    /// Entfernt alle Punkt-Anker (idempotent).
    pub fn clear_anchor_points(&mut self, host: &mut dyn OverlayHost) {
        self.overlay.clear_points(host);
    }

    /// Entfernt alle Kanten-Anker (idempotent).
    pub fn clear_anchor_edges(&mut self, host: &mut dyn OverlayHost) {
        self.overlay.clear_edges(host);
    }

    /// Punkt-Anker neu positionieren (alle oder nur den aktiven).
    pub fn calculate_anchor(&mut self, force: bool, surface: &mut OverlaySurface) {
        self.overlay.calculate_anchor(
            self.drag.active_point(),
            force,
            self.shape.coordinates().as_slice(),
            surface,
        );
    }

    /// Kanten-Anker neu positionieren (alle oder die aktive Kante mit Nachbarn).
    ///
    /// Ohne BREP-Snapshot passiert nichts.
    pub fn calculate_anchor_edges(&mut self, force: bool, surface: &mut OverlaySurface) {
        let Some(brep) = self.brep_raw.as_ref() else {
            log::debug!("Shape {}: kein BREP-Snapshot, Kanten-Anker unverändert", self.id);
            return;
        };
        self.overlay.calculate_anchor_edges(
            self.drag.active_edge(),
            force,
            brep,
            self.shape.coordinates().as_slice(),
            self.shape.kind().is_closed(),
            surface,
        );
    }

    /// Alle Anker neu positionieren (Kamera-Tick). Nur im Edit-Modus.
    pub fn refresh_overlay(&mut self, surface: &mut OverlaySurface) {
        if !self.selected {
            return;
        }
        self.calculate_anchor(true, surface);
        self.calculate_anchor_edges(true, surface);
    }

    // ── Pointer-Events ──────────────────────────────────────────────

    /// Merkt die Cursor-Position eines Pointer-Down (Startpunkt für Kanten-Drags).
    pub fn on_cursor_down(&mut self, world: Vec3) {
        self.initial_cursor = world;
    }

    /// Verarbeitet einen Pointer-Down auf `target`.
    ///
    /// Ein eigener Anker setzt das aktive Ziel; alles andere löscht es.
    /// Ziele ohne existierenden Anker (z.B. außerhalb des Edit-Modus) starten
    /// keinen Drag. Gibt `true` zurück, wenn ein Drag beginnt.
    pub fn on_pointer_down(
        &mut self,
        target: Option<AnchorTag>,
        ctx: &EditContext,
    ) -> anyhow::Result<bool> {
        let Some(tag) = target.filter(|t| t.shape_id == self.id) else {
            self.drag = DragState::Idle;
            return Ok(false);
        };
        ctx.require(self.id)?;

        if !self.selected {
            self.drag = DragState::Idle;
            return Ok(false);
        }

        self.drag = match tag.kind {
            AnchorKind::Point
                if self.allow_vertex_editing
                    && tag.index < self.coordinates().len()
                    && self.overlay.point_anchor(tag.index).is_some() =>
            {
                DragState::NodeDragging { index: tag.index }
            }
            AnchorKind::Edge
                if self.allow_edge_editing
                    && self.overlay.edge_anchor(tag.index).is_some()
                    && self
                        .brep_raw
                        .as_ref()
                        .is_some_and(|b| tag.index < b.edge_count()) =>
            {
                self.initial_cursor = ctx.fire_cursor();
                DragState::EdgeDragging { index: tag.index }
            }
            _ => DragState::Idle,
        };
        Ok(!self.drag.is_idle())
    }

    /// Verarbeitet eine Cursor-Bewegung. `true`, wenn sich Koordinaten geändert haben.
    pub fn on_cursor_move(&mut self, world: Vec3, surface: &mut OverlaySurface) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::NodeDragging { index } => {
                let point = Vec3::new(world.x, self.elevation, world.z);
                if !self.shape.set_point(index, point) {
                    return false;
                }
                let coords = self.shape.coordinates().as_slice();
                self.overlay.update_point(index, coords, surface);
                if let Some(brep) = self.brep_raw.as_ref() {
                    self.overlay
                        .update_edges_touching(index, brep, coords, surface);
                }
                true
            }
            DragState::EdgeDragging { index } => {
                let Some(brep) = self.brep_raw.as_ref() else {
                    return false;
                };
                let Some(&(a, b)) = brep.edges.get(index) else {
                    return false;
                };
                let (Some(&va), Some(&vb)) = (brep.vertices.get(a), brep.vertices.get(b)) else {
                    return false;
                };
                // Starre Verschiebung relativ zum Snapshot, nur in der Arbeitsebene
                let delta = Vec3::new(
                    world.x - self.initial_cursor.x,
                    0.0,
                    world.z - self.initial_cursor.z,
                );
                if !self.shape.set_points_at(&[(a, va + delta), (b, vb + delta)]) {
                    return false;
                }

                let coords = self.shape.coordinates().as_slice();
                self.overlay.calculate_anchor_edges(
                    Some(index),
                    false,
                    brep,
                    coords,
                    self.shape.kind().is_closed(),
                    surface,
                );
                self.overlay.update_point(a, coords, surface);
                self.overlay.update_point(b, coords, surface);
                true
            }
        }
    }

    /// Verarbeitet ein Pointer-Up. Ohne aktives Ziel ein No-op.
    pub fn on_pointer_up(&mut self, surface: &mut OverlaySurface) -> bool {
        if self.drag.is_idle() {
            return false;
        }
        self.drag = DragState::Idle;
        self.brep_raw = self.shape.brep();
        self.calculate_anchor(true, surface);
        self.calculate_anchor_edges(true, surface);
        true
    }

    /// Entfernt Anker, meldet das Shape ab und gibt die Geometrie frei (idempotent).
    pub fn dispose(&mut self, host: &mut dyn OverlayHost, ctx: &mut EditContext) {
        if self.disposed {
            return;
        }
        self.overlay.clear_points(host);
        self.overlay.clear_edges(host);
        ctx.unsubscribe(self.id);
        self.shape.release_geometry();
        self.drag = DragState::Idle;
        self.brep_raw = None;
        self.selected = false;
        self.disposed = true;
        log::info!("Shape {} entsorgt", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Camera3D, ScreenProjector};
    use crate::editor::host::OverlayLayer;
    use approx::assert_relative_eq;
    use glam::Vec2;

    struct Rig {
        layer: OverlayLayer,
        projector: ScreenProjector,
        ctx: EditContext,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                layer: OverlayLayer::new(),
                projector: ScreenProjector::new(
                    &Camera3D::plan(90.0, 0.1, 1000.0),
                    Vec2::new(800.0, 800.0),
                ),
                ctx: EditContext::new(),
            }
        }

        fn surface(&mut self) -> OverlaySurface<'_> {
            OverlaySurface {
                host: &mut self.layer,
                projector: &self.projector,
                point_size_px: 7.0,
            }
        }
    }

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 1.0),
        ]
    }

    fn selected_square(rig: &mut Rig) -> EditableShape {
        let mut shape = EditableShape::polygon(1, "Raum", 0xcccccc, square());
        rig.ctx.subscribe(1);
        shape.set_selected(true, &mut rig.surface());
        shape
    }

    #[test]
    fn test_selection_creates_anchors_and_deselect_removes_them() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);
        assert_eq!(rig.layer.element_count(), 8);
        assert_eq!(shape.geometry().material.color, SELECTION_COLOR);

        shape.set_selected(false, &mut rig.surface());
        assert_eq!(rig.layer.element_count(), 0);
        assert!(shape.brep_raw().is_none());
        assert_eq!(shape.geometry().material.color, 0xcccccc);
    }

    #[test]
    fn test_point_drag_moves_coordinate_and_anchor() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);

        let started = shape
            .on_pointer_down(Some(AnchorTag::point(1, 2)), &rig.ctx)
            .expect("Pointer-Down erwartet");
        assert!(started);
        assert!(shape.on_cursor_move(Vec3::new(2.0, 5.0, 3.0), &mut rig.surface()));

        // Höhe kommt aus der Elevation, nicht vom Cursor
        assert_eq!(shape.coordinates().get(2), Some(Vec3::new(2.0, 0.0, 3.0)));
        let center = shape.overlay().point_anchor(2).expect("Anker").style.center();
        assert_relative_eq!(center.x, 480.0, epsilon = 1e-2);
        assert_relative_eq!(center.y, 520.0, epsilon = 1e-2);

        // Angrenzende Kante 1 endet jetzt am neuen Punkt
        let edge = shape.overlay().edge_anchor(1).expect("Anker").style;
        let end = edge.end_point();
        assert_relative_eq!(end.x, 480.0, epsilon = 1e-2);
        assert_relative_eq!(end.y, 520.0, epsilon = 1e-2);

        assert!(shape.on_pointer_up(&mut rig.surface()));
        assert!(shape.drag_state().is_idle());
        assert_eq!(
            shape.brep_raw().expect("Snapshot").vertices[2],
            Vec3::new(2.0, 0.0, 3.0)
        );
    }

    #[test]
    fn test_edge_drag_translates_rigidly() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);

        rig.ctx.record_down(Vec3::new(0.0, 0.0, -1.0));
        shape.on_cursor_down(Vec3::new(0.0, 0.0, -1.0));
        assert!(shape
            .on_pointer_down(Some(AnchorTag::edge(1, 0)), &rig.ctx)
            .expect("Pointer-Down erwartet"));

        shape.on_cursor_move(Vec3::new(0.5, 0.0, -1.0), &mut rig.surface());
        shape.on_cursor_move(Vec3::new(1.0, 0.0, -1.0), &mut rig.surface());

        let coords = shape.coordinates();
        assert_eq!(coords.get(0), Some(Vec3::new(0.0, 0.0, -1.0)));
        assert_eq!(coords.get(1), Some(Vec3::new(2.0, 0.0, -1.0)));
        let length = coords.get(1).unwrap_or_default() - coords.get(0).unwrap_or_default();
        assert_relative_eq!(length.length(), 2.0);
        // Nicht beteiligte Punkte bleiben unverändert
        assert_eq!(coords.get(2), Some(Vec3::new(1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_pointer_down_elsewhere_clears_active_target() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);
        shape
            .on_pointer_down(Some(AnchorTag::point(1, 0)), &rig.ctx)
            .expect("Pointer-Down erwartet");

        let started = shape
            .on_pointer_down(Some(AnchorTag::point(99, 0)), &rig.ctx)
            .expect("Pointer-Down erwartet");
        assert!(!started);
        assert!(shape.drag_state().is_idle());
        assert!(!shape.on_cursor_move(Vec3::ONE, &mut rig.surface()));
    }

    #[test]
    fn test_pointer_down_outside_edit_mode_starts_no_drag() {
        let mut rig = Rig::new();
        let mut shape = EditableShape::polygon(1, "Raum", 0, square());
        rig.ctx.subscribe(1);

        let started = shape
            .on_pointer_down(Some(AnchorTag::point(1, 0)), &rig.ctx)
            .expect("Pointer-Down erwartet");

        assert!(!started);
        assert!(shape.drag_state().is_idle());
        assert!(!shape.on_cursor_move(Vec3::new(5.0, 0.0, 5.0), &mut rig.surface()));
        assert_eq!(shape.coordinates().get(0), Some(Vec3::new(-1.0, 0.0, -1.0)));
    }

    #[test]
    fn test_pointer_down_on_missing_anchor_index_starts_no_drag() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);

        let started = shape
            .on_pointer_down(Some(AnchorTag::edge(1, 7)), &rig.ctx)
            .expect("Pointer-Down erwartet");

        assert!(!started);
        assert!(shape.drag_state().is_idle());
    }

    #[test]
    fn test_edge_drag_keeps_points_on_working_plane() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);
        rig.ctx.record_down(Vec3::new(0.0, 0.0, -1.0));
        shape.on_cursor_down(Vec3::new(0.0, 0.0, -1.0));
        shape
            .on_pointer_down(Some(AnchorTag::edge(1, 0)), &rig.ctx)
            .expect("Drag-Start erwartet");

        shape.on_cursor_move(Vec3::new(1.0, 4.0, -2.0), &mut rig.surface());

        assert_eq!(shape.coordinates().get(0), Some(Vec3::new(0.0, 0.0, -2.0)));
        assert_eq!(shape.coordinates().get(1), Some(Vec3::new(2.0, 0.0, -2.0)));
    }

    #[test]
    fn test_pointer_up_without_target_is_noop() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);
        rig.layer.drain_changes();

        assert!(!shape.on_pointer_up(&mut rig.surface()));
        assert!(rig.layer.drain_changes().is_empty());
    }

    #[test]
    fn test_pointer_down_without_subscription_fails() {
        let mut rig = Rig::new();
        let mut shape = EditableShape::polygon(5, "Raum", 0, square());
        shape.set_selected(true, &mut rig.surface());

        let result = shape.on_pointer_down(Some(AnchorTag::point(5, 0)), &rig.ctx);
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_before_snapshot_is_guarded() {
        let mut rig = Rig::new();
        let mut shape = EditableShape::polyline(2, "Linie", 0, Vec::new());
        shape.calculate_anchor_edges(true, &mut rig.surface());
        shape.calculate_anchor(true, &mut rig.surface());
        assert_eq!(rig.layer.element_count(), 0);
    }

    #[test]
    fn test_insert_point_while_selected_rebuilds_anchors() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);
        shape.insert_point(Vec3::new(-2.0, 0.0, 0.0), &mut rig.surface());

        assert_eq!(shape.overlay().point_count(), 5);
        assert_eq!(shape.overlay().edge_count(), 5);
        assert_eq!(rig.layer.element_count(), 10);
        assert_eq!(shape.brep_raw().expect("Snapshot").vertices.len(), 5);
    }

    #[test]
    fn test_disabled_edge_editing_creates_no_edge_anchors() {
        let mut rig = Rig::new();
        let mut shape = EditableShape::polyline(3, "Linie", 0, square());
        shape.set_editing_capabilities(true, false);
        rig.ctx.subscribe(3);
        shape.set_selected(true, &mut rig.surface());

        assert_eq!(shape.overlay().edge_count(), 0);
        assert_eq!(rig.layer.element_count(), 4);
        let started = shape
            .on_pointer_down(Some(AnchorTag::edge(3, 0)), &rig.ctx)
            .expect("Pointer-Down erwartet");
        assert!(!started);
    }

    #[test]
    fn test_dispose_is_idempotent_and_unsubscribes() {
        let mut rig = Rig::new();
        let mut shape = selected_square(&mut rig);

        shape.dispose(&mut rig.layer, &mut rig.ctx);
        shape.dispose(&mut rig.layer, &mut rig.ctx);

        assert!(shape.is_disposed());
        assert!(!rig.ctx.is_subscribed(1));
        assert_eq!(rig.layer.element_count(), 0);
        assert!(shape.geometry().is_empty());
    }
}
