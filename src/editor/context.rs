//! Edit-Kontext: Cursor-Zustand und angemeldete Shapes.
//!
//! Ersetzt einen globalen Zeiger-Singleton. Der Kontext gehört dem
//! `AppState` und wird per Referenz an die Shapes gereicht.

use crate::core::{ShapeId, WorkingPlane};
use glam::Vec3;
use indexmap::IndexSet;

/// Gemeinsamer Zustand aller editierbaren Shapes.
#[derive(Debug, Default)]
pub struct EditContext {
    subscribers: IndexSet<ShapeId>,
    cursor: Vec3,
    cursor_down: Option<Vec3>,
    working_plane: WorkingPlane,
}

impl EditContext {
    /// Erstellt einen leeren Kontext.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet ein Shape für Pointer-Events an. `false`, wenn bereits angemeldet.
    pub fn subscribe(&mut self, shape_id: ShapeId) -> bool {
        self.subscribers.insert(shape_id)
    }

    /// Meldet ein Shape ab. `false`, wenn es nicht angemeldet war.
    pub fn unsubscribe(&mut self, shape_id: ShapeId) -> bool {
        self.subscribers.shift_remove(&shape_id)
    }

    /// Gibt `true` zurück, wenn das Shape angemeldet ist.
    pub fn is_subscribed(&self, shape_id: ShapeId) -> bool {
        self.subscribers.contains(&shape_id)
    }

    /// Angemeldete Shapes in Anmelde-Reihenfolge.
    pub fn subscribers(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.subscribers.iter().copied()
    }

    /// Fehler, wenn das Shape nicht am Kontext angemeldet ist.
    pub fn require(&self, shape_id: ShapeId) -> anyhow::Result<()> {
        if !self.is_subscribed(shape_id) {
            anyhow::bail!(
                "Shape {} ist nicht am Edit-Kontext angemeldet (Pencil fehlt)",
                shape_id
            );
        }
        Ok(())
    }

    /// Merkt die Welt-Position eines Pointer-Down.
    pub fn record_down(&mut self, world: Vec3) {
        self.cursor = world;
        self.cursor_down = Some(world);
    }

    /// Merkt die aktuelle Welt-Position des Cursors.
    pub fn record_move(&mut self, world: Vec3) {
        self.cursor = world;
    }

    /// Beendet den Pointer-Down.
    pub fn record_up(&mut self) {
        self.cursor_down = None;
    }

    /// Aktuelle Cursor-Position
    pub fn cursor(&self) -> Vec3 {
        self.cursor
    }

    /// Position des letzten Pointer-Down (solange gedrückt)
    pub fn cursor_down(&self) -> Option<Vec3> {
        self.cursor_down
    }

    /// Leitet die Cursor-Position sofort weiter (Startpunkt eines Kanten-Drags).
    pub fn fire_cursor(&self) -> Vec3 {
        self.cursor_down.unwrap_or(self.cursor)
    }

    /// Arbeitsebene für Cursor-Raycasts
    pub fn working_plane(&self) -> WorkingPlane {
        self.working_plane
    }

    /// Setzt die Arbeitsebene.
    pub fn set_working_plane(&mut self, plane: WorkingPlane) {
        self.working_plane = plane;
    }
}
