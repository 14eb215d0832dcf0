//! Drag-Zustand eines Shapes im Edit-Modus.

/// Aktives Bearbeitungsziel eines Shapes.
///
/// Übergänge: `Idle → NodeDragging → Idle` und `Idle → EdgeDragging → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein aktives Ziel
    #[default]
    Idle,
    /// Kontrollpunkt `index` wird gezogen
    NodeDragging { index: usize },
    /// Kante `index` wird gezogen
    EdgeDragging { index: usize },
}

impl DragState {
    /// Gibt `true` zurück, wenn kein Ziel aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Index des gezogenen Kontrollpunkts.
    pub fn active_point(&self) -> Option<usize> {
        match *self {
            DragState::NodeDragging { index } => Some(index),
            _ => None,
        }
    }

    /// Index der gezogenen Kante.
    pub fn active_edge(&self) -> Option<usize> {
        match *self {
            DragState::EdgeDragging { index } => Some(index),
            _ => None,
        }
    }
}
