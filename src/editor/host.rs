//! Overlay-Host: Schnittstelle zur Darstellungsschicht der Anker.
//!
//! Der Editor erzeugt, positioniert und entfernt Elemente ausschließlich über
//! `OverlayHost`. `OverlayLayer` ist die mitgelieferte, zurückgehaltene
//! Implementierung mit Änderungs-Feed für eine DOM-Brücke.

use super::anchor::{AnchorKind, AnchorStyle, AnchorTag, HitTolerances};
use crate::core::ShapeId;
use glam::Vec2;
use indexmap::IndexMap;

/// ID eines Overlay-Elements (monoton steigend, nie wiederverwendet).
pub type ElementId = u64;

/// Darstellungsschicht für Anker-Elemente.
pub trait OverlayHost {
    /// Erzeugt ein neues Element und gibt seine ID zurück.
    fn create_element(&mut self, tag: AnchorTag) -> ElementId;
    /// Wendet ein Layout auf ein Element an.
    fn apply_style(&mut self, element: ElementId, style: &AnchorStyle);
    /// Entfernt ein Element. Unbekannte IDs werden ignoriert.
    fn remove_element(&mut self, element: ElementId);
}

/// Ein Element im Overlay-Layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayElement {
    /// Zugehöriger Anker
    pub tag: AnchorTag,
    /// Aktuelles Layout (None bis zum ersten `apply_style`)
    pub style: Option<AnchorStyle>,
}

/// Änderung am Overlay seit dem letzten `drain_changes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayChange {
    /// Element erzeugt
    Created {
        element: ElementId,
        tag: AnchorTag,
    },
    /// Layout angewendet
    Styled {
        element: ElementId,
        style: AnchorStyle,
    },
    /// Element entfernt
    Removed { element: ElementId },
}

/// Zurückgehaltener Overlay-Host (Elemente in Erzeugungsreihenfolge).
#[derive(Debug, Default)]
pub struct OverlayLayer {
    elements: IndexMap<ElementId, OverlayElement>,
    next_id: ElementId,
    changes: Vec<OverlayChange>,
}

impl OverlayLayer {
    const MAX_PENDING_CHANGES: usize = 10_000;

    /// Erstellt einen leeren Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der lebenden Elemente.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Element zu einer ID.
    pub fn element(&self, element: ElementId) -> Option<&OverlayElement> {
        self.elements.get(&element)
    }

    /// Alle Elemente in Erzeugungsreihenfolge.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &OverlayElement)> {
        self.elements.iter().map(|(id, el)| (*id, el))
    }

    /// Anzahl der Elemente eines Shapes.
    pub fn elements_for_shape(&self, shape_id: ShapeId) -> usize {
        self.elements
            .values()
            .filter(|el| el.tag.shape_id == shape_id)
            .count()
    }

    /// Sucht das oberste Element unter `pos`.
    ///
    /// Punkt-Anker liegen über Kanten-Ankern; innerhalb einer Ebene liegt das
    /// zuletzt erzeugte Element oben.
    pub fn hit_test(&self, pos: Vec2, tolerances: HitTolerances) -> Option<AnchorTag> {
        self.elements
            .iter()
            .filter_map(|(id, el)| {
                let style = el.style?;
                style
                    .contains(el.tag.kind, pos, tolerances)
                    .then_some((el.tag.kind == AnchorKind::Point, *id, el.tag))
            })
            .max_by_key(|&(is_point, id, _)| (is_point, id))
            .map(|(_, _, tag)| tag)
    }

    /// Entnimmt alle aufgelaufenen Änderungen.
    pub fn drain_changes(&mut self) -> Vec<OverlayChange> {
        std::mem::take(&mut self.changes)
    }

    fn push_change(&mut self, change: OverlayChange) {
        if self.changes.len() >= Self::MAX_PENDING_CHANGES {
            log::warn!(
                "Overlay-Änderungen werden nicht abgeholt, verwerfe {} ältere Einträge",
                Self::MAX_PENDING_CHANGES / 2
            );
            self.changes.drain(..Self::MAX_PENDING_CHANGES / 2);
        }
        self.changes.push(change);
    }
}

impl OverlayHost for OverlayLayer {
    fn create_element(&mut self, tag: AnchorTag) -> ElementId {
        let element = self.next_id;
        self.next_id += 1;
        self.elements
            .insert(element, OverlayElement { tag, style: None });
        self.push_change(OverlayChange::Created { element, tag });
        element
    }

    fn apply_style(&mut self, element: ElementId, style: &AnchorStyle) {
        let Some(el) = self.elements.get_mut(&element) else {
            return;
        };
        el.style = Some(*style);
        self.push_change(OverlayChange::Styled {
            element,
            style: *style,
        });
    }

    fn remove_element(&mut self, element: ElementId) {
        if self.elements.shift_remove(&element).is_some() {
            self.push_change(OverlayChange::Removed { element });
        }
    }
}
