//! Anker-Overlay eines Shapes: Punkt- und Kanten-Anker synchron zur Geometrie.

use super::anchor::{Anchor, AnchorKey, AnchorStyle, AnchorTag};
use super::host::OverlayHost;
use crate::core::{BrepSnapshot, Coordinate, ScreenProjector, ShapeId};
use glam::Vec3;
use slotmap::SlotMap;

/// Alles, was zum Erzeugen und Positionieren von Ankern nötig ist.
pub struct OverlaySurface<'a> {
    /// Ziel für Overlay-Elemente
    pub host: &'a mut dyn OverlayHost,
    /// Projektor des aktuellen Frames
    pub projector: &'a ScreenProjector,
    /// Kantenlänge der Punkt-Marker in Pixeln
    pub point_size_px: f32,
}

impl OverlaySurface<'_> {
    fn point_style(&self, world: Vec3) -> AnchorStyle {
        AnchorStyle::point(self.projector.to_screen(world), self.point_size_px)
    }

    fn edge_style(&self, start: Vec3, end: Vec3) -> AnchorStyle {
        AnchorStyle::edge(self.projector.to_screen(start), self.projector.to_screen(end))
    }
}

/// Punkt- und Kanten-Anker eines Shapes.
///
/// `points[i]` gehört zu Koordinate `i`, `edges[i]` zu BREP-Kante `i`.
#[derive(Debug, Default)]
pub struct AnchorOverlay {
    anchors: SlotMap<AnchorKey, Anchor>,
    points: Vec<AnchorKey>,
    edges: Vec<AnchorKey>,
}

impl AnchorOverlay {
    /// Erstellt ein leeres Overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Punkt-Anker.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Kanten-Anker.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gibt `true` zurück, wenn keine Anker existieren.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Punkt-Anker zu Koordinate `index`.
    pub fn point_anchor(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(*self.points.get(index)?)
    }

    /// Kanten-Anker zu Kante `index`.
    pub fn edge_anchor(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(*self.edges.get(index)?)
    }

    /// Erzeugt je einen Punkt-Anker pro Koordinate (ersetzt bestehende).
    pub fn add_point_anchors(
        &mut self,
        shape_id: ShapeId,
        coordinates: &[Coordinate],
        surface: &mut OverlaySurface,
    ) {
        self.clear_points(surface.host);
        for (index, &world) in coordinates.iter().enumerate() {
            let tag = AnchorTag::point(shape_id, index);
            let style = surface.point_style(world);
            let key = self.spawn(tag, style, surface);
            self.points.push(key);
        }
    }

    /// Erzeugt je einen Kanten-Anker pro BREP-Kante (ersetzt bestehende).
    ///
    /// Positionen kommen aus den aktuellen Koordinaten, fehlende Indizes aus dem Snapshot.
    pub fn add_edge_anchors(
        &mut self,
        shape_id: ShapeId,
        brep: &BrepSnapshot,
        coordinates: &[Coordinate],
        surface: &mut OverlaySurface,
    ) {
        self.clear_edges(surface.host);
        for index in 0..brep.edges.len() {
            let Some((start, end)) = edge_positions(brep, coordinates, index) else {
                continue;
            };
            let tag = AnchorTag::edge(shape_id, index);
            let style = surface.edge_style(start, end);
            let key = self.spawn(tag, style, surface);
            self.edges.push(key);
        }
    }

    /// Repositioniert den Punkt-Anker `index`. `false`, wenn er nicht existiert.
    pub fn update_point(
        &mut self,
        index: usize,
        coordinates: &[Coordinate],
        surface: &mut OverlaySurface,
    ) -> bool {
        let (Some(&key), Some(&world)) = (self.points.get(index), coordinates.get(index)) else {
            return false;
        };
        let style = surface.point_style(world);
        self.restyle(key, style, surface)
    }

    /// Repositioniert den Kanten-Anker `index`. `false`, wenn er nicht existiert.
    pub fn update_edge(
        &mut self,
        index: usize,
        brep: &BrepSnapshot,
        coordinates: &[Coordinate],
        surface: &mut OverlaySurface,
    ) -> bool {
        let Some(&key) = self.edges.get(index) else {
            return false;
        };
        let Some((start, end)) = edge_positions(brep, coordinates, index) else {
            return false;
        };
        let style = surface.edge_style(start, end);
        self.restyle(key, style, surface)
    }

    /// Punkt-Anker neu berechnen: alle (`force`) oder nur den aktiven.
    pub fn calculate_anchor(
        &mut self,
        active: Option<usize>,
        force: bool,
        coordinates: &[Coordinate],
        surface: &mut OverlaySurface,
    ) {
        if force {
            for index in 0..self.points.len() {
                self.update_point(index, coordinates, surface);
            }
        } else if let Some(index) = active {
            self.update_point(index, coordinates, surface);
        }
    }

    /// Kanten-Anker neu berechnen: alle (`force`) oder die aktive Kante plus Nachbarn.
    ///
    /// Bei offenen Konturen entfallen die Nachbarn an den Enden.
    pub fn calculate_anchor_edges(
        &mut self,
        active: Option<usize>,
        force: bool,
        brep: &BrepSnapshot,
        coordinates: &[Coordinate],
        closed: bool,
        surface: &mut OverlaySurface,
    ) {
        if force {
            for index in 0..self.edges.len() {
                self.update_edge(index, brep, coordinates, surface);
            }
            return;
        }
        let Some(index) = active else {
            return;
        };
        self.update_edge(index, brep, coordinates, surface);
        for neighbour in neighbour_edges(index, self.edges.len(), closed) {
            self.update_edge(neighbour, brep, coordinates, surface);
        }
    }

    /// Kanten-Anker aller Kanten, die Koordinate `point` berühren.
    pub fn update_edges_touching(
        &mut self,
        point: usize,
        brep: &BrepSnapshot,
        coordinates: &[Coordinate],
        surface: &mut OverlaySurface,
    ) {
        for (index, &(a, b)) in brep.edges.iter().enumerate() {
            if a == point || b == point {
                self.update_edge(index, brep, coordinates, surface);
            }
        }
    }

    /// Entfernt alle Punkt-Anker. Mehrfacher Aufruf ist unkritisch.
    pub fn clear_points(&mut self, host: &mut dyn OverlayHost) {
        for key in self.points.drain(..) {
            if let Some(anchor) = self.anchors.remove(key) {
                host.remove_element(anchor.element);
            }
        }
    }

    /// Entfernt alle Kanten-Anker. Mehrfacher Aufruf ist unkritisch.
    pub fn clear_edges(&mut self, host: &mut dyn OverlayHost) {
        for key in self.edges.drain(..) {
            if let Some(anchor) = self.anchors.remove(key) {
                host.remove_element(anchor.element);
            }
        }
    }

    fn spawn(&mut self, tag: AnchorTag, style: AnchorStyle, surface: &mut OverlaySurface) -> AnchorKey {
        let element = surface.host.create_element(tag);
        surface.host.apply_style(element, &style);
        self.anchors.insert(Anchor {
            tag,
            element,
            style,
        })
    }

    fn restyle(&mut self, key: AnchorKey, style: AnchorStyle, surface: &mut OverlaySurface) -> bool {
        let Some(anchor) = self.anchors.get_mut(key) else {
            return false;
        };
        anchor.style = style;
        surface.host.apply_style(anchor.element, &style);
        true
    }
}

fn edge_positions(
    brep: &BrepSnapshot,
    coordinates: &[Coordinate],
    index: usize,
) -> Option<(Vec3, Vec3)> {
    let &(a, b) = brep.edges.get(index)?;
    let start = coordinates.get(a).or_else(|| brep.vertices.get(a))?;
    let end = coordinates.get(b).or_else(|| brep.vertices.get(b))?;
    Some((*start, *end))
}

fn neighbour_edges(index: usize, count: usize, closed: bool) -> Vec<usize> {
    let mut out = Vec::with_capacity(2);
    if count == 0 {
        return out;
    }
    if index > 0 {
        out.push(index - 1);
    } else if closed && count > 1 {
        out.push(count - 1);
    }
    if index + 1 < count {
        out.push(index + 1);
    } else if closed && count > 1 {
        out.push(0);
    }
    out.dedup();
    out.retain(|&n| n != index);
    out
}
