//! Anker-Typen: Tags, Screen-Styles und Treffer-Prüfung.

use super::host::ElementId;
use crate::core::ShapeId;
use glam::Vec2;

slotmap::new_key_type! {
    /// Handle eines Ankers in der Anker-Arena eines Shapes.
    pub struct AnchorKey;
}

/// Art eines Ankers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// Griff auf einem Kontrollpunkt
    Point,
    /// Griff auf einer Kante
    Edge,
}

/// Typisierte Identität eines Ankers (Shape + Punkt-/Kanten-Index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorTag {
    /// Punkt- oder Kanten-Anker
    pub kind: AnchorKind,
    /// Besitzendes Shape
    pub shape_id: ShapeId,
    /// Koordinaten-Index (Punkt) bzw. Kanten-Index (Kante)
    pub index: usize,
}

impl AnchorTag {
    /// Tag eines Punkt-Ankers.
    pub fn point(shape_id: ShapeId, index: usize) -> Self {
        Self {
            kind: AnchorKind::Point,
            shape_id,
            index,
        }
    }

    /// Tag eines Kanten-Ankers.
    pub fn edge(shape_id: ShapeId, index: usize) -> Self {
        Self {
            kind: AnchorKind::Edge,
            shape_id,
            index,
        }
    }
}

/// Screen-Layout eines Overlay-Elements in Pixeln.
///
/// Kanten-Anker sind Balken der Höhe 0, die am Startpunkt (`left`, `top`)
/// beginnen und um diesen Punkt rotiert werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorStyle {
    /// Linke Kante bzw. Startpunkt X
    pub left: f32,
    /// Obere Kante bzw. Startpunkt Y
    pub top: f32,
    /// Breite (Kante: Länge)
    pub width: f32,
    /// Höhe (Kante: 0)
    pub height: f32,
    /// Rotation in Grad um (`left`, `top`)
    pub rotation_deg: f32,
}

impl AnchorStyle {
    /// Quadratischer Marker, zentriert auf `center`.
    pub fn point(center: Vec2, size: f32) -> Self {
        Self {
            left: center.x - size * 0.5,
            top: center.y - size * 0.5,
            width: size,
            height: size,
            rotation_deg: 0.0,
        }
    }

    /// Balken von `start` nach `end`.
    pub fn edge(start: Vec2, end: Vec2) -> Self {
        let d = end - start;
        Self {
            left: start.x,
            top: start.y,
            width: d.length(),
            height: 0.0,
            rotation_deg: d.y.atan2(d.x).to_degrees(),
        }
    }

    /// Mittelpunkt eines Punkt-Markers.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Startpunkt eines Kanten-Balkens.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Endpunkt eines Kanten-Balkens.
    pub fn end_point(&self) -> Vec2 {
        let angle = self.rotation_deg.to_radians();
        self.origin() + Vec2::new(angle.cos(), angle.sin()) * self.width
    }

    /// Prüft, ob `pos` den Anker trifft.
    pub fn contains(&self, kind: AnchorKind, pos: Vec2, tolerances: HitTolerances) -> bool {
        match kind {
            AnchorKind::Point => {
                let pad = tolerances.point_padding_px;
                pos.x >= self.left - pad
                    && pos.x <= self.left + self.width + pad
                    && pos.y >= self.top - pad
                    && pos.y <= self.top + self.height + pad
            }
            AnchorKind::Edge => {
                distance_to_segment(pos, self.origin(), self.end_point())
                    <= tolerances.edge_tolerance_px
            }
        }
    }

    /// Inline-CSS für eine DOM-Brücke.
    pub fn to_css(&self) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px; \
             transform: rotate({:.2}deg); transform-origin: 0 0;",
            self.left, self.top, self.width, self.height, self.rotation_deg
        )
    }
}

/// Pixel-Toleranzen für die Anker-Trefferprüfung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTolerances {
    /// Zusätzlicher Rand um Punkt-Marker
    pub point_padding_px: f32,
    /// Maximaler Abstand zu einem Kanten-Balken
    pub edge_tolerance_px: f32,
}

impl Default for HitTolerances {
    fn default() -> Self {
        Self {
            point_padding_px: crate::shared::options::POINT_HIT_PADDING_PX,
            edge_tolerance_px: crate::shared::options::EDGE_HIT_TOLERANCE_PX,
        }
    }
}

/// Ein Anker: Tag, zugehöriges Overlay-Element und letzter Style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Typisierte Identität
    pub tag: AnchorTag,
    /// Element im Overlay-Host
    pub element: ElementId,
    /// Zuletzt angewendeter Style
    pub style: AnchorStyle,
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
