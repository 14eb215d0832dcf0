//! Editierbare 2D-Shapes (Polygon, Polylinie) und ihr Regenerierungs-Vertrag.
//!
//! Jede Mutation der Kontrollpunkte baut die Geometrie synchron neu auf.

use super::brep::BrepSnapshot;
use super::coordinate_store::{Coordinate, CoordinateStore};
use super::geometry::{Material, MeshBuffer, Primitive};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Eindeutige Shape-ID innerhalb eines `AppState`.
pub type ShapeId = u64;

/// Art eines editierbaren Shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Geschlossene Fläche
    Polygon,
    /// Offener Linienzug
    Polyline,
}

impl ShapeKind {
    /// Gibt `true` zurück, wenn die Kontur geschlossen ist.
    pub fn is_closed(self) -> bool {
        matches!(self, ShapeKind::Polygon)
    }
}

/// Abmessungen eines Shapes (Polylinie: Start-/Endpunkt).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Erster Kontrollpunkt
    pub start: Vec3,
    /// Letzter Kontrollpunkt
    pub end: Vec3,
    /// Linienbreite
    pub width: f32,
}

/// Konfiguration eines Shapes: Kontrollpunkte plus skalare Attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySet {
    /// Anzeigename
    pub label_name: String,
    /// Shape-Art
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Farbe als 0xRRGGBB
    pub color: u32,
    /// Abmessungen
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Mittelpunkt der Bounding-Box
    #[serde(default)]
    pub center: Vec3,
    /// Geordnete Kontrollpunkte
    pub coordinates: CoordinateStore,
}

impl PropertySet {
    /// Erstellt eine Konfiguration mit Standardwerten.
    pub fn new(kind: ShapeKind, label_name: impl Into<String>, color: u32) -> Self {
        Self {
            label_name: label_name.into(),
            kind,
            color,
            dimensions: Dimensions {
                width: 1.0,
                ..Dimensions::default()
            },
            center: Vec3::ZERO,
            coordinates: CoordinateStore::new(),
        }
    }
}

/// Fähigkeiten eines Shapes, die der Editor benötigt.
///
/// Implementierer liefern nur Zugriff auf Konfiguration und Mesh sowie den
/// Neuaufbau; die Punkt-Operationen sind darauf aufgebaut.
pub trait Editable2DShape: std::fmt::Debug {
    /// Shape-Art
    fn kind(&self) -> ShapeKind;

    /// Read-only Konfiguration
    fn property_set(&self) -> &PropertySet;

    /// Mutable Konfiguration (ohne automatischen Neuaufbau)
    fn property_set_mut(&mut self) -> &mut PropertySet;

    /// Aktueller Mesh-Puffer
    fn geometry(&self) -> &MeshBuffer;

    /// Baut die Geometrie neu auf. `false`, wenn zu wenige Punkte vorliegen.
    fn regenerate(&mut self) -> bool;

    /// Setzt (`Some`) oder entfernt (`None`) die Hervorhebungsfarbe.
    fn set_highlight(&mut self, color: Option<u32>);

    /// Gibt den Mesh-Puffer frei.
    fn release_geometry(&mut self);

    /// Geordnete Kontrollpunkte
    fn coordinates(&self) -> &CoordinateStore {
        &self.property_set().coordinates
    }

    /// Ersetzt alle Kontrollpunkte.
    fn set_points(&mut self, points: Vec<Coordinate>) {
        self.property_set_mut().coordinates.set_points(points);
        self.regenerate();
    }

    /// Hängt einen Kontrollpunkt an.
    fn insert_point(&mut self, point: Coordinate) {
        self.property_set_mut().coordinates.push(point);
        self.regenerate();
    }

    /// Hängt mehrere Kontrollpunkte an (ein Neuaufbau).
    fn insert_points(&mut self, points: &[Coordinate]) {
        self.property_set_mut().coordinates.extend_from_slice(points);
        self.regenerate();
    }

    /// Entfernt alle Kontrollpunkte.
    fn reset_points(&mut self) {
        self.property_set_mut().coordinates.clear();
        self.regenerate();
    }

    /// Überschreibt einen Kontrollpunkt. `false` bei ungültigem Index.
    fn set_point(&mut self, index: usize, point: Coordinate) -> bool {
        if !self.property_set_mut().coordinates.set(index, point) {
            return false;
        }
        self.regenerate();
        true
    }

    /// Überschreibt mehrere Kontrollpunkte mit einem einzigen Neuaufbau.
    ///
    /// Bei einem ungültigen Index bleibt der Store unverändert.
    fn set_points_at(&mut self, updates: &[(usize, Coordinate)]) -> bool {
        let len = self.coordinates().len();
        if updates.iter().any(|&(index, _)| index >= len) {
            return false;
        }
        let store = &mut self.property_set_mut().coordinates;
        for &(index, point) in updates {
            store.set(index, point);
        }
        self.regenerate();
        true
    }

    /// Extrahiert die BREP-Daten der aktuellen Geometrie.
    fn brep(&self) -> Option<BrepSnapshot> {
        BrepSnapshot::extract(self.geometry())
    }
}

// ── Polygon ─────────────────────────────────────────────────────────

/// Geschlossene, gefüllte Fläche in der Arbeitsebene.
#[derive(Debug, Clone)]
pub struct PolygonShape {
    props: PropertySet,
    mesh: MeshBuffer,
    highlight: Option<u32>,
}

impl PolygonShape {
    /// Erstellt ein Polygon und baut die Geometrie sofort auf.
    pub fn new(label_name: impl Into<String>, color: u32, points: Vec<Coordinate>) -> Self {
        let mut props = PropertySet::new(ShapeKind::Polygon, label_name, color);
        props.coordinates.set_points(points);
        Self::from_config(props)
    }

    /// Erstellt ein Polygon aus einer gespeicherten Konfiguration.
    pub fn from_config(mut props: PropertySet) -> Self {
        props.kind = ShapeKind::Polygon;
        let mut shape = Self {
            mesh: MeshBuffer::empty(Primitive::Triangles, Material::surface(props.color)),
            props,
            highlight: None,
        };
        shape.regenerate();
        shape
    }

    /// Aktuelle Konfiguration (Kopie).
    pub fn config(&self) -> PropertySet {
        self.props.clone()
    }

    fn material(&self) -> Material {
        Material::surface(self.highlight.unwrap_or(self.props.color))
    }
}

impl Editable2DShape for PolygonShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn property_set(&self) -> &PropertySet {
        &self.props
    }

    fn property_set_mut(&mut self) -> &mut PropertySet {
        &mut self.props
    }

    fn geometry(&self) -> &MeshBuffer {
        &self.mesh
    }

    fn regenerate(&mut self) -> bool {
        let material = self.material();
        let built = self
            .mesh
            .rebuild_polygon(self.props.coordinates.as_slice(), material);
        if let Some(center) = bounding_center(self.props.coordinates.as_slice()) {
            self.props.center = center;
        }
        built
    }

    fn set_highlight(&mut self, color: Option<u32>) {
        self.highlight = color;
        self.mesh.material = self.material();
    }

    fn release_geometry(&mut self) {
        self.mesh.clear();
    }
}

// ── Polylinie ───────────────────────────────────────────────────────

/// Offener Linienzug in der Arbeitsebene.
#[derive(Debug, Clone)]
pub struct PolylineShape {
    props: PropertySet,
    mesh: MeshBuffer,
    highlight: Option<u32>,
}

impl PolylineShape {
    /// Erstellt eine Polylinie und baut die Geometrie sofort auf.
    pub fn new(label_name: impl Into<String>, color: u32, points: Vec<Coordinate>) -> Self {
        let mut props = PropertySet::new(ShapeKind::Polyline, label_name, color);
        props.coordinates.set_points(points);
        Self::from_config(props)
    }

    /// Erstellt eine Polylinie aus einer gespeicherten Konfiguration.
    pub fn from_config(mut props: PropertySet) -> Self {
        props.kind = ShapeKind::Polyline;
        let mut shape = Self {
            mesh: MeshBuffer::empty(Primitive::LineStrip, Material::line(props.color)),
            props,
            highlight: None,
        };
        shape.regenerate();
        shape
    }

    /// Aktuelle Konfiguration (Kopie).
    pub fn config(&self) -> PropertySet {
        self.props.clone()
    }

    fn material(&self) -> Material {
        Material::line(self.highlight.unwrap_or(self.props.color))
    }
}

impl Editable2DShape for PolylineShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
    }

    fn property_set(&self) -> &PropertySet {
        &self.props
    }

    fn property_set_mut(&mut self) -> &mut PropertySet {
        &mut self.props
    }

    fn geometry(&self) -> &MeshBuffer {
        &self.mesh
    }

    fn regenerate(&mut self) -> bool {
        let material = self.material();
        let built = self
            .mesh
            .rebuild_polyline(self.props.coordinates.as_slice(), material);
        // Start/Ende folgen immer dem ersten bzw. letzten Punkt
        if let (Some(first), Some(last)) = (
            self.props.coordinates.first(),
            self.props.coordinates.last(),
        ) {
            self.props.dimensions.start = first;
            self.props.dimensions.end = last;
        }
        built
    }

    fn set_highlight(&mut self, color: Option<u32>) {
        self.highlight = color;
        self.mesh.material = self.material();
    }

    fn release_geometry(&mut self) {
        self.mesh.clear();
    }
}

/// Erstellt das passende Shape zu einer Konfiguration.
pub fn shape_from_config(props: PropertySet) -> Box<dyn Editable2DShape> {
    match props.kind {
        ShapeKind::Polygon => Box::new(PolygonShape::from_config(props)),
        ShapeKind::Polyline => Box::new(PolylineShape::from_config(props)),
    }
}

fn bounding_center(points: &[Coordinate]) -> Option<Vec3> {
    let first = *points.first()?;
    let (min, max) = points
        .iter()
        .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
    Some((min + max) * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn test_polygon_edge_count_matches_side_count() {
        let polygon = PolygonShape::new("Raum", 0xcccccc, square());
        let brep = polygon.brep().expect("BREP erwartet");
        assert_eq!(brep.edges.len(), 4);
    }

    #[test]
    fn test_polyline_edge_count_is_points_minus_one() {
        let mut polyline = PolylineShape::new("Linie", 0x4460ff, Vec::new());
        polyline.insert_points(&square());
        let brep = polyline.brep().expect("BREP erwartet");
        assert_eq!(brep.edges.len(), 3);
    }

    #[test]
    fn test_inserted_points_round_trip_through_brep() {
        let mut polygon = PolygonShape::new("Raum", 0, Vec::new());
        for p in square() {
            polygon.insert_point(p);
        }
        let brep = polygon.brep().expect("BREP erwartet");
        assert_eq!(brep.vertices, square());
    }

    #[test]
    fn test_polygon_below_minimum_has_no_geometry() {
        let polygon = PolygonShape::new("Raum", 0, square()[..2].to_vec());
        assert!(polygon.geometry().is_empty());
        assert!(polygon.brep().is_none());
    }

    #[test]
    fn test_reset_points_clears_geometry() {
        let mut polygon = PolygonShape::new("Raum", 0, square());
        polygon.reset_points();
        assert!(polygon.coordinates().is_empty());
        assert!(polygon.geometry().is_empty());
    }

    #[test]
    fn test_polyline_dimensions_follow_endpoints() {
        let mut polyline = PolylineShape::new("Linie", 0, square());
        assert_eq!(polyline.property_set().dimensions.start, square()[0]);
        assert_eq!(polyline.property_set().dimensions.end, square()[3]);

        assert!(polyline.set_point(3, Vec3::new(5.0, 0.0, 5.0)));
        assert_eq!(polyline.property_set().dimensions.end, Vec3::new(5.0, 0.0, 5.0));
    }

    #[test]
    fn test_polygon_tracks_bounding_center() {
        let polygon = PolygonShape::new("Raum", 0, square());
        let center = polygon.property_set().center;
        assert_relative_eq!(center.x, 1.0);
        assert_relative_eq!(center.z, 1.0);
    }

    #[test]
    fn test_set_points_at_rejects_invalid_index_without_mutation() {
        let mut polygon = PolygonShape::new("Raum", 0, square());
        let generation = polygon.geometry().generation;
        assert!(!polygon.set_points_at(&[(0, Vec3::ONE), (9, Vec3::ONE)]));
        assert_eq!(polygon.coordinates().as_slice(), square().as_slice());
        assert_eq!(polygon.geometry().generation, generation);
    }

    #[test]
    fn test_highlight_swaps_material_color() {
        let mut polygon = PolygonShape::new("Raum", 0xcccccc, square());
        polygon.set_highlight(Some(0x4460ff));
        assert_eq!(polygon.geometry().material.color, 0x4460ff);
        polygon.regenerate();
        assert_eq!(polygon.geometry().material.color, 0x4460ff);
        polygon.set_highlight(None);
        assert_eq!(polygon.geometry().material.color, 0xcccccc);
    }

    #[test]
    fn test_config_round_trip_through_json() {
        let polyline = PolylineShape::new("Achse", 0x4460ff, square());
        let json = serde_json::to_string(&polyline.config()).expect("Serialisierung erwartet");
        assert!(json.contains(r#""type":"polyline""#));
        assert!(json.contains(r#""labelName":"Achse""#));

        let props: PropertySet = serde_json::from_str(&json).expect("Parsen erwartet");
        let restored = shape_from_config(props);
        assert_eq!(restored.kind(), ShapeKind::Polyline);
        assert_eq!(restored.coordinates().as_slice(), square().as_slice());
        assert!(!restored.geometry().is_empty());
    }
}
