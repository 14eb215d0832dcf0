//! Mesh-Puffer und Geometrie-Aufbau für Polygone und Polylinien.
//!
//! Jeder Neuaufbau verwirft den vorherigen Puffer vollständig. Zu wenige
//! Punkte ergeben einen leeren Puffer, nie ein degeneriertes Mesh.

use glam::{Vec2, Vec3};

/// Primitiv-Typ eines Mesh-Puffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Gefüllte Fläche (Dreiecksliste)
    Triangles,
    /// Offener Linienzug
    LineStrip,
}

/// Material eines Shapes (Farbe als 0xRRGGBB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// Farbe als 0xRRGGBB
    pub color: u32,
    /// Beidseitig sichtbar (Flächen in der XZ-Ebene)
    pub double_sided: bool,
}

impl Material {
    /// Linien-Material.
    pub fn line(color: u32) -> Self {
        Self {
            color,
            double_sided: false,
        }
    }

    /// Flächen-Material (beidseitig).
    pub fn surface(color: u32) -> Self {
        Self {
            color,
            double_sided: true,
        }
    }
}

/// GPU-unabhängiger Vertex-/Index-Puffer eines Shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    /// Primitiv-Typ
    pub primitive: Primitive,
    /// Vertex-Positionen in Reihenfolge der Kontrollpunkte
    pub positions: Vec<Vec3>,
    /// Indizes in `positions` (Dreiecke bzw. Linienzug)
    pub indices: Vec<u32>,
    /// Randkanten als Index-Paare in Windungsreihenfolge
    pub boundary: Vec<(usize, usize)>,
    /// Aktuell angewendetes Material
    pub material: Material,
    /// Zähler der Neuaufbauten (0 = nie gebaut)
    pub generation: u64,
}

impl MeshBuffer {
    /// Erstellt einen leeren Puffer.
    pub fn empty(primitive: Primitive, material: Material) -> Self {
        Self {
            primitive,
            positions: Vec::new(),
            indices: Vec::new(),
            boundary: Vec::new(),
            material,
            generation: 0,
        }
    }

    /// Gibt `true` zurück, wenn nichts gerendert werden kann.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Verwirft alle Vertex-/Index-Daten.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
        self.boundary.clear();
    }

    /// Baut eine geschlossene Fläche aus den Koordinaten.
    ///
    /// Gibt `false` zurück (leerer Puffer), wenn weniger als 3 Punkte vorliegen.
    pub fn rebuild_polygon(&mut self, coordinates: &[Vec3], material: Material) -> bool {
        self.clear();
        self.primitive = Primitive::Triangles;
        self.material = material;
        self.generation += 1;

        if coordinates.len() < 3 {
            log::debug!(
                "Polygon mit {} Punkten: Geometrie wird nicht erzeugt",
                coordinates.len()
            );
            return false;
        }

        let n = coordinates.len();
        self.positions.extend_from_slice(coordinates);
        self.indices = triangulate_polygon(coordinates);
        self.boundary = (0..n).map(|i| (i, (i + 1) % n)).collect();
        true
    }

    /// Baut einen offenen Linienzug aus den Koordinaten.
    ///
    /// Gibt `false` zurück (leerer Puffer), wenn weniger als 2 Punkte vorliegen.
    pub fn rebuild_polyline(&mut self, coordinates: &[Vec3], material: Material) -> bool {
        self.clear();
        self.primitive = Primitive::LineStrip;
        self.material = material;
        self.generation += 1;

        if coordinates.len() < 2 {
            log::debug!(
                "Polylinie mit {} Punkten: Geometrie wird nicht erzeugt",
                coordinates.len()
            );
            return false;
        }

        let n = coordinates.len();
        self.positions.extend_from_slice(coordinates);
        self.indices = (0..n as u32).collect();
        self.boundary = (0..n - 1).map(|i| (i, i + 1)).collect();
        true
    }

    /// Anzahl der Dreiecke (0 bei Linienzügen).
    pub fn triangle_count(&self) -> usize {
        match self.primitive {
            Primitive::Triangles => self.indices.len() / 3,
            Primitive::LineStrip => 0,
        }
    }
}

/// Trianguliert ein einfaches (ggf. konkaves) Polygon per Ear-Clipping.
///
/// Das Polygon wird auf die Ebene seiner dominanten Normalen-Achse projiziert.
/// Nicht auflösbare Reste werden als Fächer trianguliert.
pub fn triangulate_polygon(coordinates: &[Vec3]) -> Vec<u32> {
    let n = coordinates.len();
    let mut out = Vec::with_capacity(n.saturating_sub(2) * 3);
    if n < 3 {
        return out;
    }

    let normal = newell_normal(coordinates);
    let abs = normal.abs();
    let verts_2d: Vec<Vec2> = coordinates
        .iter()
        .map(|p| {
            if abs.y >= abs.x && abs.y >= abs.z {
                Vec2::new(p.x, p.z)
            } else if abs.x >= abs.z {
                Vec2::new(p.y, p.z)
            } else {
                Vec2::new(p.x, p.y)
            }
        })
        .collect();

    let reversed = signed_area_2d(&verts_2d) < 0.0;
    let mut remaining: Vec<usize> = (0..n).collect();

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut found_ear = false;

        for i in 0..m {
            let prev = (i + m - 1) % m;
            let next = (i + 1) % m;
            let a = verts_2d[remaining[prev]];
            let b = verts_2d[remaining[i]];
            let c = verts_2d[remaining[next]];

            let cross = (b - a).perp_dot(c - a);
            let is_convex = if reversed { cross < 0.0 } else { cross > 0.0 };
            if !is_convex {
                continue;
            }

            let blocked = (0..m)
                .filter(|&j| j != prev && j != i && j != next)
                .any(|j| point_in_triangle(verts_2d[remaining[j]], a, b, c));
            if blocked {
                continue;
            }

            out.extend([
                remaining[prev] as u32,
                remaining[i] as u32,
                remaining[next] as u32,
            ]);
            remaining.remove(i);
            found_ear = true;
            break;
        }

        if !found_ear {
            break;
        }
    }

    // Rest (Dreieck oder degenerierter Rest) als Fächer
    for k in 1..remaining.len().saturating_sub(1) {
        out.extend([
            remaining[0] as u32,
            remaining[k] as u32,
            remaining[k + 1] as u32,
        ]);
    }
    out
}

fn newell_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal
}

fn signed_area_2d(points: &[Vec2]) -> f32 {
    let mut area = 0.0;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        area += current.perp_dot(next);
    }
    area * 0.5
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
