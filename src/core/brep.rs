//! Topologische Randdarstellung (BREP) eines generierten Shapes.
//!
//! Ein Snapshot wird beim Betreten des Edit-Modus und nach jeder
//! abgeschlossenen Mutation aus dem Mesh-Puffer extrahiert. Werte werden
//! unverändert übernommen (kein Snapping, keine Toleranz).

use super::geometry::MeshBuffer;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Vertices und geordnete Kanten eines Shapes.
///
/// Kante `i` verbindet Vertex `i` mit Vertex `i + 1`; geschlossene Shapes
/// besitzen zusätzlich die Schließkante `last → first`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrepSnapshot {
    /// Vertex-Positionen (JSON: `{x, y, z}`)
    #[serde(with = "vertex_list")]
    pub vertices: Vec<Vec3>,
    /// Kanten als Index-Paare (JSON: `[a, b]`)
    pub edges: Vec<(usize, usize)>,
}

impl BrepSnapshot {
    /// Extrahiert den Snapshot aus einem Mesh-Puffer. `None` bei leerem Puffer.
    pub fn extract(mesh: &MeshBuffer) -> Option<Self> {
        if mesh.is_empty() {
            return None;
        }
        Some(Self {
            vertices: mesh.positions.clone(),
            edges: mesh.boundary.clone(),
        })
    }

    /// Gibt die Endpunkte der Kante `index` zurück.
    pub fn edge(&self, index: usize) -> Option<(Vec3, Vec3)> {
        let &(a, b) = self.edges.get(index)?;
        Some((*self.vertices.get(a)?, *self.vertices.get(b)?))
    }

    /// Anzahl der Kanten.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Prüft, dass jede Kante auf existierende Vertices verweist.
    pub fn validate(&self) -> anyhow::Result<()> {
        let n = self.vertices.len();
        for (i, &(a, b)) in self.edges.iter().enumerate() {
            anyhow::ensure!(
                a < n && b < n,
                "Kante {} ({}, {}) verweist auf fehlenden Vertex (nur {} Vertices)",
                i,
                a,
                b,
                n
            );
        }
        Ok(())
    }

    /// Serialisiert den Snapshot als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Liest einen Snapshot aus JSON und validiert die Kanten-Indizes.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Serde-Adapter: `Vec<Vec3>` als Liste von `{x, y, z}`-Objekten.
mod vertex_list {
    use glam::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Vertex {
        x: f32,
        y: f32,
        z: f32,
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(vertices: &Vec<Vec3>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(vertices.iter().map(|v| Vertex {
            x: v.x,
            y: v.y,
            z: v.z,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec3>, D::Error> {
        let raw = Vec::<Vertex>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|v| Vec3::new(v.x, v.y, v.z)).collect())
    }
}
