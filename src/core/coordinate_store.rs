//! Geordnete Kontrollpunkt-Liste eines Shapes.
//!
//! Die Einfügereihenfolge ist semantisch: sie definiert die Windungsrichtung
//! von Polygon bzw. Polylinie.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein Kontrollpunkt in Welt-Koordinaten.
pub type Coordinate = Vec3;

/// Einzige Quelle der Wahrheit für den Umriss eines Shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateStore {
    points: Vec<Coordinate>,
}

impl CoordinateStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Erstellt einen Store aus einer bestehenden Punktliste.
    pub fn from_points(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.points
    }

    /// Kontrollpunkt an `index`.
    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.points.get(index).copied()
    }

    /// Erster Kontrollpunkt.
    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    /// Letzter Kontrollpunkt.
    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Ersetzt alle Kontrollpunkte.
    pub fn set_points(&mut self, points: Vec<Coordinate>) {
        self.points = points;
    }

    /// Hängt einen Kontrollpunkt an.
    pub fn push(&mut self, point: Coordinate) {
        self.points.push(point);
    }

    /// Hängt mehrere Kontrollpunkte in Reihenfolge an.
    pub fn extend_from_slice(&mut self, points: &[Coordinate]) {
        self.points.extend_from_slice(points);
    }

    /// Entfernt alle Kontrollpunkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Überschreibt den Punkt an `index`. `false` bei ungültigem Index.
    pub fn set(&mut self, index: usize, point: Coordinate) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Iterator über alle Kontrollpunkte.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }
}
