//! Core-Domänentypen: Kontrollpunkte, Shapes, Geometrie, BREP, Kamera, Projektion.

pub mod brep;
pub mod camera;
pub mod coordinate_store;
/// Mesh-Puffer und Triangulierung
pub mod geometry;
pub mod projector;
pub mod shape;

pub use brep::BrepSnapshot;
pub use camera::{Camera3D, Ray, WorkingPlane};
pub use coordinate_store::{Coordinate, CoordinateStore};
pub use geometry::{Material, MeshBuffer, Primitive};
pub use projector::{to_screen_position, ScreenProjector};
pub use shape::{
    shape_from_config, Dimensions, Editable2DShape, PolygonShape, PolylineShape, PropertySet,
    ShapeId, ShapeKind,
};
