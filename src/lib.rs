//! OpenPlans Editor Library.
//! Interaktive BREP-Bearbeitung von Polygonen und Polylinien, als Library
//! exportiert für Hosts, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod editor;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    BrepSnapshot, Camera3D, Coordinate, CoordinateStore, Editable2DShape, MeshBuffer,
    PolygonShape, PolylineShape, PropertySet, ScreenProjector, ShapeId, ShapeKind, WorkingPlane,
};
pub use editor::{
    AnchorKind, AnchorStyle, AnchorTag, DragState, EditContext, EditableShape, OverlayHost,
    OverlayLayer,
};
pub use shared::{EditorOptions, RenderScene};
