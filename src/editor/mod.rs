//! Interaktive Bearbeitung: Anker-Overlay, Drag-Zustand und Edit-Kontext.

pub mod anchor;
pub mod context;
pub mod drag;
pub mod host;
pub mod overlay;
pub mod shape_editor;

pub use anchor::{Anchor, AnchorKey, AnchorKind, AnchorStyle, AnchorTag, HitTolerances};
pub use context::EditContext;
pub use drag::DragState;
pub use host::{ElementId, OverlayChange, OverlayElement, OverlayHost, OverlayLayer};
pub use overlay::{AnchorOverlay, OverlaySurface};
pub use shape_editor::EditableShape;
