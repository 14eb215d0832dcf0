//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Render-Szene, die zwischen `app` und dem
//! Host-Renderer geteilt werden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{RenderScene, ShapeMesh};
