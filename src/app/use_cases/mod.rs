//! Use-Case-Funktionen: fachliche Abläufe auf dem AppState.
//!
//! Handler rufen diese Funktionen auf; sie kennen weder Intents noch Commands.

pub mod camera;
pub mod drag;
pub mod options;
pub mod overlay;
pub mod shapes;
pub mod viewport;
