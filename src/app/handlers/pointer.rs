//! Handler für Pointer-Events auf dem Anker-Overlay.

use crate::app::use_cases;
use crate::app::AppState;
use crate::editor::AnchorTag;

/// Pointer-Down mit aufgelöstem Ziel.
pub fn down(
    state: &mut AppState,
    world_pos: glam::Vec3,
    target: Option<AnchorTag>,
) -> anyhow::Result<()> {
    use_cases::drag::begin(state, world_pos, target)
}

/// Pointer-Move.
pub fn moved(state: &mut AppState, world_pos: glam::Vec3) {
    use_cases::drag::update(state, world_pos);
}

/// Pointer-Up.
pub fn up(state: &mut AppState) {
    use_cases::drag::end(state);
}
