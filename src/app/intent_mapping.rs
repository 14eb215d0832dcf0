//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Kamera- und Viewport-Änderungen ziehen immer ein `RefreshOverlay` nach sich.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![
            AppCommand::SetViewportSize { size },
            AppCommand::RefreshOverlay,
        ],
        AppIntent::CameraPan { delta } => {
            vec![AppCommand::PanCamera { delta }, AppCommand::RefreshOverlay]
        }
        AppIntent::CameraOrbit { yaw, pitch } => vec![
            AppCommand::OrbitCamera { yaw, pitch },
            AppCommand::RefreshOverlay,
        ],
        AppIntent::CameraZoom { factor } => {
            vec![AppCommand::DollyCamera { factor }, AppCommand::RefreshOverlay]
        }
        AppIntent::ZoomInRequested => vec![
            AppCommand::DollyCamera {
                factor: 1.0 / state.options.camera_dolly_step,
            },
            AppCommand::RefreshOverlay,
        ],
        AppIntent::ZoomOutRequested => vec![
            AppCommand::DollyCamera {
                factor: state.options.camera_dolly_step,
            },
            AppCommand::RefreshOverlay,
        ],
        AppIntent::ResetCameraRequested => {
            vec![AppCommand::ResetCamera, AppCommand::RefreshOverlay]
        }
        AppIntent::CameraChanged { camera } => {
            vec![AppCommand::SetCamera { camera }, AppCommand::RefreshOverlay]
        }
        AppIntent::CameraUpdated => vec![AppCommand::RefreshOverlay],

        AppIntent::CreateShapeRequested {
            kind,
            points,
            label,
        } => vec![AppCommand::CreateShape {
            kind,
            points,
            label,
        }],
        AppIntent::ShapeFromConfigRequested { config } => {
            vec![AppCommand::CreateShapeFromConfig { config }]
        }
        AppIntent::InsertPointRequested { shape_id, point } => {
            vec![AppCommand::InsertPoint { shape_id, point }]
        }
        AppIntent::InsertPointsRequested { shape_id, points } => {
            vec![AppCommand::InsertPoints { shape_id, points }]
        }
        AppIntent::SetPointsRequested { shape_id, points } => {
            vec![AppCommand::SetPoints { shape_id, points }]
        }
        AppIntent::ResetPointsRequested { shape_id } => {
            vec![AppCommand::ResetPoints { shape_id }]
        }
        AppIntent::ShapeSelectionRequested { shape_id, selected } => {
            vec![AppCommand::SetShapeSelected { shape_id, selected }]
        }
        AppIntent::EditingCapabilitiesChanged {
            shape_id,
            vertices,
            edges,
        } => vec![AppCommand::SetEditingCapabilities {
            shape_id,
            vertices,
            edges,
        }],
        AppIntent::DisposeShapeRequested { shape_id } => {
            vec![AppCommand::DisposeShape { shape_id }]
        }

        AppIntent::PointerDown {
            screen_pos,
            world_pos,
        } => {
            let target = state
                .overlay
                .hit_test(screen_pos, state.options.hit_tolerances());
            vec![AppCommand::BeginPointer { world_pos, target }]
        }
        AppIntent::AnchorPointerDown { tag, world_pos } => vec![AppCommand::BeginPointer {
            world_pos,
            target: Some(tag),
        }],
        AppIntent::PointerMove { world_pos } => vec![AppCommand::MovePointer { world_pos }],
        AppIntent::PointerUp => vec![AppCommand::EndPointer],

        AppIntent::OptionsChanged { options } => vec![
            AppCommand::ApplyOptions { options },
            AppCommand::RefreshOverlay,
        ],
    }
}
