//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::OrbitCamera { yaw, pitch } => handlers::view::orbit(state, yaw, pitch),
            AppCommand::DollyCamera { factor } => handlers::view::dolly(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetCamera { camera } => handlers::view::set_camera(state, camera),
            AppCommand::RefreshOverlay => handlers::view::refresh_overlay(state),

            // === Shapes ===
            AppCommand::CreateShape {
                kind,
                points,
                label,
            } => handlers::shapes::create(state, kind, points, label),
            AppCommand::CreateShapeFromConfig { config } => {
                handlers::shapes::create_from_config(state, config)
            }
            AppCommand::InsertPoint { shape_id, point } => {
                handlers::shapes::insert_point(state, shape_id, point)?
            }
            AppCommand::InsertPoints { shape_id, points } => {
                handlers::shapes::insert_points(state, shape_id, &points)?
            }
            AppCommand::SetPoints { shape_id, points } => {
                handlers::shapes::set_points(state, shape_id, points)?
            }
            AppCommand::ResetPoints { shape_id } => {
                handlers::shapes::reset_points(state, shape_id)?
            }
            AppCommand::SetShapeSelected { shape_id, selected } => {
                handlers::shapes::set_selected(state, shape_id, selected)?
            }
            AppCommand::SetEditingCapabilities {
                shape_id,
                vertices,
                edges,
            } => handlers::shapes::set_editing_capabilities(state, shape_id, vertices, edges)?,
            AppCommand::DisposeShape { shape_id } => handlers::shapes::dispose(state, shape_id)?,

            // === Pointer ===
            AppCommand::BeginPointer { world_pos, target } => {
                handlers::pointer::down(state, world_pos, target)?
            }
            AppCommand::MovePointer { world_pos } => handlers::pointer::moved(state, world_pos),
            AppCommand::EndPointer => handlers::pointer::up(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
