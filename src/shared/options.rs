//! Zentrale Konfiguration für den OpenPlans-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Camera3D;
use crate::editor::HitTolerances;
use serde::{Deserialize, Serialize};

// ── Anker ───────────────────────────────────────────────────────────

/// Kantenlänge der Punkt-Marker in Pixeln.
pub const POINT_ANCHOR_SIZE_PX: f32 = 7.0;
/// Zusätzlicher Trefferrand um Punkt-Marker in Pixeln.
pub const POINT_HIT_PADDING_PX: f32 = 2.0;
/// Maximaler Abstand zu einem Kanten-Balken in Pixeln.
pub const EDGE_HIT_TOLERANCE_PX: f32 = 4.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Standardfarbe neuer Polylinien (0xRRGGBB).
pub const POLYLINE_COLOR: u32 = 0x4460FF;
/// Standardfarbe neuer Polygone (0xRRGGBB).
pub const POLYGON_COLOR: u32 = 0xCCCCCC;
/// Farbe eines Shapes im Edit-Modus.
pub const SELECTION_COLOR: u32 = 0x4460FF;

// ── Kamera ──────────────────────────────────────────────────────────

/// Vertikales Sichtfeld in Grad.
pub const CAMERA_FOV_DEG: f32 = 75.0;
/// Near-Clipping-Ebene.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far-Clipping-Ebene.
pub const CAMERA_FAR: f32 = 1000.0;
/// Minimaler Abstand zum Blickziel.
pub const CAMERA_DISTANCE_MIN: f32 = Camera3D::DISTANCE_MIN;
/// Maximaler Abstand zum Blickziel.
pub const CAMERA_DISTANCE_MAX: f32 = Camera3D::DISTANCE_MAX;
/// Dolly-Faktor pro Zoom-Schritt.
pub const CAMERA_DOLLY_STEP: f32 = 1.2;

// ── Arbeitsebene ────────────────────────────────────────────────────

/// Höhe der Arbeitsebene, auf die gezogene Punkte gesetzt werden.
pub const WORKING_PLANE_ELEVATION: f32 = 0.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `openplans_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Anker ───────────────────────────────────────────────────
    /// Kantenlänge der Punkt-Marker in Pixeln
    pub point_anchor_size_px: f32,
    /// Trefferrand um Punkt-Marker in Pixeln
    pub point_hit_padding_px: f32,
    /// Treffertoleranz für Kanten-Balken in Pixeln
    pub edge_hit_tolerance_px: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Standardfarbe neuer Polylinien
    pub polyline_color: u32,
    /// Standardfarbe neuer Polygone
    pub polygon_color: u32,
    /// Farbe im Edit-Modus
    pub selection_color: u32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Sichtfeld in Grad
    pub camera_fov_deg: f32,
    /// Near-Clipping-Ebene
    pub camera_near: f32,
    /// Far-Clipping-Ebene
    pub camera_far: f32,
    /// Minimaler Kamera-Abstand
    pub camera_distance_min: f32,
    /// Maximaler Kamera-Abstand
    pub camera_distance_max: f32,
    /// Dolly-Faktor pro Zoom-Schritt
    #[serde(default = "default_camera_dolly_step")]
    pub camera_dolly_step: f32,

    // ── Arbeitsebene ────────────────────────────────────────────
    /// Höhe der Arbeitsebene
    #[serde(default)]
    pub working_plane_elevation: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_anchor_size_px: POINT_ANCHOR_SIZE_PX,
            point_hit_padding_px: POINT_HIT_PADDING_PX,
            edge_hit_tolerance_px: EDGE_HIT_TOLERANCE_PX,

            polyline_color: POLYLINE_COLOR,
            polygon_color: POLYGON_COLOR,
            selection_color: SELECTION_COLOR,

            camera_fov_deg: CAMERA_FOV_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            camera_distance_min: CAMERA_DISTANCE_MIN,
            camera_distance_max: CAMERA_DISTANCE_MAX,
            camera_dolly_step: CAMERA_DOLLY_STEP,

            working_plane_elevation: WORKING_PLANE_ELEVATION,
        }
    }
}

/// Serde-Default für `camera_dolly_step` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_camera_dolly_step() -> f32 {
    CAMERA_DOLLY_STEP
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("openplans-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("openplans_editor.toml")
    }

    /// Standardfarbe für eine Shape-Art.
    pub fn color_for(&self, kind: crate::core::ShapeKind) -> u32 {
        match kind {
            crate::core::ShapeKind::Polygon => self.polygon_color,
            crate::core::ShapeKind::Polyline => self.polyline_color,
        }
    }

    /// Treffertoleranzen für die Anker-Trefferprüfung.
    pub fn hit_tolerances(&self) -> HitTolerances {
        HitTolerances {
            point_padding_px: self.point_hit_padding_px,
            edge_tolerance_px: self.edge_hit_tolerance_px,
        }
    }

    /// Plan-Kamera mit den konfigurierten Projektionswerten.
    pub fn default_camera(&self) -> Camera3D {
        Camera3D::plan(self.camera_fov_deg, self.camera_near, self.camera_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_round_trip() {
        let mut options = EditorOptions::default();
        options.point_anchor_size_px = 9.0;
        options.selection_color = 0xFF0000;

        let content = toml::to_string_pretty(&options).expect("TOML-Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&content).expect("TOML-Parsen erwartet");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let full = toml::to_string_pretty(&EditorOptions::default())
            .expect("TOML-Serialisierung erwartet");
        let reduced: String = full
            .lines()
            .filter(|line| {
                !line.starts_with("camera_dolly_step") && !line.starts_with("working_plane_elevation")
            })
            .map(|line| format!("{line}\n"))
            .collect();

        let parsed: EditorOptions = toml::from_str(&reduced).expect("Parsen erwartet");
        assert_eq!(parsed.camera_dolly_step, CAMERA_DOLLY_STEP);
        assert_eq!(parsed.working_plane_elevation, WORKING_PLANE_ELEVATION);
    }

    #[test]
    fn test_load_from_missing_file_falls_back_to_defaults() {
        let options =
            EditorOptions::load_from_file(std::path::Path::new("/nonexistent/openplans_editor.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "openplans_editor_options_{}.toml",
            std::process::id()
        ));
        let mut options = EditorOptions::default();
        options.working_plane_elevation = 3.0;

        options.save_to_file(&path).expect("Speichern erwartet");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }
}
