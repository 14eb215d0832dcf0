//! 3D-Kamera für Pan, Dolly und Orbit über der Arbeitsebene.

use glam::{Mat4, Quat, Vec2, Vec3};

/// Perspektivische Kamera, standardmäßig senkrecht von oben auf die XZ-Ebene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec3,
    /// Blickziel in Welt-Koordinaten
    pub target: Vec3,
    /// Oben-Vektor der Kamera
    pub up: Vec3,
    /// Vertikales Sichtfeld in Radiant
    pub fov_y: f32,
    /// Near-Clipping-Ebene
    pub near: f32,
    /// Far-Clipping-Ebene
    pub far: f32,
}

impl Camera3D {
    /// Standard-Höhe der Plan-Kamera über der Arbeitsebene.
    pub const PLAN_HEIGHT: f32 = 10.0;
    /// Minimaler Abstand zum Blickziel.
    pub const DISTANCE_MIN: f32 = 0.5;
    /// Maximaler Abstand zum Blickziel.
    pub const DISTANCE_MAX: f32 = 500.0;

    /// Erstellt eine Plan-Kamera (Blick von oben, Bild-oben = -Z).
    pub fn plan(fov_y_deg: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, Self::PLAN_HEIGHT, 0.0),
            target: Vec3::ZERO,
            up: Vec3::NEG_Z,
            fov_y: fov_y_deg.to_radians(),
            near,
            far,
        }
    }

    /// View-Matrix (rechtshändig)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projektions-Matrix für ein Seitenverhältnis.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    /// Kombinierte View-Projection für eine Viewport-Größe in Pixeln.
    ///
    /// Bei Höhe 0 wird ein Seitenverhältnis von 1.0 angenommen.
    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        let aspect = if viewport.y > 0.0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Abstand zwischen Kamera und Blickziel.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Verschiebt Kamera und Blickziel (Pan).
    pub fn pan(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Ändert den Abstand zum Blickziel um `factor` (< 1 = näher heran).
    pub fn dolly_clamped(&mut self, factor: f32, min: f32, max: f32) {
        let offset = self.position - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let new_distance = (distance * factor).clamp(min, max);
        self.position = self.target + offset * (new_distance / distance);
    }

    /// Rotiert die Kamera um das Blickziel (Yaw um Welt-Y, Pitch um Kamera-Rechts).
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let offset = self.position - self.target;
        let forward = -offset.normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let pitch_rot = if right == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(right, pitch)
        };
        let rotation = Quat::from_rotation_y(yaw) * pitch_rot;

        self.position = self.target + rotation * offset;
        self.up = (rotation * self.up).normalize_or_zero();
    }

    /// Strahl durch eine Screen-Position (Pixel, Ursprung oben links).
    pub fn screen_ray(&self, screen_pos: Vec2, viewport: Vec2) -> Ray {
        let w = viewport.x.max(1.0);
        let h = viewport.y.max(1.0);
        let ndc = Vec2::new(screen_pos.x / w * 2.0 - 1.0, 1.0 - screen_pos.y / h * 2.0);

        let inverse = self.view_projection(viewport).inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));

        Ray {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }

    /// Projiziert eine Screen-Position auf die Arbeitsebene.
    pub fn screen_to_plane(
        &self,
        screen_pos: Vec2,
        viewport: Vec2,
        plane: WorkingPlane,
    ) -> Option<Vec3> {
        plane.intersect(&self.screen_ray(screen_pos, viewport))
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::plan(75.0, 0.1, 1000.0)
    }
}

/// Strahl in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt
    pub origin: Vec3,
    /// Normalisierte Richtung
    pub direction: Vec3,
}

/// Horizontale Arbeitsebene (y = elevation), auf der Cursor-Positionen liegen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkingPlane {
    /// Höhe der Ebene
    pub elevation: f32,
}

impl WorkingPlane {
    /// Schnittpunkt eines Strahls mit der Ebene (nur in Strahlrichtung).
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = ray.direction.y;
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (self.elevation - ray.origin.y) / denom;
        if t < 0.0 {
            return None;
        }
        Some(ray.origin + ray.direction * t)
    }
}
