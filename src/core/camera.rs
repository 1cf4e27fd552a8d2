//! Draufsicht-Kamera und Projektion von Weltpunkten auf den Bildschirm.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::vector_math::planar;

/// Ergebnis einer Projektion Welt → Bildschirm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Bildschirmposition in Pixeln (Ursprung oben links)
    pub position: DVec2,
    /// Liegt der Punkt innerhalb des Viewports?
    pub visible: bool,
}

/// Projektion von Weltpunkten auf Bildschirm-Pixel.
///
/// `None`, wenn der Punkt gar nicht projiziert werden kann.
pub trait ScreenProjector {
    fn world_to_screen(&self, world: DVec3) -> Option<ProjectedPoint>;
}

/// Kamera ueber der x/z-Ebene (Blickpunkt, Zoom, Viewport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopDownCamera {
    /// Blickpunkt in Welt-Koordinaten (x, z)
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so gross)
    pub zoom: f64,
    /// Viewport-Groesse in Pixeln
    pub viewport: DVec2,
}

impl TopDownCamera {
    /// Sichtbare Welt-Halbhoehe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f64 = 2048.0;

    /// Kamera im Ursprung mit gegebenem Viewport.
    pub fn new(viewport: DVec2) -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
            viewport,
        }
    }

    /// Halbe sichtbare Weltausdehnung (x, z) beim aktuellen Zoom.
    fn half_extent(&self) -> DVec2 {
        let aspect = self.viewport.x / self.viewport.y.max(1.0);
        DVec2::new(
            Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            Self::BASE_WORLD_EXTENT / self.zoom,
        )
    }

    /// Konvertiert Welt-Koordinaten (x, z) zu Screen-Koordinaten.
    pub fn planar_to_screen(&self, world: DVec2) -> DVec2 {
        let ndc = (world - self.position) / self.half_extent();
        (ndc + DVec2::ONE) * 0.5 * self.viewport
    }

    /// Liegt die Bildschirmposition im Viewport?
    pub fn contains(&self, screen_pos: DVec2) -> bool {
        screen_pos.cmpge(DVec2::ZERO).all() && screen_pos.cmple(self.viewport).all()
    }
}

impl Default for TopDownCamera {
    fn default() -> Self {
        Self::new(DVec2::new(1920.0, 1080.0))
    }
}

impl ScreenProjector for TopDownCamera {
    fn world_to_screen(&self, world: DVec3) -> Option<ProjectedPoint> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 || !world.is_finite() {
            return None;
        }
        let position = self.planar_to_screen(planar(world));
        Some(ProjectedPoint {
            position,
            visible: self.contains(position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> TopDownCamera {
        TopDownCamera::new(DVec2::new(800.0, 600.0))
    }

    #[test]
    fn test_camera_center_projects_to_viewport_center() {
        let mut camera = camera();
        camera.position = DVec2::new(120.0, -40.0);
        let projected = camera
            .world_to_screen(DVec3::new(120.0, 35.0, -40.0))
            .expect("Projektion erwartet");
        assert_relative_eq!(projected.position.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(projected.position.y, 300.0, epsilon = 1e-9);
        assert!(projected.visible);
    }

    #[test]
    fn test_zoom_scales_distance_from_center() {
        let mut camera = camera();
        let world = DVec3::new(100.0, 0.0, 50.0);
        let near = camera.world_to_screen(world).expect("Projektion erwartet");
        camera.zoom = 2.0;
        let far = camera.world_to_screen(world).expect("Projektion erwartet");
        // Doppelter Zoom → doppelter Pixel-Abstand zur Mitte
        let center = DVec2::new(400.0, 300.0);
        assert_relative_eq!(
            (far.position - center).length(),
            2.0 * (near.position - center).length(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_point_outside_viewport_is_not_visible() {
        let camera = camera();
        let projected = camera
            .world_to_screen(DVec3::new(1.0e5, 0.0, 0.0))
            .expect("Projektion erwartet");
        assert!(!projected.visible);
        assert!(projected.position.x > 800.0);
    }

    #[test]
    fn test_viewport_edge_counts_as_visible() {
        let camera = camera();
        assert!(camera.contains(DVec2::ZERO));
        assert!(camera.contains(DVec2::new(800.0, 600.0)));
        assert!(!camera.contains(DVec2::new(-0.5, 10.0)));
    }

    #[test]
    fn test_empty_viewport_cannot_project() {
        let camera = TopDownCamera::new(DVec2::ZERO);
        assert!(camera.world_to_screen(DVec3::ZERO).is_none());
        assert!(TopDownCamera::default()
            .world_to_screen(DVec3::splat(f64::NAN))
            .is_none());
    }
}
