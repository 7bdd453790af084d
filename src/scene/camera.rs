// camera.rs - Perspective camera

use glam::{DMat4, DVec3};

use crate::config::CameraConfig;

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: DVec3,
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    target: DVec3,
    view: DMat4,
    projection: DMat4,
}

impl Camera {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            position: DVec3::new(0.0, 0.0, config.distance),
            fov_degrees: config.fov_degrees,
            aspect: 1.0,
            near: config.near,
            far: config.far,
            target: DVec3::ZERO,
            view: DMat4::IDENTITY,
            projection: DMat4::IDENTITY,
        };
        camera.set_viewport(width, height);
        camera.look_at(DVec3::ZERO);
        camera
    }

    /// Update aspect and projection. Zero-sized viewports keep the old aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f64 / height as f64;
        }
        self.projection = DMat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    pub fn look_at(&mut self, target: DVec3) {
        self.target = target;
        self.view = DMat4::look_at_rh(self.position, target, DVec3::Y);
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }

    pub fn projection(&self) -> DMat4 {
        self.projection
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection * self.view
    }

    /// Unit vector the camera is facing.
    pub fn forward(&self) -> DVec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_view_axis_facing_origin() {
        let cam = Camera::new(&CameraConfig::default(), 1600, 900);
        assert_eq!(cam.position, DVec3::new(0.0, 0.0, 30.0));
        assert!((cam.forward() - DVec3::NEG_Z).length() < 1e-12);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let mut cam = Camera::new(&CameraConfig::default(), 800, 600);
        cam.position = DVec3::new(2.0, -1.0, 30.0);
        cam.look_at(DVec3::ZERO);
        let clip = cam.view_projection() * DVec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-9 && ndc.y.abs() < 1e-9);
    }

    #[test]
    fn zero_viewport_keeps_aspect() {
        let mut cam = Camera::new(&CameraConfig::default(), 1000, 500);
        cam.set_viewport(0, 700);
        assert_eq!(cam.aspect, 2.0);
    }
}
