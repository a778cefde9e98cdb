//! Perspective camera and viewport transforms
//!
//! Right-handed system, y up; the camera looks down its own -z. Only the
//! transforms hit testing needs live here: pixel to world ray, and world
//! point to pixel for hosts that anchor overlays to items.

use glam::{Mat4, Vec2, Vec3};

use crate::consts;
use crate::pick::Ray;

/// Viewport extent in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.is_valid() {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pixel position to normalized device coordinates, y flipped so +y
    /// faces up. Degenerate viewports and non-finite pointers yield `None`.
    pub fn to_ndc(&self, pointer: Vec2) -> Option<Vec2> {
        if !self.is_valid() || !pointer.is_finite() {
            return None;
        }
        Some(Vec2::new(
            (pointer.x / self.width) * 2.0 - 1.0,
            -(pointer.y / self.height) * 2.0 + 1.0,
        ))
    }
}

/// Perspective camera framing the carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    /// Vertical field of view, radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at `position` aimed at `target` with a y-up horizon
    pub fn looking_at(position: Vec3, target: Vec3, fov_y_deg: f32, aspect: f32) -> Self {
        let forward = (target - position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        Self {
            position,
            forward,
            up,
            right,
            fov_y: fov_y_deg.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// The stock framing: off to the side of the ring, slightly below its
    /// plane, widening the field of view on narrow viewports
    pub fn default_framing(viewport: Viewport) -> Self {
        let fov_y_deg = if viewport.width < consts::CAMERA_NARROW_WIDTH {
            consts::CAMERA_FOV_NARROW_DEG
        } else {
            consts::CAMERA_FOV_DEG
        };
        Self::looking_at(
            Vec3::from_array(consts::CAMERA_EYE),
            Vec3::ZERO,
            fov_y_deg,
            viewport.aspect(),
        )
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect.max(1e-6), self.near, self.far)
    }

    /// World-space ray through a pixel
    pub fn screen_to_world_ray(&self, pointer: Vec2, viewport: Viewport) -> Option<Ray> {
        let ndc = viewport.to_ndc(pointer)?;
        let tan_half = (self.fov_y * 0.5).tan();
        let dx = ndc.x * tan_half * self.aspect;
        let dy = ndc.y * tan_half;
        let dir = (self.right * dx + self.up * dy + self.forward).try_normalize()?;
        Some(Ray {
            origin: self.position,
            dir,
        })
    }

    /// Project a world point to pixel coordinates
    ///
    /// Points at or behind the camera plane yield `None`; points outside
    /// the viewport still project, so callers can track off-screen items.
    pub fn world_to_screen(&self, world: Vec3, viewport: Viewport) -> Option<Vec2> {
        if !world.is_finite() || !viewport.is_valid() {
            return None;
        }
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    #[test]
    fn test_center_pixel_ray_matches_forward() {
        let camera = Camera::looking_at(Vec3::new(6.0, -0.5, 0.0), Vec3::ZERO, 50.0, 16.0 / 9.0);
        let center = Vec2::new(VIEWPORT.width / 2.0, VIEWPORT.height / 2.0);
        let ray = camera.screen_to_world_ray(center, VIEWPORT).unwrap();
        assert!((ray.dir - camera.forward).length() < 1e-5);
        assert_eq!(ray.origin, camera.position);
    }

    #[test]
    fn test_project_then_unproject_hits_the_point() {
        let camera = Camera::default_framing(VIEWPORT);
        let world = Vec3::new(0.0, 0.3, 1.2);
        let pixel = camera.world_to_screen(world, VIEWPORT).unwrap();
        let ray = camera.screen_to_world_ray(pixel, VIEWPORT).unwrap();

        // The ray should pass through the original point
        let t = (world - ray.origin).dot(ray.dir);
        let closest = ray.origin + ray.dir * t;
        assert!((closest - world).length() < 1e-3);
    }

    #[test]
    fn test_point_behind_camera_does_not_project() {
        let camera = Camera::default_framing(VIEWPORT);
        // Camera sits at x = 6 looking toward the origin
        let behind = Vec3::new(20.0, 0.0, 0.0);
        assert!(camera.world_to_screen(behind, VIEWPORT).is_none());
    }

    #[test]
    fn test_narrow_viewport_widens_fov() {
        let narrow = Camera::default_framing(Viewport::new(400.0, 800.0));
        let wide = Camera::default_framing(Viewport::new(1920.0, 1080.0));
        assert!((narrow.fov_y - 80f32.to_radians()).abs() < 1e-6);
        assert!((wide.fov_y - 50f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_viewport_yields_no_ray() {
        let camera = Camera::default_framing(VIEWPORT);
        let dead = Viewport::new(0.0, 0.0);
        assert!(camera.screen_to_world_ray(Vec2::new(1.0, 1.0), dead).is_none());
        assert!(
            camera
                .screen_to_world_ray(Vec2::new(f32::NAN, 1.0), VIEWPORT)
                .is_none()
        );
    }
}
