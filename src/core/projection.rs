//! Scene tilt and perspective for the layer stack.
//!
//! Screen-style coordinates: +x right, +y down, +z toward the viewer, origin
//! at the stage centre. Layers sit at `z = -depth`. The scene is rotated about
//! X first, then Y, and projected with a fixed eye distance.

use glam::{Mat3, Vec2, Vec3};

use crate::render::SceneRotation;

/// Distance from the eye to the z = 0 plane.
pub const PERSPECTIVE: f32 = 1000.0;

/// A point after rotation and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Offset from the stage centre in pixels.
    pub offset: Vec2,
    /// Perspective scale at this point (1.0 on the z = 0 plane).
    pub scale: f32,
    /// Rotated z, for depth sorting.
    pub z: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct SceneProjection {
    rotation: Mat3,
    perspective: f32,
}

impl Default for SceneProjection {
    fn default() -> Self {
        Self::new(SceneRotation::default())
    }
}

impl SceneProjection {
    pub fn new(rotation: SceneRotation) -> Self {
        Self {
            rotation: rotation_matrix(rotation),
            perspective: PERSPECTIVE,
        }
    }

    pub fn set_rotation(&mut self, rotation: SceneRotation) {
        self.rotation = rotation_matrix(rotation);
    }

    /// Rotate and project a scene point. `None` if it lands at or behind the eye.
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let p = self.rotation * point;
        let w = self.perspective - p.z;
        if w <= f32::EPSILON {
            return None;
        }
        let scale = self.perspective / w;
        Some(Projected {
            offset: Vec2::new(p.x, p.y) * scale,
            scale,
            z: p.z,
        })
    }
}

/// `rotateX(x) rotateY(y)`: the X rotation is outermost, Y is applied to the point first.
fn rotation_matrix(rotation: SceneRotation) -> Mat3 {
    Mat3::from_rotation_x(rotation.x_deg.to_radians()) * Mat3::from_rotation_y(rotation.y_deg.to_radians())
}
