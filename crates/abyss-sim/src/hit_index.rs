//! Screen-space hit index.
//!
//! Every alive rendered entity registers a square probe centred on its
//! projected position; the combat reticle registers one of its own. A hit
//! test returns the tag of the probe closest to the camera that contains the
//! query point, optionally ignoring one tag.

use glam::{Mat4, Vec2, Vec3};

use abyss_core::constants::*;
use abyss_core::types::{ScreenPoint, Viewport};

/// What a probe stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeTag {
    Entity(String),
    Reticle,
}

#[derive(Debug, Clone)]
struct Probe {
    tag: ProbeTag,
    center: Vec2,
    half_size: f32,
    /// Distance along the view axis. Overlay probes sit at 0.
    camera_distance: f32,
}

impl Probe {
    fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half_size
            && (point.y - self.center.y).abs() <= self.half_size
    }
}

/// Probes registered for the current frame.
#[derive(Debug, Clone)]
pub struct HitIndex {
    viewport: Viewport,
    view_proj: Mat4,
    probes: Vec<Probe>,
}

impl HitIndex {
    pub fn new(viewport: Viewport) -> Self {
        let mut index = Self {
            viewport,
            view_proj: Mat4::IDENTITY,
            probes: Vec::new(),
        };
        index.rebuild(0.0);
        index
    }

    /// Drop every probe and aim the camera at `depth`.
    pub fn rebuild(&mut self, depth: f64) {
        self.probes.clear();
        let y = -(depth as f32);
        let eye = Vec3::new(0.0, y, CAMERA_Z);
        let view = Mat4::look_at_rh(eye, Vec3::new(0.0, y, 0.0), Vec3::Y);
        let proj = Mat4::perspective_rh_gl(
            CAMERA_FOV_DEGREES.to_radians(),
            self.viewport.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        self.view_proj = proj * view;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Project a world position to pixels. Returns the pixel position and
    /// the distance along the view axis, or None behind the camera.
    pub fn project(&self, world: Vec3) -> Option<(Vec2, f32)> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= CAMERA_NEAR {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let pixel = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc.y) * 0.5 * self.viewport.height,
        );
        Some((pixel, clip.w))
    }

    /// Register an entity probe `100 * scale` pixels wide.
    pub fn register_entity(&mut self, entity_id: &str, world: Vec3, scale: f32) {
        if let Some((center, distance)) = self.project(world) {
            self.probes.push(Probe {
                tag: ProbeTag::Entity(entity_id.to_string()),
                center,
                half_size: PROBE_PIXELS_PER_SCALE * scale * 0.5,
                camera_distance: distance,
            });
        }
    }

    /// Register the reticle overlay at a screen point.
    pub fn register_reticle(&mut self, at: ScreenPoint) {
        self.probes.push(Probe {
            tag: ProbeTag::Reticle,
            center: at.to_pixels(&self.viewport),
            half_size: RETICLE_PROBE_PIXELS * 0.5,
            camera_distance: 0.0,
        });
    }

    /// Tag of the nearest probe containing `point` (pixels).
    pub fn hit_test(&self, point: Vec2, exclude: Option<&ProbeTag>) -> Option<&ProbeTag> {
        self.probes
            .iter()
            .filter(|p| exclude != Some(&p.tag) && p.contains(point))
            .min_by(|a, b| a.camera_distance.total_cmp(&b.camera_distance))
            .map(|p| &p.tag)
    }

    /// Entity under a screen point, looking through the reticle.
    pub fn entity_at(&self, at: ScreenPoint) -> Option<String> {
        match self.hit_test(at.to_pixels(&self.viewport), Some(&ProbeTag::Reticle)) {
            Some(ProbeTag::Entity(id)) => Some(id.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}
