// snapshot.rs - Software renderer for headless previews
//
// Projects particles as dots and panels as camera-facing textured squares.
// Panel rotation is ignored; the point is to check placement and drift.

use backdrop_engine::{Camera, RenderError, Renderer, Rgb, Scene};
use glam::{DMat4, DQuat, DVec3};
use image::{Rgba, RgbaImage};

pub struct SnapshotRenderer {
    image: RgbaImage,
    capture_at: u64,
    seen: u64,
}

impl SnapshotRenderer {
    /// Rasterize only the `capture_at`-th drawn frame.
    pub fn new(w: u32, h: u32, capture_at: u64) -> Self {
        Self { image: RgbaImage::new(w, h), capture_at, seen: 0 }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn rasterize(&mut self, scene: &Scene, camera: &Camera) {
        let (w, h) = (self.image.width(), self.image.height());
        let vp = camera.view_projection();
        let bg = scene.clear_color;
        for px in self.image.pixels_mut() {
            *px = Rgba([bg.r, bg.g, bg.b, 255]);
        }

        // Particles
        let spin = DMat4::from_quat(DQuat::from_rotation_y(scene.particles.rotation_y));
        let style = &scene.particles.style;
        for p in scene.particles.positions() {
            let world = spin.transform_point3(p.as_dvec3());
            if let Some((sx, sy, _)) = project(&vp, world, w, h) {
                blend(&mut self.image, sx as i64, sy as i64, style.color, style.opacity);
            }
        }

        // Panels, far to near
        let mut order: Vec<(usize, f64)> = scene
            .panels
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (p.transform.position - camera.position).length()))
            .collect();
        order.sort_unstable_by(|a, b| b.1.total_cmp(&a.1));

        let focal = camera.projection().y_axis.y;
        for (i, _) in order {
            let panel = &scene.panels[i];
            let Some((sx, sy, clip_w)) = project(&vp, panel.transform.position, w, h) else {
                continue;
            };
            let side = (scene.panel_style.size.x * focal / clip_w * h as f64 * 0.5) as i64;
            if side <= 0 {
                continue;
            }
            blit(&mut self.image, &panel.texture.image, sx as i64 - side / 2, sy as i64 - side / 2, side);
        }
    }
}

impl Renderer for SnapshotRenderer {
    fn prepare(&mut self, scene: &Scene, _: &Camera) -> Result<(), RenderError> {
        if scene.panels.is_empty() {
            return Err(RenderError::Unavailable("nothing to draw".into()));
        }
        Ok(())
    }

    fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        self.seen += 1;
        if self.seen == self.capture_at {
            self.rasterize(scene, camera);
        }
        Ok(())
    }

    fn resize(&mut self, w: u32, h: u32) -> Result<(), RenderError> {
        self.image = RgbaImage::new(w, h);
        Ok(())
    }
}

/// World point to (screen x, screen y, clip w); None when behind the camera.
fn project(vp: &DMat4, p: DVec3, w: u32, h: u32) -> Option<(f64, f64, f64)> {
    let clip = *vp * p.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let sx = (ndc.x * 0.5 + 0.5) * w as f64;
    let sy = (1.0 - (ndc.y * 0.5 + 0.5)) * h as f64;
    Some((sx, sy, clip.w))
}

fn blend(img: &mut RgbaImage, x: i64, y: i64, c: Rgb, a: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let mix = |d: u8, s: u8| (d as f32 + (s as f32 - d as f32) * a).round() as u8;
    *dst = Rgba([mix(dst[0], c.r), mix(dst[1], c.g), mix(dst[2], c.b), 255]);
}

/// Nearest-neighbour scaled copy of `tex` into a side x side square.
fn blit(img: &mut RgbaImage, tex: &RgbaImage, x0: i64, y0: i64, side: i64) {
    let ts = tex.width() as i64;
    for dy in 0..side {
        for dx in 0..side {
            let src = tex.get_pixel((dx * ts / side) as u32, (dy * ts / side) as u32);
            if src[3] == 0 {
                continue;
            }
            let c = Rgb { r: src[0], g: src[1], b: src[2] };
            blend(img, x0 + dx, y0 + dy, c, src[3] as f32 / 255.0);
        }
    }
}
