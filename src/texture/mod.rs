// texture/ - Procedural panel textures
//
// Each panel gets a square card: a rounded rectangle filled with a diagonal
// gradient from the opaque panel color to a faded copy of it, and the label
// centered on top in bold white. Pure function of the palette entry.

pub mod font;

use image::{Rgba, RgbaImage};

use crate::config::{TEXTURE_CORNER_RADIUS, TEXTURE_FADE_ALPHA};
use crate::palette::{PanelEntry, Rgb};
use font::{ADVANCE, GLYPH_H, GLYPH_ROWS, GLYPH_W};

// Cap height of a bold 120px face
const CAP_HEIGHT: u32 = 84;
const TEXT_MARGIN: u32 = 32;

#[derive(Clone, Debug, PartialEq)]
pub struct PanelTexture {
    pub image: RgbaImage,
}

impl PanelTexture {
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Raw RGBA bytes, row-major, not premultiplied.
    pub fn bytes(&self) -> &[u8] {
        self.image.as_raw()
    }
}

pub fn generate(entry: &PanelEntry, size: u32) -> PanelTexture {
    let mut image = RgbaImage::new(size, size);
    fill_card(&mut image, entry.color, TEXTURE_CORNER_RADIUS);
    draw_label(&mut image, entry.text, Rgb::WHITE);
    PanelTexture { image }
}

/// Rounded-rect mask with a top-left to bottom-right alpha gradient.
fn fill_card(image: &mut RgbaImage, color: Rgb, radius: f32) {
    let size = image.width() as f32;
    let radius = radius.min(size * 0.5);
    let span = 2.0 * size;

    for (x, y, px) in image.enumerate_pixels_mut() {
        let cx = x as f32 + 0.5;
        let cy = y as f32 + 0.5;

        let coverage = rounded_rect_coverage(cx, cy, size, radius);
        if coverage <= 0.0 {
            *px = Rgba([0, 0, 0, 0]);
            continue;
        }

        let t = ((cx + cy) / span).clamp(0.0, 1.0);
        let alpha = lerp(255.0, TEXTURE_FADE_ALPHA as f32, t) * coverage;
        *px = Rgba([color.r, color.g, color.b, alpha.round() as u8]);
    }
}

/// 0..1 coverage of pixel center (x, y) by a size x size rounded rect.
#[inline]
fn rounded_rect_coverage(x: f32, y: f32, size: f32, r: f32) -> f32 {
    let dx = (r - x).max(x - (size - r)).max(0.0);
    let dy = (r - y).max(y - (size - r)).max(0.0);
    let outside = (dx * dx + dy * dy).sqrt() - r;
    (0.5 - outside).clamp(0.0, 1.0)
}

fn draw_label(image: &mut RgbaImage, text: &str, color: Rgb) {
    let size = image.width();
    let cells = font::line_cells(text);
    if cells == 0 {
        return;
    }

    let fit = size.saturating_sub(2 * TEXT_MARGIN) / cells;
    let scale = (CAP_HEIGHT / GLYPH_H).min(fit).max(1);
    let bold = scale / 4;

    let width = cells * scale;
    let x0 = (size as i64 - width as i64) / 2;
    let y0 = (size as i64 - (GLYPH_H * scale) as i64) / 2;
    let ink = Rgba([color.r, color.g, color.b, 255]);

    for (i, c) in text.chars().enumerate() {
        let g = font::glyph(c);
        let gx = x0 + (i as u32 * ADVANCE * scale) as i64;

        for row in 0..GLYPH_ROWS as u32 {
            for col in 0..GLYPH_W {
                if !font::lit(&g, col, row) {
                    continue;
                }
                let px = gx + (col * scale) as i64;
                let py = y0 + (row * scale) as i64;
                fill_rect(image, px, py, scale + bold, scale, ink);
            }
        }
    }
}

fn fill_rect(image: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32, ink: Rgba<u8>) {
    let (iw, ih) = (image.width() as i64, image.height() as i64);
    for py in y.max(0)..(y + h as i64).min(ih) {
        for px in x.max(0)..(x + w as i64).min(iw) {
            image.put_pixel(px as u32, py as u32, ink);
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_PANELS;

    #[test]
    fn generation_is_deterministic() {
        for entry in DEFAULT_PANELS {
            let a = generate(entry, 512);
            let b = generate(entry, 512);
            assert_eq!(a, b, "{} texture differs between runs", entry.name);
        }
    }

    #[test]
    fn corners_are_transparent() {
        let tex = generate(&DEFAULT_PANELS[0], 512);
        for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511), (15, 15), (496, 496)] {
            assert_eq!(tex.image.get_pixel(x, y)[3], 0, "({x}, {y}) should be masked");
        }
        // just inside the 60px arc
        for (x, y) in [(20, 20), (491, 20), (20, 491)] {
            assert!(tex.image.get_pixel(x, y)[3] > 200, "({x}, {y}) should be opaque");
        }
    }

    #[test]
    fn gradient_fades_toward_bottom_right() {
        let entry = &DEFAULT_PANELS[1];
        let tex = generate(entry, 512);

        let top = tex.image.get_pixel(256, 20);
        let right = tex.image.get_pixel(480, 256);
        assert_eq!([top[0], top[1], top[2]], [entry.color.r, entry.color.g, entry.color.b]);
        assert_eq!([right[0], right[1], right[2]], [entry.color.r, entry.color.g, entry.color.b]);
        assert!(top[3] > right[3]);
        assert!(right[3] >= TEXTURE_FADE_ALPHA);
    }

    #[test]
    fn label_is_drawn_in_white() {
        // the left stem of 'H' sits at the left edge of the text block
        let entry = &DEFAULT_PANELS[0];
        let tex = generate(entry, 512);
        let cells = font::line_cells(entry.text);
        let scale = 12;
        let x0 = (512 - cells * scale) / 2;
        let y0 = (512 - GLYPH_H * scale) / 2;
        let px = tex.image.get_pixel(x0 + scale / 2, y0 + scale / 2);
        assert_eq!(px.0, [255, 255, 255, 255]);
    }

    #[test]
    fn long_labels_shrink_to_fit() {
        let entry = PanelEntry::new("long", "TypeScript+Rust", 0x336699);
        let tex = generate(&entry, 512);
        // nothing drawn over the masked corners or the side margins
        for y in 0..512 {
            assert_ne!(tex.image.get_pixel(2, y).0, [255, 255, 255, 255]);
            assert_ne!(tex.image.get_pixel(509, y).0, [255, 255, 255, 255]);
        }
    }
}
