//! Marker layer helpers: how many ambient stars to show, and the inline
//! styles that place and animate each marker.

use crate::config::{AMBIENT_DENSITY, HIGH_DPR_DENSITY, HIGH_DPR_THRESHOLD};
use crate::layout::ViewportBucket;
use crate::model::{DisplayPosition, Star};

pub fn width_density(width: f64) -> f64 {
    AMBIENT_DENSITY[ViewportBucket::from_width(width).index()]
}

pub fn pixel_density(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio > HIGH_DPR_THRESHOLD {
        HIGH_DPR_DENSITY
    } else {
        1.0
    }
}

pub fn visible_ambient_count(total: usize, width: f64, device_pixel_ratio: f64) -> usize {
    let n = (total as f64 * width_density(width) * pixel_density(device_pixel_ratio)).floor();
    (n.max(0.0) as usize).min(total)
}

/// Absolute placement plus the float animation timing. Depends only on the
/// star and its position, so camera changes leave it untouched and the
/// animation keeps running.
pub fn marker_style(star: &Star, pos: DisplayPosition, ambient: bool) -> String {
    format!(
        "position:absolute; left:{}%; top:{}%; animation-duration:{}s; animation-delay:-{}s; z-index:20; cursor:{}; opacity:{}; transition:left 0.5s ease, top 0.5s ease;",
        pos.x,
        pos.y,
        star.speed,
        star.delay,
        if ambient { "default" } else { "pointer" },
        if ambient { 0.5 } else { 1.0 },
    )
}

/// Pixel dimensions of a marker's glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub core: f64,
    pub spike_length: f64,
    pub spike_thickness: f64,
    pub diagonal_length: f64,
}

impl Glyph {
    pub fn for_star(star: &Star, ambient: bool) -> Self {
        let core = (star.size * 0.2).max(2.0);
        let spike_length = star.size * if ambient { 1.5 } else { 2.5 };
        Self {
            core,
            spike_length,
            spike_thickness: (core * 0.3).max(0.5),
            diagonal_length: spike_length * 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Camera;

    #[test]
    fn density_shrinks_on_small_or_dense_screens() {
        assert_eq!(visible_ambient_count(40, 1440.0, 1.0), 40);
        assert_eq!(visible_ambient_count(40, 800.0, 1.0), 32);
        assert_eq!(visible_ambient_count(40, 375.0, 1.0), 24);
        assert_eq!(visible_ambient_count(40, 1440.0, 2.0), 34);
        assert_eq!(visible_ambient_count(40, 375.0, 3.0), 20);
        assert_eq!(visible_ambient_count(0, 375.0, 3.0), 0);
    }

    #[test]
    fn density_is_monotonic_in_width() {
        let mut last = 0;
        for w in [200.0, 639.0, 640.0, 1000.0, 1024.0, 4000.0] {
            let n = visible_ambient_count(40, w, 1.0);
            assert!(n >= last);
            last = n;
        }
    }

    #[test]
    fn marker_style_ignores_camera() {
        let cat = crate::catalog::Catalog::new(|| 0.4);
        let star = &cat.list_content_stars()[1];
        let pos = DisplayPosition { x: star.x, y: star.y };
        let before = marker_style(star, pos, false);
        let mut cam = Camera::default();
        cam.pan(40.0, 40.0);
        cam.zoom(1.0);
        assert_eq!(before, marker_style(star, pos, false));
        assert!(before.contains("left:120%; top:20%;"));
        assert!(before.contains("animation-duration:20s; animation-delay:-2s;"));
    }

    #[test]
    fn glyph_has_minimum_core() {
        let cat = crate::catalog::Catalog::new(|| 0.0);
        let tiny = &cat.list_ambient_stars()[0];
        let g = Glyph::for_star(tiny, true);
        assert_eq!(g.core, 2.0);
        assert_eq!(g.spike_length, 7.5);
    }
}
