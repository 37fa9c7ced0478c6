//! Canvas background: fixed sky gradient, a slow galaxy layer and the dust
//! field, all drawn through [`SkyCanvas`] so the frame logic stays testable.

mod frame_loop;
mod web;

pub use frame_loop::FrameLoop;

use std::f64::consts::TAU;

use crate::config::{
    DUST_FIELD_EXTENT, DUST_MAX_ALPHA, DUST_MAX_SIZE, DUST_PAN_WEIGHT, DUST_PARTICLE_COUNT, GALAXY_ARMS,
    GALAXY_PAN_WEIGHT, GALAXY_SCALE_WEIGHT, GALAXY_SPIN_PER_MS, GALAXY_SPOTS_PER_ARM, SKY_BASE, SKY_INNER,
    SKY_OUTER,
};
use crate::state::Camera;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient<'a> {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
    pub stops: &'a [(f64, &'a str)],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint<'a> {
    Solid(&'a str),
    Radial(RadialGradient<'a>),
}

/// The subset of a 2D context the background needs.
pub trait SkyCanvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn rotate(&mut self, angle: f64);
    fn set_fill(&mut self, paint: Paint<'_>);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_circle(&mut self, x: f64, y: f64, r: f64);
    fn fill_ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64);
}

/// A speck of dust in world space; the camera is applied only when drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustParticle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalaxySpot {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Everything random about the background, generated once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub dust: Vec<DustParticle>,
    pub spots: Vec<[GalaxySpot; GALAXY_SPOTS_PER_ARM]>,
}

impl Starfield {
    pub fn generate(mut random: impl FnMut() -> f64) -> Self {
        let dust = (0..DUST_PARTICLE_COUNT)
            .map(|_| DustParticle {
                x: (random() - 0.5) * DUST_FIELD_EXTENT,
                y: (random() - 0.5) * DUST_FIELD_EXTENT,
                size: random() * DUST_MAX_SIZE,
                alpha: random() * DUST_MAX_ALPHA,
            })
            .collect();
        let spots = (0..GALAXY_ARMS)
            .map(|_| {
                std::array::from_fn(|_| GalaxySpot {
                    x: 150.0 + random() * 200.0,
                    y: (random() - 0.5) * 100.0,
                    r: random() * 2.0 + 1.0,
                })
            })
            .collect();
        Self { dust, spots }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub width: f64,
    pub height: f64,
    /// Monotonic timestamp in ms.
    pub time_ms: f64,
    pub camera: Camera,
    pub show_galaxy: bool,
}

const ARM_STOPS: [(f64, &str); 3] = [
    (0.0, "rgba(139, 92, 246, 0.1)"),
    (0.5, "rgba(59, 130, 246, 0.05)"),
    (1.0, "transparent"),
];
const CORE_STOPS: [(f64, &str); 2] = [(0.0, "rgba(255, 255, 255, 0.1)"), (1.0, "transparent")];
const SPOT_FILL: &str = "rgba(255, 255, 255, 0.05)";

pub fn paint_frame(canvas: &mut impl SkyCanvas, field: &Starfield, frame: &FrameInput) {
    let (w, h) = (frame.width, frame.height);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let cam = frame.camera;

    // sky, pinned to the viewport
    canvas.set_fill(Paint::Solid(SKY_BASE));
    canvas.fill_rect(0.0, 0.0, w, h);
    let sky_stops = [(0.0, SKY_INNER), (1.0, SKY_OUTER)];
    canvas.set_fill(Paint::Radial(RadialGradient {
        x0: cx,
        y0: cy,
        r0: 0.0,
        x1: cx,
        y1: cy,
        r1: w.max(h),
        stops: &sky_stops,
    }));
    canvas.fill_rect(0.0, 0.0, w, h);

    if frame.show_galaxy {
        paint_galaxy(canvas, field, frame);
    }

    canvas.save();
    canvas.translate(cx, cy);
    canvas.scale(cam.scale, cam.scale);
    canvas.translate(cam.pan_x * DUST_PAN_WEIGHT, cam.pan_y * DUST_PAN_WEIGHT);
    for p in &field.dust {
        canvas.set_fill(Paint::Solid(&format!("rgba(255, 255, 255, {})", p.alpha)));
        canvas.fill_circle(p.x, p.y, p.size);
    }
    canvas.restore();
}

fn paint_galaxy(canvas: &mut impl SkyCanvas, field: &Starfield, frame: &FrameInput) {
    let cam = frame.camera;
    let galaxy_scale = cam.scale * GALAXY_SCALE_WEIGHT;
    canvas.save();
    canvas.translate(frame.width / 2.0, frame.height / 2.0);
    canvas.translate(cam.pan_x * GALAXY_PAN_WEIGHT, cam.pan_y * GALAXY_PAN_WEIGHT);
    canvas.scale(galaxy_scale, galaxy_scale);
    canvas.rotate(frame.time_ms * GALAXY_SPIN_PER_MS);

    for (arm, spots) in field.spots.iter().enumerate() {
        canvas.save();
        canvas.rotate(arm as f64 * TAU / GALAXY_ARMS as f64);
        canvas.set_fill(Paint::Radial(RadialGradient {
            x0: 200.0,
            y0: 0.0,
            r0: 0.0,
            x1: 200.0,
            y1: 0.0,
            r1: 300.0,
            stops: &ARM_STOPS,
        }));
        canvas.fill_ellipse(200.0, 0.0, 400.0, 120.0, 0.2);
        canvas.set_fill(Paint::Solid(SPOT_FILL));
        for s in spots {
            canvas.fill_circle(s.x, s.y, s.r);
        }
        canvas.restore();
    }

    canvas.set_fill(Paint::Radial(RadialGradient {
        x0: 0.0,
        y0: 0.0,
        r0: 0.0,
        x1: 0.0,
        y1: 0.0,
        r1: 100.0,
        stops: &CORE_STOPS,
    }));
    canvas.fill_circle(0.0, 0.0, 100.0);
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Save,
        Restore,
        Translate(f64, f64),
        Scale(f64, f64),
        Rotate(f64),
        Fill(String),
        Rect,
        Circle(f64, f64, f64),
        Ellipse,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl SkyCanvas for Recorder {
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }
        fn translate(&mut self, x: f64, y: f64) {
            self.ops.push(Op::Translate(x, y));
        }
        fn scale(&mut self, sx: f64, sy: f64) {
            self.ops.push(Op::Scale(sx, sy));
        }
        fn rotate(&mut self, angle: f64) {
            self.ops.push(Op::Rotate(angle));
        }
        fn set_fill(&mut self, paint: Paint<'_>) {
            let s = match paint {
                Paint::Solid(c) => c.to_string(),
                Paint::Radial(g) => format!("radial r={} {}", g.r1, g.stops[0].1),
            };
            self.ops.push(Op::Fill(s));
        }
        fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
            self.ops.push(Op::Rect);
        }
        fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
            self.ops.push(Op::Circle(x, y, r));
        }
        fn fill_ellipse(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {
            self.ops.push(Op::Ellipse);
        }
    }

    fn seq() -> impl FnMut() -> f64 {
        let mut i = 0u32;
        move || {
            i = i.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (i >> 8) as f64 / (1u32 << 24) as f64
        }
    }

    fn frame(camera: Camera, show_galaxy: bool) -> FrameInput {
        FrameInput {
            width: 800.0,
            height: 600.0,
            time_ms: 2_000.0,
            camera,
            show_galaxy,
        }
    }

    #[test]
    fn field_is_generated_in_range() {
        let field = Starfield::generate(seq());
        assert_eq!(field.dust.len(), DUST_PARTICLE_COUNT);
        assert_eq!(field.spots.len(), GALAXY_ARMS);
        for p in &field.dust {
            assert!(p.x.abs() <= DUST_FIELD_EXTENT / 2.0 && p.y.abs() <= DUST_FIELD_EXTENT / 2.0);
            assert!((0.0..1.0).contains(&p.alpha) && p.size < DUST_MAX_SIZE);
        }
    }

    #[test]
    fn dust_layer_uses_camera_transform() {
        let field = Starfield::generate(seq());
        let mut cam = Camera::default();
        cam.pan(50.0, -20.0);
        cam.zoom(0.4);
        let mut rec = Recorder::default();
        paint_frame(&mut rec, &field, &frame(cam, false));

        assert_eq!(rec.ops[0], Op::Fill(SKY_BASE.to_string()));
        assert_eq!(rec.ops[2], Op::Fill(format!("radial r=800 {SKY_INNER}")));
        assert_eq!(rec.ops[4], Op::Save);
        assert_eq!(rec.ops[5], Op::Translate(400.0, 300.0));
        assert_eq!(rec.ops[6], Op::Scale(cam.scale, cam.scale));
        assert!((cam.scale - 1.4).abs() < 1e-12);
        assert_eq!(rec.ops[7], Op::Translate(25.0, -10.0));
        let first = field.dust[0];
        assert_eq!(rec.ops[9], Op::Circle(first.x, first.y, first.size));
        let circles = rec.ops.iter().filter(|o| matches!(o, Op::Circle(..))).count();
        assert_eq!(circles, DUST_PARTICLE_COUNT);
        assert_eq!(rec.ops.last(), Some(&Op::Restore));
    }

    #[test]
    fn galaxy_layer_recedes_and_spins() {
        let field = Starfield::generate(seq());
        let mut cam = Camera::default();
        cam.pan(50.0, -20.0);
        cam.zoom(1.0);
        let mut rec = Recorder::default();
        paint_frame(&mut rec, &field, &frame(cam, true));

        assert_eq!(
            &rec.ops[4..9],
            &[
                Op::Save,
                Op::Translate(400.0, 300.0),
                Op::Translate(10.0, -4.0),
                Op::Scale(1.0, 1.0),
                Op::Rotate(2_000.0 * GALAXY_SPIN_PER_MS),
            ]
        );
        let ellipses = rec.ops.iter().filter(|o| **o == Op::Ellipse).count();
        assert_eq!(ellipses, GALAXY_ARMS);
        let saves = rec.ops.iter().filter(|o| **o == Op::Save).count();
        let restores = rec.ops.iter().filter(|o| **o == Op::Restore).count();
        assert_eq!(saves, restores);
    }

    #[test]
    fn redraw_is_stable_for_same_input() {
        let field = Starfield::generate(seq());
        let input = frame(Camera::default(), true);
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        paint_frame(&mut a, &field, &input);
        paint_frame(&mut b, &field, &input);
        assert_eq!(a.ops, b.ops);
    }
}
