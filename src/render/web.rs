use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Paint, SkyCanvas};

impl SkyCanvas for CanvasRenderingContext2d {
    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::translate(self, x, y).ok();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        CanvasRenderingContext2d::scale(self, sx, sy).ok();
    }

    fn rotate(&mut self, angle: f64) {
        CanvasRenderingContext2d::rotate(self, angle).ok();
    }

    fn set_fill(&mut self, paint: Paint<'_>) {
        match paint {
            Paint::Solid(color) => self.set_fill_style_str(color),
            Paint::Radial(g) => {
                let Ok(gradient) = self.create_radial_gradient(g.x0, g.y0, g.r0, g.x1, g.y1, g.r1) else {
                    return;
                };
                for (offset, color) in g.stops {
                    gradient.add_color_stop(*offset as f32, color).ok();
                }
                self.set_fill_style_canvas_gradient(&gradient);
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
        self.begin_path();
        if self.arc(x, y, r, 0.0, TAU).is_ok() {
            self.fill();
        }
    }

    fn fill_ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64) {
        self.begin_path();
        if self.ellipse(x, y, rx, ry, rotation, 0.0, TAU).is_ok() {
            self.fill();
        }
    }
}
